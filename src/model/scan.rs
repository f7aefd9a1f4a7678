//! Disease-scan classification results as stored by the intake flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// Score for one candidate class in a scan's result breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassScore {
    pub class: String,
    /// Percentage in 0..=100.
    pub score: f32,
}

/// One completed disease scan.
///
/// The classification itself happens upstream; the console only reads,
/// relabels and deletes results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    pub id: String,
    /// Address of the client that submitted the scan.
    pub source_addr: String,
    /// Winning classification label.
    pub label: String,
    /// Confidence of the winning label, percentage in 0..=100.
    pub confidence: f32,
    /// Per-class scores behind the winning label.
    pub breakdown: Vec<ClassScore>,
    /// Storage reference of the scanned image.
    pub image_ref: String,
    pub created_at: DateTime<Utc>,
}

/// Partial edit of a scan result (admin-side label correction).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanPatch {
    pub label: Option<String>,
    pub confidence: Option<f32>,
}

impl ScanPatch {
    pub fn relabel(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: Some(label.into()),
            confidence: Some(confidence),
        }
    }
}

impl Record for ScanResult {
    type Id = String;
    type Patch = ScanPatch;

    fn id(&self) -> &String {
        &self.id
    }

    fn apply_patch(&mut self, patch: &ScanPatch) {
        if let Some(label) = &patch.label {
            self.label = label.clone();
        }
        if let Some(confidence) = patch.confidence {
            self.confidence = confidence;
        }
    }

    fn inverse(&self, patch: &ScanPatch) -> ScanPatch {
        ScanPatch {
            label: patch.label.as_ref().map(|_| self.label.clone()),
            confidence: patch.confidence.map(|_| self.confidence),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> ScanResult {
        ScanResult {
            id: "scan-7".to_string(),
            source_addr: "203.0.113.9".to_string(),
            label: "early_blight".to_string(),
            confidence: 87.5,
            breakdown: vec![
                ClassScore {
                    class: "early_blight".to_string(),
                    score: 87.5,
                },
                ClassScore {
                    class: "healthy".to_string(),
                    score: 12.5,
                },
            ],
            image_ref: "uploads/scan-7.jpg".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 3, 2, 14, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_relabel_then_inverse_restores_both_fields() {
        let mut scan = sample();
        let patch = ScanPatch::relabel("healthy", 100.0);

        let undo = scan.inverse(&patch);
        scan.apply_patch(&patch);
        assert_eq!(scan.label, "healthy");
        assert_eq!(scan.confidence, 100.0);

        scan.apply_patch(&undo);
        assert_eq!(scan.label, "early_blight");
        assert_eq!(scan.confidence, 87.5);
    }

    #[test]
    fn test_partial_patch_leaves_other_field_alone() {
        let mut scan = sample();
        let patch = ScanPatch {
            label: Some("healthy".to_string()),
            confidence: None,
        };

        let undo = scan.inverse(&patch);
        scan.apply_patch(&patch);

        assert_eq!(scan.confidence, 87.5);
        assert_eq!(undo.confidence, None);
    }
}
