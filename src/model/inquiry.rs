//! Inbound inquiry messages and their admin-side status workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// Workflow status of an inquiry, as managed from the admin console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    /// Just arrived, nobody has looked at it.
    New,
    /// Opened in the detail view at least once.
    Read,
    /// A reply went out.
    Replied,
    /// Kept for the record but out of the active queue.
    Archived,
}

/// One inbound message from the public contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: String,
    /// Sender name as typed into the form.
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial edit of an inquiry. Only the status is admin-editable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryPatch {
    pub status: Option<InquiryStatus>,
}

impl InquiryPatch {
    pub fn status(status: InquiryStatus) -> Self {
        Self {
            status: Some(status),
        }
    }
}

impl Record for Inquiry {
    type Id = String;
    type Patch = InquiryPatch;

    fn id(&self) -> &String {
        &self.id
    }

    fn apply_patch(&mut self, patch: &InquiryPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    fn inverse(&self, patch: &InquiryPatch) -> InquiryPatch {
        InquiryPatch {
            status: patch.status.map(|_| self.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Inquiry {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        Inquiry {
            id: "inq-1".to_string(),
            name: "Jordan".to_string(),
            email: "jordan@example.com".to_string(),
            message: "Is the scan free?".to_string(),
            status: InquiryStatus::New,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_apply_then_inverse_restores_status() {
        let mut inquiry = sample();
        let patch = InquiryPatch::status(InquiryStatus::Read);

        let undo = inquiry.inverse(&patch);
        inquiry.apply_patch(&patch);
        assert_eq!(inquiry.status, InquiryStatus::Read);

        inquiry.apply_patch(&undo);
        assert_eq!(inquiry.status, InquiryStatus::New);
    }

    #[test]
    fn test_empty_patch_is_a_noop() {
        let mut inquiry = sample();
        let before = inquiry.clone();
        let patch = InquiryPatch::default();

        let undo = inquiry.inverse(&patch);
        inquiry.apply_patch(&patch);

        assert_eq!(inquiry, before);
        assert_eq!(undo, InquiryPatch::default());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&InquiryStatus::Replied).unwrap();
        assert_eq!(json, "\"replied\"");
    }
}
