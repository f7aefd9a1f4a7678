//! Tabular export pipeline.
//!
//! Pure encoding from an ordered record sequence to a downloadable
//! byte blob — no cache or network access. Records are flattened to
//! field maps through serde; the first record's key order fixes the
//! column schema for the whole export (later records: missing key →
//! empty cell, extra key → ignored).
//!
//! Zero records produce a zero-byte blob in both forms, not a header
//! and not an error. Triggering the actual download is the caller's
//! responsibility.

pub mod delimited;
pub mod sheet;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ExportError;

/// An encoded export: the bytes plus the suggested download name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Encode records as delimited text (`{base_name}.csv`).
pub fn delimited<T: Serialize>(records: &[T], base_name: &str) -> Result<ExportFile, ExportError> {
    let rows = flatten(records)?;
    Ok(ExportFile {
        file_name: format!("{base_name}.csv"),
        bytes: delimited::encode(&rows)?,
    })
}

/// Encode records as a spreadsheet table (`{base_name}.xlsx`).
pub fn spreadsheet<T: Serialize>(
    records: &[T],
    base_name: &str,
) -> Result<ExportFile, ExportError> {
    let rows = flatten(records)?;
    Ok(ExportFile {
        file_name: format!("{base_name}.xlsx"),
        bytes: sheet::encode(&rows)?,
    })
}

/// Flatten records to field maps. Field order is preserved, so the
/// first map's keys are usable as the column schema.
fn flatten<T: Serialize>(records: &[T]) -> Result<Vec<Map<String, Value>>, ExportError> {
    records
        .iter()
        .map(|record| match serde_json::to_value(record)? {
            Value::Object(map) => Ok(map),
            _ => Err(ExportError::NotARecord),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Inquiry, InquiryStatus};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_file_names_carry_the_right_extension() {
        let records = vec![serde_json::json!({"a": 1})];
        assert_eq!(delimited(&records, "inquiries").unwrap().file_name, "inquiries.csv");
        assert_eq!(
            spreadsheet(&records, "inquiries").unwrap().file_name,
            "inquiries.xlsx"
        );
    }

    #[test]
    fn test_non_map_records_are_rejected() {
        let records = vec![5_i32];
        assert!(matches!(
            delimited(&records, "x").unwrap_err(),
            ExportError::NotARecord
        ));
    }

    #[test]
    fn test_inquiry_export_uses_struct_field_order() {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let records = vec![Inquiry {
            id: "inq-1".to_string(),
            name: "Jordan".to_string(),
            email: "jordan@example.com".to_string(),
            message: "Is the scan free?".to_string(),
            status: InquiryStatus::New,
            created_at: at,
            updated_at: at,
        }];

        let file = delimited(&records, "inquiries").unwrap();
        let text = String::from_utf8(file.bytes).unwrap();
        let header = text.lines().next().unwrap();

        assert_eq!(
            header,
            "\"id\",\"name\",\"email\",\"message\",\"status\",\"created_at\",\"updated_at\""
        );
        assert!(text.contains("\"new\""));
    }
}
