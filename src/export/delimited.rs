//! Delimited-text (CSV) encoding of flattened records.

use serde_json::{Map, Value};

use crate::error::ExportError;

/// Encode rows as CSV bytes.
///
/// Every cell is quoted and embedded quotes are doubled. Zero rows
/// yield zero bytes — no header.
pub(crate) fn encode(rows: &[Map<String, Value>]) -> Result<Vec<u8>, ExportError> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let header: Vec<&str> = rows[0].keys().map(String::as_str).collect();

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());
    writer.write_record(&header)?;
    for row in rows {
        let cells: Vec<String> = header
            .iter()
            .map(|key| row.get(*key).map_or_else(String::new, cell_text))
            .collect();
        writer.write_record(&cells)?;
    }

    writer
        .into_inner()
        .map_err(|error| ExportError::Delimited(error.into_error().into()))
}

/// Text rendering of one cell value. Structured values keep their JSON
/// form; null and missing cells render empty.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        structured => structured.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test rows must be objects"),
        }
    }

    fn encode_text(rows: &[Map<String, Value>]) -> String {
        String::from_utf8(encode(rows).unwrap()).unwrap()
    }

    #[test]
    fn test_zero_records_yield_zero_bytes() {
        assert!(encode(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let rows = vec![row(json!({"name": "x", "note": "he said \"hi\""}))];
        let text = encode_text(&rows);
        assert!(text.contains("\"he said \"\"hi\"\"\""));
    }

    #[test]
    fn test_header_comes_from_first_record_in_key_order() {
        let rows = vec![row(json!({"b": 1, "a": 2}))];
        let text = encode_text(&rows);
        assert_eq!(text.lines().next().unwrap(), "\"b\",\"a\"");
    }

    #[test]
    fn test_schema_is_fixed_by_first_record() {
        let rows = vec![
            row(json!({"a": 1, "b": 2})),
            // Missing "b", extra "c": empty cell, ignored column.
            row(json!({"a": 3, "c": 9})),
        ];
        let text = encode_text(&rows);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "\"a\",\"b\"");
        assert_eq!(lines[1], "\"1\",\"2\"");
        assert_eq!(lines[2], "\"3\",\"\"");
    }

    #[test]
    fn test_scalars_render_as_text() {
        let rows = vec![row(json!({"n": 42.5, "ok": true, "gone": null}))];
        let text = encode_text(&rows);
        assert_eq!(text.lines().nth(1).unwrap(), "\"42.5\",\"true\",\"\"");
    }

    #[test]
    fn test_structured_values_keep_their_json_form() {
        let rows = vec![row(json!({"scores": [1, 2], "meta": {"k": "v"}}))];
        let text = encode_text(&rows);
        assert!(text.contains("\"[1,2]\""));
        assert!(text.contains("{\"\"k\"\":\"\"v\"\"}"));
    }
}
