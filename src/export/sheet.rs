//! Spreadsheet-table (xlsx) encoding of flattened records.

use rust_xlsxwriter::Workbook;
use serde_json::{Map, Value};

use crate::error::ExportError;

/// Encode rows as a single-sheet xlsx workbook.
///
/// Same schema rule as the delimited form: the first row's keys define
/// the columns. Cells keep the target format's native typing (numbers
/// as numbers, booleans as booleans); null and missing cells stay
/// blank; structured values are written as their JSON text. Zero rows
/// yield zero bytes — not even an empty workbook shell.
pub(crate) fn encode(rows: &[Map<String, Value>]) -> Result<Vec<u8>, ExportError> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let header: Vec<&str> = rows[0].keys().map(String::as_str).collect();

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (column, key) in header.iter().enumerate() {
        sheet.write_string(0, column as u16, *key)?;
    }
    for (index, row) in rows.iter().enumerate() {
        let line = index as u32 + 1;
        for (column, key) in header.iter().enumerate() {
            let column = column as u16;
            match row.get(*key) {
                None | Some(Value::Null) => {}
                Some(Value::Bool(flag)) => {
                    sheet.write_boolean(line, column, *flag)?;
                }
                Some(Value::Number(number)) => {
                    sheet.write_number(line, column, number.as_f64().unwrap_or(0.0))?;
                }
                Some(Value::String(text)) => {
                    sheet.write_string(line, column, text)?;
                }
                Some(structured) => {
                    sheet.write_string(line, column, structured.to_string())?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
