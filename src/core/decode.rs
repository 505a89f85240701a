use crate::domain::model::{CellValue, SourceRow};
use crate::domain::ports::SheetDecoder;
use crate::utils::error::{BatchError, Result};
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use std::collections::HashMap;
use std::io::Cursor;

/// Calamine-backed decoder for the two accepted containers (legacy binary
/// `.xls` and open XML `.xlsx`). Only the first sheet is read; its first row
/// supplies the column names.
#[derive(Debug, Clone, Default)]
pub struct WorkbookDecoder;

impl WorkbookDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl SheetDecoder for WorkbookDecoder {
    fn decode(&self, payload: &[u8]) -> Result<Vec<SourceRow>> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(payload))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| BatchError::UnreadablePayload {
                reason: "workbook contains no sheets".to_string(),
            })??;

        let rows = rows_from_range(&range);
        tracing::debug!(rows = rows.len(), "workbook decoded");
        Ok(rows)
    }
}

fn rows_from_range(range: &Range<Data>) -> Vec<SourceRow> {
    let mut row_iter = range.rows();

    let headers: Vec<String> = match row_iter.next() {
        Some(cells) => cells
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect(),
        None => return Vec::new(),
    };

    let mut rows = Vec::new();
    for cells in row_iter {
        let mut mapped = HashMap::new();
        for (header, cell) in headers.iter().zip(cells) {
            if header.is_empty() {
                continue;
            }
            if let Some(value) = cell_value(cell) {
                mapped.insert(header.clone(), value);
            }
        }

        // Fully blank rows are dropped, so positions count data rows only.
        if !mapped.is_empty() {
            rows.push(SourceRow::new(mapped));
        }
    }

    rows
}

fn cell_value(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        // Whitespace-only text stays: the cell exists, even if the row
        // validator later treats its value as absent.
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(CellValue::Text(s.clone())),
        Data::Float(f) => Some(CellValue::Number(*f)),
        Data::Int(i) => Some(CellValue::Number(*i as f64)),
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        Data::DateTime(dt) => Some(CellValue::Number(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
    }
}
