use crate::core::encode::RECORD_WIDTH;
use crate::domain::model::Batch;
use chrono::NaiveDate;

const LINE_TERMINATOR: &str = "\r\n";

/// Joins the batch records with CRLF, one trailing terminator included, and
/// returns the UTF-8 bytes for export. Field content passes through untouched.
pub fn serialize(batch: &Batch) -> Vec<u8> {
    let mut out = String::with_capacity(batch.records.len() * (RECORD_WIDTH + 2));
    for record in &batch.records {
        out.push_str(record.as_str());
        out.push_str(LINE_TERMINATOR);
    }
    out.into_bytes()
}

/// The suggested export name embeds a caller-supplied date so the core never
/// touches the system clock.
pub fn export_filename(date: NaiveDate) -> String {
    format!("LOTE_BANCARIO_{}.txt", date.format("%Y-%m-%d"))
}
