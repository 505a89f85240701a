use crate::core::encode::encode_record;
use crate::domain::model::{
    Batch, FormattedRecord, SkipReason, SourceRow, ValidatedRow, COL_ACCOUNT, COL_AMOUNT,
    COL_NAME, REQUIRED_COLUMNS,
};
use crate::utils::error::{BatchError, Result};

/// Schema shape is judged from the first row's keys alone; later rows are
/// only checked for per-row completeness. A sparse first row can therefore
/// misreport a column as absent, matching the source system this feeds.
fn check_required_columns(first: &SourceRow) -> Result<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !first.cells.contains_key(**column))
        .map(|column| column.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(BatchError::MissingColumns { columns: missing })
    }
}

fn validate_row(row: &SourceRow) -> std::result::Result<ValidatedRow, SkipReason> {
    let account = row
        .text(COL_ACCOUNT)
        .ok_or(SkipReason::MissingField(COL_ACCOUNT))?;
    let amount = row
        .text(COL_AMOUNT)
        .ok_or(SkipReason::MissingField(COL_AMOUNT))?;
    let name = row.text(COL_NAME).ok_or(SkipReason::MissingField(COL_NAME))?;

    Ok(ValidatedRow {
        account,
        amount,
        name,
    })
}

/// Folds the decoded rows into a batch. Incomplete or unencodable rows are
/// skipped and counted, never fatal; the batch only fails when the dataset is
/// empty, the schema is wrong, or nothing at all survives.
pub fn assemble(rows: &[SourceRow]) -> Result<Batch> {
    if rows.is_empty() {
        return Err(BatchError::EmptyDataset);
    }

    check_required_columns(&rows[0])?;

    let mut records: Vec<FormattedRecord> = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;

    for (position, row) in rows.iter().enumerate() {
        match validate_row(row).and_then(|valid| encode_record(position, &valid)) {
            Ok(record) => records.push(record),
            Err(reason) => {
                skipped += 1;
                // +2: one for the header row, one for 1-based numbering.
                tracing::warn!(row = position + 2, %reason, "row skipped");
            }
        }
    }

    if records.is_empty() {
        return Err(BatchError::NoValidRows { skipped });
    }

    tracing::debug!(records = records.len(), skipped, "batch assembled");
    Ok(Batch { records, skipped })
}
