use crate::domain::model::{FormattedRecord, SkipReason, ValidatedRow};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub const SEQUENCE_WIDTH: usize = 9;
pub const FILLER_WIDTH: usize = 16;
pub const TYPE_WIDTH: usize = 2;
pub const ACCOUNT_WIDTH: usize = 20;
pub const AMOUNT_WIDTH: usize = 15;
pub const NAME_WIDTH: usize = 40;
pub const TRAILER_WIDTH: usize = 6;

/// 9 + 16 + 2 + 20 + 15 + 40 + 6 = 108.
pub const RECORD_WIDTH: usize = SEQUENCE_WIDTH
    + FILLER_WIDTH
    + TYPE_WIDTH
    + ACCOUNT_WIDTH
    + AMOUNT_WIDTH
    + NAME_WIDTH
    + TRAILER_WIDTH;

const RECORD_TYPE: &str = "99";
const TRAILER: &str = "001001";

/// Largest cent value that still fits the 15-digit amount field.
const MAX_CENTS: u64 = 999_999_999_999_999;

/// Encodes one validated row into its fixed-width record. `position` is the
/// zero-based index of the row in the original decoded sequence, so sequence
/// numbers show gaps wherever earlier rows were skipped. That mirrors how the
/// back office cross-references records against the spreadsheet.
pub fn encode_record(
    position: usize,
    row: &ValidatedRow,
) -> Result<FormattedRecord, SkipReason> {
    let cents = amount_to_cents(&row.amount)?;
    let name = fold_accents(&row.name).to_uppercase();

    let mut line = String::with_capacity(RECORD_WIDTH);
    line.push_str(&format!("{:0width$}", position + 1, width = SEQUENCE_WIDTH));
    line.push_str(&" ".repeat(FILLER_WIDTH));
    line.push_str(RECORD_TYPE);
    line.push_str(&pad_right(&row.account, ACCOUNT_WIDTH));
    line.push_str(&format!("{:0width$}", cents, width = AMOUNT_WIDTH));
    line.push_str(&pad_right(&name, NAME_WIDTH));
    line.push_str(TRAILER);

    Ok(FormattedRecord::new(line))
}

/// Interprets an amount as decimal text with an optional comma decimal
/// separator (only the first comma is rewritten) and converts it to integer
/// cents, rounding to the nearest. Non-numeric, negative, or oversized
/// amounts skip the row rather than failing the batch.
pub fn amount_to_cents(raw: &str) -> Result<u64, SkipReason> {
    let normalized = raw.trim().replacen(',', ".", 1);
    let value: f64 = normalized
        .parse()
        .map_err(|_| SkipReason::UnparsableAmount(raw.to_string()))?;

    if !value.is_finite() {
        return Err(SkipReason::UnparsableAmount(raw.to_string()));
    }

    let cents = (value * 100.0).round();
    if cents < 0.0 || cents > MAX_CENTS as f64 {
        return Err(SkipReason::AmountOutOfRange(raw.to_string()));
    }

    Ok(cents as u64)
}

/// Decomposes to NFD and drops combining marks, folding `ñ`/`Ñ` to plain
/// `n`/`N` first. "María Ñúñez" becomes "Maria Nunez".
pub fn fold_accents(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'ñ' => 'n',
            'Ñ' => 'N',
            other => other,
        })
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Space-pads to `width` characters, truncating overlong input.
fn pad_right(s: &str, width: usize) -> String {
    let mut out: String = s.chars().take(width).collect();
    let missing = width - out.chars().count();
    out.extend(std::iter::repeat(' ').take(missing));
    out
}
