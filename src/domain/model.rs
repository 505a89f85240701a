use std::collections::HashMap;
use std::fmt;

/// Names of the three columns the first sheet must expose. Column order and
/// any extra columns are irrelevant.
pub const COL_ACCOUNT: &str = "Numero de Cuenta";
pub const COL_AMOUNT: &str = "Importe";
pub const COL_NAME: &str = "Nombre";

pub const REQUIRED_COLUMNS: [&str; 3] = [COL_ACCOUNT, COL_AMOUNT, COL_NAME];

/// Scalar content of a single spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64 Display renders whole numbers without a fractional part,
            // matching what a spreadsheet shows for numeric account cells.
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// One decoded spreadsheet row: column name to cell content. Cells with no
/// content are simply absent from the map.
#[derive(Debug, Clone, Default)]
pub struct SourceRow {
    pub cells: HashMap<String, CellValue>,
}

impl SourceRow {
    pub fn new(cells: HashMap<String, CellValue>) -> Self {
        Self { cells }
    }

    /// Coerces a cell to text; `None` when the cell is missing or blank.
    pub fn text(&self, column: &str) -> Option<String> {
        let value = self.cells.get(column)?.to_string();
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    }
}

/// A row proven to hold non-empty text for all three required fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRow {
    pub account: String,
    pub amount: String,
    pub name: String,
}

/// One fixed-width output line, exactly 108 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedRecord(String);

impl FormattedRecord {
    /// Only the field encoder builds records; it guarantees the width.
    pub(crate) fn new(line: String) -> Self {
        debug_assert_eq!(line.chars().count(), crate::core::encode::RECORD_WIDTH);
        Self(line)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormattedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why a row produced no record. Skips are counted data, not errors: the
/// batch keeps going past them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingField(&'static str),
    UnparsableAmount(String),
    AmountOutOfRange(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingField(col) => write!(f, "missing value for '{}'", col),
            SkipReason::UnparsableAmount(raw) => write!(f, "amount '{}' is not a number", raw),
            SkipReason::AmountOutOfRange(raw) => write!(f, "amount '{}' is out of range", raw),
        }
    }
}

/// The successful outcome of one invocation: at least one record, plus the
/// count of rows that were skipped along the way.
#[derive(Debug, Clone)]
pub struct Batch {
    pub records: Vec<FormattedRecord>,
    pub skipped: usize,
}
