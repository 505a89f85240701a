use thiserror::Error;

/// Invocation-level failures. Per-row problems are never represented here;
/// they are skips counted inside the successful batch.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Unsupported file type '{extension}': expected .xls or .xlsx")]
    InvalidFileType { extension: String },

    #[error("Could not read workbook: {reason}")]
    UnreadablePayload { reason: String },

    #[error("The first sheet contains no data rows")]
    EmptyDataset,

    #[error("Missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error("No valid rows: all {skipped} rows were skipped")]
    NoValidRows { skipped: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl From<calamine::Error> for BatchError {
    fn from(err: calamine::Error) -> Self {
        BatchError::UnreadablePayload {
            reason: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BatchError>;
