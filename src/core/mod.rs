pub mod assemble;
pub mod decode;
pub mod encode;
pub mod engine;
pub mod pipeline;
pub mod serialize;

pub use crate::domain::model::{Batch, CellValue, FormattedRecord, SourceRow};
pub use crate::domain::ports::{ConfigProvider, Pipeline, SheetDecoder, Storage};
pub use crate::utils::error::Result;
