pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{decode::WorkbookDecoder, engine::BatchEngine, pipeline::BatchPipeline};
pub use utils::error::{BatchError, Result};
