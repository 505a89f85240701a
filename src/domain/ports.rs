use crate::domain::model::{Batch, SourceRow};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

/// Spreadsheet decoding is an external capability: bytes in, ordered row
/// mappings out. Keeping it behind a trait lets the pipeline run against
/// synthetic rows in tests, without a workbook engine.
pub trait SheetDecoder: Send + Sync {
    fn decode(&self, payload: &[u8]) -> Result<Vec<SourceRow>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<SourceRow>>;
    async fn transform(&self, rows: Vec<SourceRow>) -> Result<Batch>;
    async fn load(&self, batch: Batch) -> Result<String>;
}
