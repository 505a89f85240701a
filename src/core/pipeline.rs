use crate::core::{assemble, serialize};
use crate::domain::model::{Batch, SourceRow};
use crate::domain::ports::{ConfigProvider, Pipeline, SheetDecoder, Storage};
use crate::utils::error::Result;
use crate::utils::validation;
use chrono::NaiveDate;

/// The one-shot batch pipeline: read and decode the workbook, assemble the
/// fixed-width records, write the dated batch file. Each run owns its rows
/// and counters; re-running simply starts over from the payload.
pub struct BatchPipeline<S: Storage, C: ConfigProvider, D: SheetDecoder> {
    storage: S,
    config: C,
    decoder: D,
    export_date: NaiveDate,
}

impl<S: Storage, C: ConfigProvider, D: SheetDecoder> BatchPipeline<S, C, D> {
    pub fn new(storage: S, config: C, decoder: D, export_date: NaiveDate) -> Self {
        Self {
            storage,
            config,
            decoder,
            export_date,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, D: SheetDecoder> Pipeline for BatchPipeline<S, C, D> {
    async fn extract(&self) -> Result<Vec<SourceRow>> {
        let input = self.config.input_path();
        validation::validate_workbook_extension(input)?;

        tracing::debug!(path = input, "reading workbook");
        let payload = self.storage.read_file(input).await?;

        tracing::debug!(bytes = payload.len(), "decoding workbook");
        self.decoder.decode(&payload)
    }

    async fn transform(&self, rows: Vec<SourceRow>) -> Result<Batch> {
        assemble::assemble(&rows)
    }

    async fn load(&self, batch: Batch) -> Result<String> {
        let file_name = serialize::export_filename(self.export_date);
        let payload = serialize::serialize(&batch);

        tracing::debug!(
            file = file_name.as_str(),
            records = batch.records.len(),
            skipped = batch.skipped,
            "writing batch file"
        );
        self.storage.write_file(&file_name, &payload).await?;

        Ok(format!("{}/{}", self.config.output_path(), file_name))
    }
}
