use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct BatchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Drives one invocation end to end. Any failure is terminal for this
    /// run; the caller may re-run with a corrected workbook.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting batch generation");

        let rows = self.pipeline.extract().await?;
        tracing::info!("Decoded {} rows", rows.len());

        let batch = self.pipeline.transform(rows).await?;
        tracing::info!(
            "Encoded {} records ({} rows skipped)",
            batch.records.len(),
            batch.skipped
        );

        let output_path = self.pipeline.load(batch).await?;
        tracing::info!("Batch file saved to: {}", output_path);

        Ok(output_path)
    }
}
