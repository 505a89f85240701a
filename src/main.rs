use banktxt::utils::{logger, validation::Validate};
use banktxt::{BatchEngine, BatchPipeline, CliConfig, LocalStorage, WorkbookDecoder};
use chrono::Local;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting banktxt");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let export_date = Local::now().date_naive();
    let pipeline = BatchPipeline::new(storage, config, WorkbookDecoder::new(), export_date);

    let engine = BatchEngine::new(pipeline);
    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Batch file generated: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Batch generation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
