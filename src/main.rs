use clap::Parser;
use people_sync::utils::{logger, validation::Validate};
use people_sync::{AppConfig, BatchOrchestrator, FixedDelayPacer, HttpBatchSender};
use std::path::Path;

#[tokio::main]
async fn main() {
    // Load .env before clap resolves env-backed arguments.
    let _ = dotenvy::dotenv();

    let config = AppConfig::parse();
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting people-sync");
    if config.verbose {
        tracing::debug!(
            "Source file: {}, endpoint: {}",
            config.csv_file,
            config.persons_endpoint()
        );
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let sender = HttpBatchSender::new(config.persons_endpoint(), config.api_key.clone());
    let orchestrator = BatchOrchestrator::new(sender, FixedDelayPacer::default());

    match orchestrator.execute(Path::new(&config.csv_file)).await {
        Ok(stats) => {
            println!(
                "✅ Sync finished: {}/{} batches succeeded, {} records updated",
                stats.batches_succeeded, stats.batches_attempted, stats.records_updated
            );
        }
        Err(e) => {
            tracing::error!("❌ Sync failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
