pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::AppConfig;
pub use core::{orchestrator::BatchOrchestrator, pacer::FixedDelayPacer, sender::HttpBatchSender};
pub use utils::error::{Result, SyncError};
