use crate::core::{mapper, reader};
use crate::domain::model::{PersonPayload, RunStats};
use crate::domain::ports::{BatchTransport, Pacer};
use crate::utils::error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::StatusCode;
use std::path::Path;

/// Maximum batch size accepted by the person-update endpoint.
pub const BATCH_SIZE: usize = 200;

pub struct BatchOrchestrator<T: BatchTransport, P: Pacer> {
    transport: T,
    pacer: P,
    batch_size: usize,
}

impl<T: BatchTransport, P: Pacer> BatchOrchestrator<T, P> {
    pub fn new(transport: T, pacer: P) -> Self {
        Self::with_batch_size(transport, pacer, BATCH_SIZE)
    }

    pub fn with_batch_size(transport: T, pacer: P, batch_size: usize) -> Self {
        Self {
            transport,
            pacer,
            batch_size,
        }
    }

    /// One full pass: read the source file, map it, push every batch.
    /// Reader failures abort the run; batch failures do not.
    pub async fn execute(&self, path: &Path) -> Result<RunStats> {
        let rows = reader::read_rows(path)?;
        let payload = mapper::build_payload(&rows);
        Ok(self.push_all(&payload).await)
    }

    /// Sends the payload in fixed-size batches, strictly in order, pausing
    /// after every batch. Counters only ever increase.
    pub async fn push_all(&self, payload: &[PersonPayload]) -> RunStats {
        let total_batches = payload.len().div_ceil(self.batch_size);
        let mut stats = RunStats::default();

        let progress = ProgressBar::new(total_batches as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} batches ({percent}%)")
                .unwrap()
                .progress_chars("█▉▊▋▌▍▎▏  "),
        );

        for (index, batch) in payload.chunks(self.batch_size).enumerate() {
            tracing::info!(
                "➡️ Sending batch {} of {} with {} records",
                index + 1,
                total_batches,
                batch.len()
            );
            stats.batches_attempted += 1;

            match self.transport.send_batch(batch).await {
                Some(response) if response.status == StatusCode::OK => {
                    stats.batches_succeeded += 1;
                    stats.records_updated += batch.len();
                }
                _ => tracing::error!("⚠️ Batch {} failed", index + 1),
            }

            progress.inc(1);
            self.pacer.pause().await;
        }

        progress.finish_and_clear();
        tracing::info!(
            "🎉 Run complete: {}/{} batches sent successfully",
            stats.batches_succeeded,
            total_batches
        );
        tracing::info!("✅ Total records updated: {}", stats.records_updated);
        stats
    }
}
