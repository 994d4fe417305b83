use crate::domain::ports::Pacer;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

/// Stays under the API's 5-requests-per-second ceiling.
pub const BATCH_PAUSE: Duration = Duration::from_millis(200);

#[derive(Debug, Clone)]
pub struct FixedDelayPacer {
    delay: Duration,
}

impl FixedDelayPacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for FixedDelayPacer {
    fn default() -> Self {
        Self::new(BATCH_PAUSE)
    }
}

#[async_trait]
impl Pacer for FixedDelayPacer {
    async fn pause(&self) {
        sleep(self.delay).await;
    }
}
