use crate::domain::model::{BatchResponse, PersonPayload};
use async_trait::async_trait;

/// Delivers one batch to the remote API. Implementations must swallow
/// transport failures and report them as `None` rather than returning errors.
#[async_trait]
pub trait BatchTransport: Send + Sync {
    async fn send_batch(&self, batch: &[PersonPayload]) -> Option<BatchResponse>;
}

/// Pause policy applied once after every batch, the last one included.
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self);
}
