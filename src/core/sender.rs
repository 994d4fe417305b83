use crate::domain::model::{BatchResponse, PersonPayload};
use crate::domain::ports::BatchTransport;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

#[derive(Serialize)]
struct PeopleUpdate<'a> {
    people: &'a [PersonPayload],
}

pub struct HttpBatchSender {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpBatchSender {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }
}

#[async_trait]
impl BatchTransport for HttpBatchSender {
    /// Posts one batch. Transport failures are logged and reported as `None`;
    /// any completed HTTP exchange is handed back as-is, whatever the status.
    async fn send_batch(&self, batch: &[PersonPayload]) -> Option<BatchResponse> {
        tracing::debug!("Posting {} records to {}", batch.len(), self.endpoint);

        let result = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("App {}", self.api_key))
            .json(&PeopleUpdate { people: batch })
            .send()
            .await;

        match result {
            Ok(response) => {
                let status = response.status();
                match response.text().await {
                    Ok(body) => {
                        // Raw body on purpose, operators need it to triage
                        // rejected batches. Logs may therefore contain PII.
                        tracing::info!("📡 API response: {} - {}", status.as_u16(), body);
                        Some(BatchResponse { status, body })
                    }
                    Err(e) => {
                        tracing::error!("⚠️ Failed to read API response body: {}", e);
                        None
                    }
                }
            }
            Err(e) => {
                tracing::error!("⚠️ API request failed: {}", e);
                None
            }
        }
    }
}
