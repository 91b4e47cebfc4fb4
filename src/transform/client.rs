use reqwest::Client;
use std::time::Instant;

use crate::config::ServiceConfig;
use crate::transform::error::TransformError;
use crate::transform::reply::ServiceReply;
use crate::transform::TransformRequest;

/// HTTP client for the transform endpoint.
///
/// One `POST` per call, no retries and no caching. Timeouts come from
/// [`ServiceConfig`]; expiry surfaces as a transport error.
pub struct TransformClient {
    client: Client,
    endpoint: String,
}

impl TransformClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one request and return the service's raw transformed text.
    pub async fn transform(&self, request: &TransformRequest) -> Result<String, TransformError> {
        let started = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(
            status = status.as_u16(),
            bytes = body.len(),
            latency_ms = started.elapsed().as_millis() as u64,
            "transform response received"
        );

        ServiceReply::parse(status, &body)?.into_result(status)
    }
}
