//! reqwest-backed transport with a pooled client

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ReconcileError, ReconcileResult};
use crate::traits::{Headers, Transport};

const BYTE_ORDER_MARK: char = '\u{feff}';
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Real transport; clones share one connection pool
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create transport with a per-request timeout
    pub fn new(timeout: Duration) -> ReconcileResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ReconcileError::transport("<client builder>", e))?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn apply_headers(mut request: reqwest::RequestBuilder, headers: &Headers) -> reqwest::RequestBuilder {
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }
        request
    }

    async fn read_json(url: &str, response: reqwest::Response) -> ReconcileResult<Value> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ReconcileError::transport(url, e))?;

        if !status.is_success() {
            return Err(ReconcileError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
                body: text.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        parse_json_body(url, &text)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, headers: &Headers) -> ReconcileResult<Value> {
        tracing::debug!(url, "GET");
        let response = Self::apply_headers(self.client.get(url), headers)
            .send()
            .await
            .map_err(|e| ReconcileError::transport(url, e))?;
        Self::read_json(url, response).await
    }

    async fn post(&self, url: &str, headers: &Headers, body: &Value) -> ReconcileResult<Value> {
        tracing::debug!(url, "POST");
        let response = Self::apply_headers(self.client.post(url), headers)
            .body(serde_json::to_vec(body)?)
            .send()
            .await
            .map_err(|e| ReconcileError::transport(url, e))?;
        Self::read_json(url, response).await
    }
}

/// Parse a response body, tolerating a leading UTF-8 byte-order mark
pub fn parse_json_body(url: &str, text: &str) -> ReconcileResult<Value> {
    let trimmed = text.trim_start_matches(BYTE_ORDER_MARK);
    serde_json::from_str(trimmed)
        .map_err(|e| ReconcileError::data_shape(format!("{url}: invalid JSON body: {e}")))
}
