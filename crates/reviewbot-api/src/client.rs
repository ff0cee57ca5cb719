//! HTTP client for the homework statuses endpoint.

use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;
use url::Url;

use reviewbot_core::Config;

use crate::error::{ApiError, Result};
use crate::response::StatusBatch;

/// Keys the API uses to signal an application-level error under HTTP 200.
const ERROR_KEYS: [&str; 2] = ["code", "error"];

/// Client for the homework review status API.
pub struct HomeworkClient {
    http: reqwest::Client,
    endpoint: Url,
    auth_header: String,
}

impl HomeworkClient {
    /// Build a client from the startup configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            auth_header: format!("OAuth {}", config.practicum_token),
        }
    }

    /// Fetch status changes reported since `from_date`.
    pub async fn poll(&self, from_date: i64) -> Result<StatusBatch> {
        debug!(from_date, endpoint = %self.endpoint, "polling homework API");

        let response = self
            .http
            .get(self.endpoint.clone())
            .header(reqwest::header::AUTHORIZATION, self.auth_header.as_str())
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|source| ApiError::Transport { from_date, source })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiError::Status {
                status: status.as_u16(),
                endpoint: self.endpoint.to_string(),
                from_date,
            });
        }

        let body: Value = response.json().await.map_err(ApiError::Decode)?;
        check_error_payload(&body)?;
        StatusBatch::from_body(body)
    }
}

/// Reject bodies carrying the API's error-signaling keys.
fn check_error_payload(body: &Value) -> Result<()> {
    for key in ERROR_KEYS {
        if let Some(value) = body.get(key) {
            return Err(ApiError::Api {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
    }
    Ok(())
}
