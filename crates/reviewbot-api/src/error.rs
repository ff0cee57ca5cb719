//! Error types for the homework API client.

use thiserror::Error;

/// Errors raised while polling the homework API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP call itself failed (DNS, refused connection, timeout).
    #[error("failed to reach the homework API (from_date={from_date}): {source}")]
    Transport {
        from_date: i64,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success HTTP status.
    #[error("homework API returned HTTP {status} for {endpoint} (from_date={from_date})")]
    Status {
        status: u16,
        endpoint: String,
        from_date: i64,
    },

    /// The response body was not valid JSON.
    #[error("homework API response was not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),

    /// The API reported an application-level error under HTTP 200.
    #[error("homework API reported an error: {key}={value}")]
    Api { key: String, value: String },

    /// The response body was not a JSON object.
    #[error("homework API response is not a JSON object")]
    NotAnObject,

    /// The response object has no `homeworks` key.
    #[error("homework API response has no \"homeworks\" key")]
    MissingHomeworks,

    /// The `homeworks` value is not a list.
    #[error("\"homeworks\" in the homework API response is not a list")]
    HomeworksNotList,

    /// A homework record lacks required fields.
    #[error("malformed homework record: {0}")]
    BadRecord(#[source] serde_json::Error),
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
