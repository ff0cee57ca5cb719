//! Process configuration, read once at startup.
//!
//! Secrets and overrides come from the environment (usually via a `.env`
//! file loaded by the binary). The resulting [`Config`] is constructed once
//! and passed by reference to every component that needs it; nothing reads
//! the environment after startup.

use std::env;
use std::time::Duration;

use thiserror::Error;
use tracing::error;
use url::Url;

/// Environment variable holding the homework API bearer token.
pub const PRACTICUM_TOKEN_ENV: &str = "PRACTICUM_TOKEN";

/// Environment variable holding the Telegram bot token.
pub const TELEGRAM_TOKEN_ENV: &str = "TELEGRAM_TOKEN";

/// Environment variable holding the destination chat id.
pub const TELEGRAM_CHAT_ID_ENV: &str = "TELEGRAM_CHAT_ID";

/// Environment variable overriding the API endpoint (optional).
pub const ENDPOINT_ENV: &str = "REVIEWBOT_ENDPOINT";

/// Environment variable overriding the poll interval in seconds (optional).
pub const POLL_INTERVAL_ENV: &str = "REVIEWBOT_POLL_INTERVAL";

/// Default homework statuses endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default delay between poll cycles.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(600);

/// Errors that prevent the process from starting.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required secrets are missing or empty.
    #[error("required environment variables missing or empty: {0}")]
    MissingSecrets(String),

    /// The chat id is not a number.
    #[error("TELEGRAM_CHAT_ID is not a valid chat id: {0:?}")]
    InvalidChatId(String),

    /// The endpoint override is not a URL.
    #[error("REVIEWBOT_ENDPOINT is not a valid URL: {0:?}")]
    InvalidEndpoint(String),

    /// The poll interval override is not a number of seconds.
    #[error("REVIEWBOT_POLL_INTERVAL is not a valid number of seconds: {0:?}")]
    InvalidInterval(String),
}

/// Everything the watcher needs to run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for the homework API.
    pub practicum_token: String,
    /// Telegram bot token.
    pub telegram_token: String,
    /// Destination chat for notifications.
    pub telegram_chat_id: i64,
    /// Homework statuses endpoint.
    pub endpoint: Url,
    /// Delay between poll cycles.
    pub poll_interval: Duration,
}

impl Config {
    /// Read the configuration from the environment.
    ///
    /// Every missing or empty required variable is logged by name before
    /// the combined error is returned, so the operator sees the full set
    /// in one pass rather than one variable per restart.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        let practicum_token = require(PRACTICUM_TOKEN_ENV, &mut missing);
        let telegram_token = require(TELEGRAM_TOKEN_ENV, &mut missing);
        let chat_id_raw = require(TELEGRAM_CHAT_ID_ENV, &mut missing);

        if !missing.is_empty() {
            return Err(ConfigError::MissingSecrets(missing.join(", ")));
        }

        let telegram_chat_id = chat_id_raw
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidChatId(chat_id_raw.clone()))?;

        let endpoint = match env::var(ENDPOINT_ENV) {
            Ok(raw) => Url::parse(&raw).map_err(|_| ConfigError::InvalidEndpoint(raw))?,
            Err(_) => Url::parse(DEFAULT_ENDPOINT)
                .map_err(|_| ConfigError::InvalidEndpoint(DEFAULT_ENDPOINT.to_string()))?,
        };

        let poll_interval = match env::var(POLL_INTERVAL_ENV) {
            Ok(raw) => {
                let secs = raw
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidInterval(raw))?;
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_POLL_INTERVAL,
        };

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            poll_interval,
        })
    }
}

/// Read a required variable, recording it in `missing` when absent or blank.
fn require(name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => {
            error!(var = name, "required environment variable is missing or empty");
            missing.push(name);
            String::new()
        }
    }
}
