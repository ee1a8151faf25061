//! Watcher configuration
//!
//! Defines all configurable parameters for the watcher: credentials,
//! the review endpoint, and polling/timeout intervals.

use std::time::Duration;

/// Fixed review-status endpoint, overridable through `ENDPOINT`
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default pause between poll cycles, in seconds
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

/// Default timeout for a single outbound request, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Watcher configuration
///
/// Credentials are opaque strings sourced once at startup and immutable for
/// the process lifetime.
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the review API
    pub practicum_token: String,

    /// Token of the notifying bot
    pub telegram_token: String,

    /// Destination chat identifier
    pub chat_id: String,

    /// URL of the homework-statuses endpoint
    pub endpoint: String,

    /// Pause between poll cycles
    pub poll_interval: Duration,

    /// Timeout for each outbound HTTP request
    pub request_timeout: Duration,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required, checked by `validate`)
    /// - TELEGRAM_TOKEN (required, checked by `validate`)
    /// - TELEGRAM_CHAT_ID (required, checked by `validate`)
    /// - ENDPOINT (optional, default: the fixed review URL)
    /// - POLL_INTERVAL (optional, seconds, default: 600)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30)
    ///
    /// Missing credentials are not an error here: they surface through
    /// [`Config::validate`] so startup can log them at critical severity.
    pub fn from_env() -> Self {
        let practicum_token = std::env::var("PRACTICUM_TOKEN").unwrap_or_default();
        let telegram_token = std::env::var("TELEGRAM_TOKEN").unwrap_or_default();
        let chat_id = std::env::var("TELEGRAM_CHAT_ID").unwrap_or_default();

        let endpoint =
            std::env::var("ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let poll_interval = std::env::var("POLL_INTERVAL")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS));

        let request_timeout = std::env::var("REQUEST_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));

        Self {
            practicum_token,
            telegram_token,
            chat_id,
            endpoint,
            poll_interval,
            request_timeout,
        }
    }

    /// Validates the configuration
    ///
    /// All three credentials must be non-empty or the watcher refuses to
    /// enter the poll loop.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.practicum_token.is_empty() {
            anyhow::bail!("required environment variable PRACTICUM_TOKEN is missing or empty");
        }

        if self.telegram_token.is_empty() {
            anyhow::bail!("required environment variable TELEGRAM_TOKEN is missing or empty");
        }

        if self.chat_id.is_empty() {
            anyhow::bail!("required environment variable TELEGRAM_CHAT_ID is missing or empty");
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            anyhow::bail!("endpoint must start with http:// or https://");
        }

        if self.poll_interval.as_secs() == 0 {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.request_timeout.as_secs() == 0 {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }
}
