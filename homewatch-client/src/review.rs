//! Review API client

use reqwest::Client;
use serde_json::Value;

use crate::error::Result;

/// HTTP client for the homework-review status endpoint
///
/// Issues one GET per poll cycle with the OAuth token in the
/// `Authorization` header and the query window start in `from_date`.
#[derive(Debug, Clone)]
pub struct ReviewClient {
    /// Full URL of the homework-statuses endpoint
    endpoint: String,
    /// Static OAuth token presented on every request
    token: String,
    /// HTTP client instance
    client: Client,
}

impl ReviewClient {
    /// Create a new review API client
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a review API client with a custom HTTP client
    ///
    /// This allows configuring timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use homewatch_client::ReviewClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = ReviewClient::with_client("https://example.com/statuses/", "token", http_client);
    /// ```
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint URL this client polls
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch homework statuses updated since `from_date` (unix seconds)
    ///
    /// Returns the raw JSON body: shape validation is the caller's concern,
    /// the client only guarantees "2xx and parseable".
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        crate::handle_response(response).await
    }
}
