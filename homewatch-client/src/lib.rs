//! Homewatch HTTP Clients
//!
//! Thin, type-safe clients for the two external services the watcher talks
//! to: the homework-review API (polled) and the Telegram Bot API (notified).
//!
//! # Example
//!
//! ```no_run
//! use homewatch_client::ReviewClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), homewatch_client::ClientError> {
//!     let client = ReviewClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "my-oauth-token",
//!     );
//!
//!     let body = client.homework_statuses(0).await?;
//!     println!("{body}");
//!     Ok(())
//! }
//! ```

pub mod error;
mod review;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use review::ReviewClient;
pub use telegram::TelegramClient;

use serde::de::DeserializeOwned;

/// Check the status code and deserialize the JSON body of a response
///
/// A non-2xx status becomes [`ClientError::Api`] with the body text captured;
/// a 2xx body that fails to deserialize becomes [`ClientError::Parse`].
pub(crate) async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::api_error(status.as_u16(), error_text));
    }

    response
        .json()
        .await
        .map_err(|e| ClientError::Parse(format!("Failed to parse JSON response: {}", e)))
}
