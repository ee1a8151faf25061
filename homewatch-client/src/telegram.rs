//! Telegram Bot API client

use reqwest::Client;
use tracing::debug;

use crate::error::{ClientError, Result};
use homewatch_core::dto::telegram::{BotApiResponse, SendMessage, SentMessage};

const BOT_API_BASE: &str = "https://api.telegram.org";

/// HTTP client for delivering notifications through a Telegram bot
///
/// One `send_message` call is exactly one outbound message: no retries,
/// no queueing.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    /// Base URL of the Bot API, overridable for tests
    base_url: String,
    /// Bot token embedded in the request path
    token: String,
    /// Destination chat identifier
    chat_id: String,
    /// HTTP client instance
    client: Client,
}

impl TelegramClient {
    /// Create a new bot client for the given token and destination chat
    pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self::with_client(token, chat_id, Client::new())
    }

    /// Create a bot client with a custom HTTP client
    pub fn with_client(
        token: impl Into<String>,
        chat_id: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            base_url: BOT_API_BASE.to_string(),
            token: token.into(),
            chat_id: chat_id.into(),
            client,
        }
    }

    /// Point the client at a different Bot API host
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the destination chat identifier
    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    /// Send a text message to the configured chat
    ///
    /// Returns the delivered message echoed back by the API. A response with
    /// `ok: false` or a missing echo becomes [`ClientError::Delivery`].
    pub async fn send_message(&self, text: &str) -> Result<SentMessage> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        let response = self
            .client
            .post(&url)
            .json(&SendMessage {
                chat_id: self.chat_id.clone(),
                text: text.to_string(),
            })
            .send()
            .await?;

        let envelope: BotApiResponse<SentMessage> = crate::handle_response(response).await?;

        if !envelope.ok {
            return Err(ClientError::Delivery(
                envelope
                    .description
                    .unwrap_or_else(|| "bot API reported failure".to_string()),
            ));
        }

        let sent = envelope
            .result
            .ok_or_else(|| ClientError::Delivery("bot API returned no message".to_string()))?;

        debug!(message_id = sent.message_id, "message accepted by bot API");
        Ok(sent)
    }
}
