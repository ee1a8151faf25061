//! Messenger service
//!
//! Best-effort notification delivery. A failed send is logged and swallowed;
//! nothing below startup may crash the loop.

use async_trait::async_trait;
use tracing::{error, info, warn};

use homewatch_client::TelegramClient;

/// Delivers one text message per call to the configured chat
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Sends `text`; true only when delivery was confirmed by echo
    async fn send(&self, text: &str) -> bool;
}

/// `Messenger` backed by the Telegram Bot API
pub struct TelegramMessenger {
    client: TelegramClient,
}

impl TelegramMessenger {
    /// Creates a messenger over an already-configured bot client
    pub fn new(client: TelegramClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send(&self, text: &str) -> bool {
        match self.client.send_message(text).await {
            Ok(sent) => {
                if sent.text.as_deref() == Some(text) {
                    info!("message delivered");
                    true
                } else {
                    warn!(
                        message_id = sent.message_id,
                        "delivery echo does not match the sent text"
                    );
                    false
                }
            }
            Err(e) => {
                error!("failed to send message: {}", e);
                false
            }
        }
    }
}
