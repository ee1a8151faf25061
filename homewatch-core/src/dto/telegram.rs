//! Telegram Bot API DTOs

use serde::{Deserialize, Serialize};

/// Request body for the `sendMessage` method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessage {
    pub chat_id: String,
    pub text: String,
}

/// Envelope every Bot API method responds with
#[derive(Debug, Clone, Deserialize)]
pub struct BotApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

/// The delivered message echoed back by `sendMessage`
#[derive(Debug, Clone, Deserialize)]
pub struct SentMessage {
    pub message_id: i64,
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_message_serializes_flat() {
        let req = SendMessage {
            chat_id: "42".to_string(),
            text: "hello".to_string(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["chat_id"], "42");
        assert_eq!(value["text"], "hello");
    }

    #[test]
    fn test_bot_api_error_envelope() {
        let json = r#"{"ok": false, "description": "Unauthorized"}"#;
        let resp: BotApiResponse<SentMessage> = serde_json::from_str(json).unwrap();
        assert!(!resp.ok);
        assert!(resp.result.is_none());
        assert_eq!(resp.description.as_deref(), Some("Unauthorized"));
    }
}
