use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Ai,
}

/// A single advisory-chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub role: MessageRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Attached photo, if the farmer sent one with the question.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_form() {
        assert_eq!(serde_json::to_string(&MessageRole::Ai).unwrap(), r#""ai""#);
        let role: MessageRole = serde_json::from_str(r#""user""#).unwrap();
        assert_eq!(role, MessageRole::User);
    }

    #[test]
    fn test_chat_message_roundtrip() {
        let json = r#"{
            "role": "user",
            "text": "Leaves are yellowing on my banana plants",
            "timestamp": "2026-08-27T06:30:00Z",
            "imageUrl": "photos/banana-leaf.jpg"
        }"#;
        let message: ChatMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.role, MessageRole::User);
        assert_eq!(message.image_url.as_deref(), Some("photos/banana-leaf.jpg"));
    }
}
