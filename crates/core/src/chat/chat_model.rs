//! Chat assistant domain models.

use serde::{Deserialize, Serialize};

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

/// One message in a conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Request body for the chat endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

/// Assistant reply plus token accounting
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub message: String,
    pub usage: ChatUsage,
}

/// Token usage for a chat exchange. All counts are `None` until a real
/// model backs the assistant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChatUsage {
    pub prompt_tokens: Option<u32>,
    pub completion_tokens: Option<u32>,
    pub total_tokens: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_deserializes_lowercase() {
        let message: ChatMessage =
            serde_json::from_str(r#"{ "role": "user", "content": "hello" }"#).unwrap();
        assert_eq!(message.role, ChatRole::User);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result =
            serde_json::from_str::<ChatMessage>(r#"{ "role": "robot", "content": "hello" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_usage_serializes_null_counts() {
        let json = serde_json::to_value(ChatUsage::default()).unwrap();
        assert!(json["promptTokens"].is_null());
        assert!(json["completionTokens"].is_null());
        assert!(json["totalTokens"].is_null());
    }
}
