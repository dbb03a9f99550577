//! Stubbed chat assistant.
//!
//! TODO: wire this to a real model backend; until then replies are canned and
//! token counts stay null.

use async_trait::async_trait;
use log::debug;

use crate::chat::chat_model::{ChatMessage, ChatResponse, ChatUsage};
use crate::chat::chat_traits::ChatServiceTrait;
use crate::errors::{Result, ValidationError};

pub struct ChatService;

impl ChatService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ChatService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatServiceTrait for ChatService {
    async fn generate_response(&self, messages: Vec<ChatMessage>) -> Result<ChatResponse> {
        if messages.is_empty() {
            return Err(
                ValidationError::InvalidInput("messages must not be empty".to_string()).into(),
            );
        }
        if messages.iter().any(|m| m.content.trim().is_empty()) {
            return Err(ValidationError::InvalidInput(
                "Message content must not be empty".to_string(),
            )
            .into());
        }

        debug!("Generating stub chat response for {} messages", messages.len());

        // Unwrap is safe: the list was checked non-empty above.
        let last = messages.last().unwrap();
        let message = format!(
            "The portfolio assistant is not connected to a model yet. You asked: \"{}\". \
             Try the sector and summary views for live portfolio data in the meantime.",
            last.content.trim()
        );

        Ok(ChatResponse {
            message,
            usage: ChatUsage::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::chat_model::ChatRole;
    use crate::errors::Error;

    fn user_message(content: &str) -> ChatMessage {
        ChatMessage {
            role: ChatRole::User,
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn test_empty_messages_rejected() {
        let service = ChatService::new();

        let result = service.generate_response(Vec::new()).await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_blank_content_rejected() {
        let service = ChatService::new();

        let result = service
            .generate_response(vec![user_message("   ")])
            .await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn test_reply_echoes_last_message() {
        let service = ChatService::new();
        let messages = vec![
            user_message("How is my portfolio doing?"),
            ChatMessage {
                role: ChatRole::Assistant,
                content: "Let me check.".to_string(),
            },
            user_message("Which sector is strongest?"),
        ];

        let response = service.generate_response(messages).await.unwrap();

        assert!(response.message.contains("Which sector is strongest?"));
        assert_eq!(response.usage, ChatUsage::default());
    }
}
