use crate::chat::chat_model::{ChatMessage, ChatResponse};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for chat assistant operations
#[async_trait]
pub trait ChatServiceTrait: Send + Sync {
    async fn generate_response(&self, messages: Vec<ChatMessage>) -> Result<ChatResponse>;
}
