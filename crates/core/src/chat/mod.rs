//! Chat module - stubbed assistant models, service, and traits.

mod chat_model;
mod chat_service;
mod chat_traits;

pub use chat_model::{ChatMessage, ChatRequest, ChatResponse, ChatRole, ChatUsage};
pub use chat_service::ChatService;
pub use chat_traits::ChatServiceTrait;
