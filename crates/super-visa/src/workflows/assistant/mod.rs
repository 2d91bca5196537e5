//! Chat panel bridge to the hosted language model.

pub mod bridge;
pub mod client;
pub mod gemini;
pub mod router;
pub mod session;

#[cfg(test)]
mod tests;

pub use bridge::{fallback_message, greeting, system_instruction, AssistantBridge, AssistantReply};
pub use client::{CompletionClient, CompletionError, CompletionRequest};
pub use gemini::GeminiClient;
pub use router::assistant_router;
pub use session::{ChatMessage, ChatRole, ChatSession, ChatTicket, ReplyDisposition};
