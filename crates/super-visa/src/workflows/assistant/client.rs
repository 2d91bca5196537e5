use std::time::Duration;

use async_trait::async_trait;

/// One chat turn forwarded to the hosted model.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_instruction: String,
    pub prompt: String,
    pub temperature: f32,
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("no API key configured for the language model")]
    MissingCredentials,
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned HTTP {status}: {body}")]
    Provider { status: u16, body: String },
    #[error("malformed provider response: {0}")]
    Malformed(String),
    #[error("provider returned no text")]
    EmptyResponse,
    #[error("no answer within {0:?}")]
    TimedOut(Duration),
}

/// Remote completion backend. Implementations report every failure as a
/// `CompletionError`; the bridge decides what the visitor sees.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}
