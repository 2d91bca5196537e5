use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::assistant::{
    AssistantBridge, CompletionClient, CompletionError, CompletionRequest,
};

/// Answers every question with a fixed text and records what it was sent.
#[derive(Default)]
pub(super) struct ScriptedClient {
    pub(super) answer: String,
    pub(super) seen: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedClient {
    pub(super) fn answering(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn requests(&self) -> Vec<CompletionRequest> {
        self.seen.lock().expect("request log mutex").clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.seen
            .lock()
            .expect("request log mutex")
            .push(request.clone());
        Ok(self.answer.clone())
    }
}

pub(super) struct FailingClient;

#[async_trait]
impl CompletionClient for FailingClient {
    async fn complete(&self, _request: &CompletionRequest) -> Result<String, CompletionError> {
        Err(CompletionError::Provider {
            status: 503,
            body: "model overloaded".to_string(),
        })
    }
}

/// Never answers within any reasonable timeout.
pub(super) struct StalledClient;

#[async_trait]
impl CompletionClient for StalledClient {
    async fn complete(&self, _request: &CompletionRequest) -> Result<String, CompletionError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok("too late".to_string())
    }
}

pub(super) fn bridge<C: CompletionClient + 'static>(client: C) -> AssistantBridge<C> {
    AssistantBridge::new(Arc::new(client), Duration::from_millis(200), 0.7)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
