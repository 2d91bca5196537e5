use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use super_visa::i18n::Language;
use super_visa::workflows::assistant::{
    fallback_message, AssistantBridge, ChatRole, ChatSession, CompletionClient, CompletionError,
    CompletionRequest, GeminiClient, ReplyDisposition,
};

struct EchoClient;

#[async_trait]
impl CompletionClient for EchoClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        Ok(format!("echo: {}", request.prompt))
    }
}

#[tokio::test]
async fn concurrent_questions_resolve_to_latest_answer_only() {
    let bridge = Arc::new(AssistantBridge::new(
        Arc::new(EchoClient),
        Duration::from_secs(1),
        0.7,
    ));
    let mut session = ChatSession::new(Language::En);

    let tickets: Vec<_> = ["first", "second", "third"]
        .into_iter()
        .map(|question| session.submit(question).expect("ticket"))
        .collect();

    let mut handles = Vec::new();
    for ticket in tickets.iter().rev() {
        let bridge = bridge.clone();
        let ticket = ticket.clone();
        handles.push(tokio::spawn(async move {
            let reply = bridge.ask(&ticket.prompt, Language::En).await;
            (ticket.sequence, reply)
        }));
    }

    let mut accepted = Vec::new();
    for handle in handles {
        let (sequence, reply) = handle.await.expect("task joins");
        if session.resolve(sequence, reply) == ReplyDisposition::Accepted {
            accepted.push(sequence);
        }
    }

    assert_eq!(accepted, vec![3]);
    let last = session.transcript().last().expect("transcript not empty");
    assert_eq!(last.role, ChatRole::Assistant);
    assert_eq!(last.text, "echo: third");
}

#[tokio::test]
async fn unconfigured_gemini_client_degrades_to_fallback() {
    let client = GeminiClient::new(
        reqwest::Client::new(),
        None,
        "gemini-3-pro-preview",
        "http://127.0.0.1:9",
    );
    let bridge = AssistantBridge::new(Arc::new(client), Duration::from_secs(1), 0.7);

    let reply = bridge.ask("Bonjour", Language::Fr).await;

    assert!(reply.fallback);
    assert_eq!(reply.text, fallback_message(Language::Fr));
}
