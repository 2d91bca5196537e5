use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::bridge::AssistantBridge;
use super::client::CompletionClient;
use crate::i18n::{resolve_language, Language};

pub(crate) struct AssistantState<C> {
    pub(crate) bridge: Arc<AssistantBridge<C>>,
    pub(crate) default_language: Language,
}

impl<C> Clone for AssistantState<C> {
    fn clone(&self) -> Self {
        Self {
            bridge: self.bridge.clone(),
            default_language: self.default_language,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AskRequest {
    pub(crate) message: String,
    #[serde(default)]
    pub(crate) lang: Option<String>,
    /// Client-side sequence number, echoed back so the page can drop stale replies.
    #[serde(default)]
    pub(crate) sequence: Option<u64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AskResponse {
    pub(crate) reply: String,
    pub(crate) fallback: bool,
    pub(crate) language: Language,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) sequence: Option<u64>,
}

/// Router builder exposing the chat panel endpoint.
pub fn assistant_router<C>(bridge: Arc<AssistantBridge<C>>, default_language: Language) -> Router
where
    C: CompletionClient + 'static,
{
    Router::new()
        .route("/api/v1/assistant/ask", post(ask_handler::<C>))
        .with_state(AssistantState {
            bridge,
            default_language,
        })
}

/// Model failures come back as a 200 carrying the fallback text.
pub(crate) async fn ask_handler<C>(
    State(state): State<AssistantState<C>>,
    Json(request): Json<AskRequest>,
) -> Response
where
    C: CompletionClient + 'static,
{
    if request.message.trim().is_empty() {
        let payload = json!({ "error": "message must not be blank" });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
    }

    let language = resolve_language(request.lang.as_deref(), state.default_language);
    let reply = state.bridge.ask(&request.message, language).await;

    let body = AskResponse {
        reply: reply.text,
        fallback: reply.fallback,
        language,
        sequence: request.sequence,
    };
    (StatusCode::OK, Json(body)).into_response()
}
