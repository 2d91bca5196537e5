use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::domain::EligibilityForm;
use super::service::EligibilityService;
use crate::i18n::resolve_language;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LanguageQuery {
    #[serde(default)]
    pub(crate) lang: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct EstimateRequest {
    #[serde(flatten)]
    pub(crate) form: EligibilityForm,
    #[serde(default)]
    pub(crate) lang: Option<String>,
}

/// Router builder exposing the estimator and the localized income table.
pub fn eligibility_router(service: Arc<EligibilityService>) -> Router {
    Router::new()
        .route("/api/v1/eligibility/estimate", post(estimate_handler))
        .route("/api/v1/eligibility/thresholds", get(thresholds_handler))
        .with_state(service)
}

/// Every form maps to a verdict, so this always answers 200.
pub(crate) async fn estimate_handler(
    State(service): State<Arc<EligibilityService>>,
    Json(request): Json<EstimateRequest>,
) -> Response {
    let language = resolve_language(request.lang.as_deref(), service.default_language());
    let view = service.estimate(&request.form, language);
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn thresholds_handler(
    State(service): State<Arc<EligibilityService>>,
    Query(query): Query<LanguageQuery>,
) -> Response {
    let language = resolve_language(query.lang.as_deref(), service.default_language());
    (StatusCode::OK, Json(service.thresholds(language))).into_response()
}
