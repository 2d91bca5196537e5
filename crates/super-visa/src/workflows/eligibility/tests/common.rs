use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::i18n::Language;
use crate::workflows::eligibility::{
    eligibility_router, EligibilityClassifier, EligibilityInput, EligibilityService,
    IncomeThresholdTable, MessageCatalog, SponsorStatus,
};

pub(super) fn classifier() -> EligibilityClassifier {
    EligibilityClassifier::new(IncomeThresholdTable::standard())
}

pub(super) fn input(
    status: SponsorStatus,
    relatives_invited: u32,
    dependents: u32,
    income: &str,
) -> EligibilityInput {
    EligibilityInput::new(status, relatives_invited, dependents, income)
}

pub(super) fn service(default_language: Language) -> EligibilityService {
    EligibilityService::new(
        IncomeThresholdTable::standard(),
        MessageCatalog::builtin(),
        default_language,
    )
}

pub(super) fn router(default_language: Language) -> axum::Router {
    eligibility_router(Arc::new(service(default_language)))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
