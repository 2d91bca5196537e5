use metrics_exporter_prometheus::PrometheusHandle;
use std::fs::File;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use super_visa::config::AppConfig;
use super_visa::error::AppError;
use super_visa::i18n::Language;
use super_visa::workflows::assistant::{AssistantBridge, GeminiClient};
use super_visa::workflows::eligibility::{
    EligibilityService, IncomeThresholdTable, MessageCatalog,
};
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_language(raw: &str) -> Result<Language, String> {
    Language::parse(raw).ok_or_else(|| format!("unsupported language '{raw}' (expected fr or en)"))
}

pub(crate) fn load_catalog(path: Option<&Path>) -> Result<MessageCatalog, AppError> {
    match path {
        Some(path) => {
            let catalog = MessageCatalog::from_json_reader(File::open(path)?)?;
            info!(path = %path.display(), "loaded message catalog");
            Ok(catalog)
        }
        None => Ok(MessageCatalog::builtin()),
    }
}

pub(crate) fn eligibility_service(
    config: &AppConfig,
    catalog: MessageCatalog,
) -> Arc<EligibilityService> {
    Arc::new(EligibilityService::new(
        IncomeThresholdTable::standard(),
        catalog,
        config.default_language,
    ))
}

pub(crate) fn assistant_bridge(
    config: &AppConfig,
) -> Result<Arc<AssistantBridge<GeminiClient>>, AppError> {
    let client = GeminiClient::from_config(&config.assistant)?;
    if !client.is_configured() {
        warn!("no GEMINI_API_KEY set; the assistant will answer with the fallback message");
    }
    Ok(Arc::new(AssistantBridge::from_config(
        Arc::new(client),
        &config.assistant,
    )))
}
