use crate::cli::ServeArgs;
use crate::infra::{assistant_bridge, eligibility_service, load_catalog, AppState};
use crate::routes::with_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use super_visa::config::AppConfig;
use super_visa::error::AppError;
use super_visa::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = load_catalog(args.catalog.as_deref())?;
    let eligibility = eligibility_service(&config, catalog);
    let assistant = assistant_bridge(&config)?;

    let app = with_routes(eligibility, assistant, config.default_language)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        model = %config.assistant.model,
        language = config.default_language.code(),
        "super visa estimator ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
