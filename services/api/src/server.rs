use crate::cli::ServeArgs;
use crate::infra::{build_service, AppState};
use crate::routes::with_operational_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use ecoscore::config::AppConfig;
use ecoscore::error::AppError;
use ecoscore::suggestions::SuggestionBackend;
use ecoscore::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let backend = SuggestionBackend::from_config(&config.suggestions)?;
    if backend.is_enabled() {
        info!(model = %config.suggestions.model, "suggestion backend enabled");
    } else {
        warn!("CLAUDE_API_KEY not set; every product will receive fallback suggestions");
    }
    let scoring_service = Arc::new(build_service(&config, backend));

    let app = with_operational_routes(scoring_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "sustainability scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
