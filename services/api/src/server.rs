use crate::cli::ServeArgs;
use crate::infra::{build_services, AppState};
use crate::routes::with_app_routes;
use ats_core::config::{AppConfig, ConfigError, DataSourceMode};
use ats_core::error::AppError;
use ats_core::telemetry;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(source) = args.data_source.take() {
        config.data_source.mode = match source.trim().to_ascii_lowercase().as_str() {
            "mock" | "memory" => DataSourceMode::Mock,
            "remote" | "rest" => DataSourceMode::Remote,
            other => return Err(ConfigError::InvalidDataSource(other.to_string()).into()),
        };
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let services = build_services(&config)?;

    let app = with_app_routes(services)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        ?config.data_source.mode,
        %addr,
        "applicant tracking service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
