use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;

use classmix::config::AppConfig;
use classmix::error::AppError;
use classmix::roster::GroupingService;
use classmix::telemetry;

use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryGroupingStore};
use crate::routes::with_roster_routes;

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

    let store = Arc::new(InMemoryGroupingStore::default());
    let grouping_service = Arc::new(GroupingService::new(store, config.roster.clone()));

    let app = with_roster_routes(grouping_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "group mixer service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
