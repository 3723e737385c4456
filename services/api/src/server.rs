use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryNotificationPublisher, InMemoryProfileRepository};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use talent_fit::config::AppConfig;
use talent_fit::error::AppError;
use talent_fit::telemetry;
use talent_fit::workflows::assessment::AssessmentService;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(path) = args.question_bank.take() {
        config.assessment.question_bank = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let bank = config.assessment.load_question_bank()?;
    info!(questions = bank.len(), custom = config.assessment.question_bank.is_some(), "question bank loaded");

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryProfileRepository::default());
    let notifications = Arc::new(InMemoryNotificationPublisher::default());
    let assessment_service = Arc::new(AssessmentService::new(repository, notifications, bank));

    let app = with_assessment_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "talent fit assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
