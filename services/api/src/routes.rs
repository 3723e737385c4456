use crate::infra::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use talent_fit::error::AppError;
use talent_fit::workflows::assessment::{
    adapt_responses, assessment_router, compute_profile, render_for_viewer, synthesize_insights,
    AssessmentService, BehavioralProfile, InsightBundle, NotificationPublisher, ProfileRepository,
    QuestionBank, RawResponse, ViewerContext,
};

/// Score responses without storing anything.
#[derive(Debug, Deserialize)]
pub(crate) struct PreviewRequest {
    pub(crate) responses: Vec<RawResponse>,
    #[serde(default)]
    pub(crate) viewer: Option<ViewerContext>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PreviewResponse {
    pub(crate) profile: BehavioralProfile,
    pub(crate) insights: InsightBundle,
}

pub(crate) fn with_assessment_routes<R, N>(service: Arc<AssessmentService<R, N>>) -> axum::Router
where
    R: ProfileRepository + 'static,
    N: NotificationPublisher + 'static,
{
    let bank = Arc::new(service.question_bank().clone());

    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/profile/preview",
            axum::routing::post(preview_endpoint).with_state(bank),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn preview_endpoint(
    State(bank): State<Arc<QuestionBank>>,
    Json(payload): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    let responses = adapt_responses(&payload.responses, &bank);
    let profile = compute_profile(&responses, &bank);
    let insights = synthesize_insights(&profile);
    let viewer = payload.viewer.unwrap_or_default();

    Ok(Json(PreviewResponse {
        profile: render_for_viewer(&profile, &viewer),
        insights,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{InMemoryNotificationPublisher, InMemoryProfileRepository};
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::atomic::AtomicBool;
    use talent_fit::workflows::assessment::{Archetype, Pronoun, Response};
    use tower::ServiceExt;

    fn preview_request(option: usize, viewer: Option<ViewerContext>) -> PreviewRequest {
        let responses = QuestionBank::standard()
            .questions()
            .iter()
            .map(|question| RawResponse::from(Response::new(question.id.clone(), option)))
            .collect();
        PreviewRequest { responses, viewer }
    }

    #[tokio::test]
    async fn preview_endpoint_scores_without_persisting() {
        let bank = Arc::new(QuestionBank::standard());

        let Json(body) = preview_endpoint(State(bank), Json(preview_request(2, None)))
            .await
            .expect("preview builds");

        assert_eq!(body.profile.archetype, Archetype::SteadySupporter);
        assert_eq!(body.profile.dimensions.total(), 100);
        assert!(body.insights.compatible_roles.len() <= 5);
    }

    #[tokio::test]
    async fn preview_endpoint_renders_for_third_party() {
        let bank = Arc::new(QuestionBank::standard());
        let viewer = ViewerContext::third_party("Ari", Pronoun::They);

        let Json(body) = preview_endpoint(State(bank), Json(preview_request(0, Some(viewer))))
            .await
            .expect("preview builds");

        assert_eq!(
            body.profile.styles.work_style,
            "Ari works fast, focuses on outcomes, and prefers autonomy over close supervision."
        );
        assert_eq!(
            body.profile.styles.stress_response,
            "Under pressure they become more direct and may take control to force progress."
        );
    }

    #[tokio::test]
    async fn readiness_reports_initializing_until_bound() {
        let service = Arc::new(AssessmentService::new(
            Arc::new(InMemoryProfileRepository::default()),
            Arc::new(InMemoryNotificationPublisher::default()),
            QuestionBank::standard(),
        ));
        let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(recorder.handle()),
        };
        let app = with_assessment_routes(service).layer(Extension(state));

        let response = app
            .clone()
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request"))
            .await
            .expect("route responds");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
            .await
            .expect("route responds");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
