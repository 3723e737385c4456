use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::compatibility::JobBehavioralRequirement;
use super::domain::{BehavioralProfile, CandidateId};
use super::narrative::NarrativeBundle;
use super::repository::{
    NotificationPublisher, ProfileRepository, ProfileSummaryView, RepositoryError,
};
use super::responses::RawResponse;
use super::service::{AssessmentService, AssessmentServiceError};
use super::viewpoint::{render_for_viewer, Pronoun, ViewerContext, ViewerRole};

/// Request body for a completed assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub responses: Vec<RawResponse>,
}

/// Query string describing who is viewing a stored profile.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewerQuery {
    pub viewer: Option<ViewerRole>,
    pub name: Option<String>,
    pub pronoun: Option<Pronoun>,
}

impl From<ViewerQuery> for ViewerContext {
    fn from(query: ViewerQuery) -> Self {
        ViewerContext {
            role: query.viewer.unwrap_or_default(),
            subject_name: query.name,
            pronoun: query.pronoun.unwrap_or_default(),
        }
    }
}

const DEFAULT_LIST_LIMIT: usize = 50;
const MAX_LIST_LIMIT: usize = 200;

/// Paging for the stored profile listing.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}

impl ListQuery {
    fn effective_limit(self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIST_LIMIT).min(MAX_LIST_LIMIT)
    }
}

#[derive(Debug, Serialize)]
struct AssessmentView {
    candidate_id: CandidateId,
    profile: BehavioralProfile,
    narrative: NarrativeBundle,
}

/// Router builder exposing assessment intake, listing, narrative retrieval, and job matching.
pub fn assessment_router<R, N>(service: Arc<AssessmentService<R, N>>) -> Router
where
    R: ProfileRepository + 'static,
    N: NotificationPublisher + 'static,
{
    Router::new()
        .route("/api/v1/questions", get(questions_handler::<R, N>))
        .route("/api/v1/assessments", get(list_handler::<R, N>))
        .route(
            "/api/v1/assessments/:candidate_id",
            post(complete_handler::<R, N>).get(narrative_handler::<R, N>),
        )
        .route(
            "/api/v1/assessments/:candidate_id/compatibility",
            post(compatibility_handler::<R, N>),
        )
        .with_state(service)
}

pub(crate) async fn questions_handler<R, N>(
    State(service): State<Arc<AssessmentService<R, N>>>,
) -> Response
where
    R: ProfileRepository + 'static,
    N: NotificationPublisher + 'static,
{
    (
        StatusCode::OK,
        axum::Json(service.question_bank().questions().to_vec()),
    )
        .into_response()
}

pub(crate) async fn list_handler<R, N>(
    State(service): State<Arc<AssessmentService<R, N>>>,
    Query(query): Query<ListQuery>,
) -> Response
where
    R: ProfileRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.list_profiles(query.effective_limit()) {
        Ok(records) => {
            let views: Vec<ProfileSummaryView> =
                records.iter().map(|record| record.summary_view()).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn complete_handler<R, N>(
    State(service): State<Arc<AssessmentService<R, N>>>,
    Path(candidate_id): Path<String>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Response
where
    R: ProfileRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.complete(CandidateId(candidate_id), &submission.responses) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.summary_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn narrative_handler<R, N>(
    State(service): State<Arc<AssessmentService<R, N>>>,
    Path(candidate_id): Path<String>,
    Query(query): Query<ViewerQuery>,
) -> Response
where
    R: ProfileRepository + 'static,
    N: NotificationPublisher + 'static,
{
    let candidate_id = CandidateId(candidate_id);
    let viewer = ViewerContext::from(query);

    let result = service.profile(&candidate_id).map(|profile| AssessmentView {
        narrative: render_for_viewer(&NarrativeBundle::compose(&profile), &viewer),
        profile: render_for_viewer(&profile, &viewer),
        candidate_id: candidate_id.clone(),
    });

    match result {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn compatibility_handler<R, N>(
    State(service): State<Arc<AssessmentService<R, N>>>,
    Path(candidate_id): Path<String>,
    axum::Json(requirement): axum::Json<JobBehavioralRequirement>,
) -> Response
where
    R: ProfileRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.compatibility(&CandidateId(candidate_id), &requirement) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: AssessmentServiceError) -> Response {
    let status = match &error {
        AssessmentServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Notification(_) => StatusCode::BAD_GATEWAY,
        AssessmentServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
