use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::assessment::domain::{CandidateId, Response as SurveyResponse};
use crate::workflows::assessment::repository::{
    AssessmentNotice, NotificationError, NotificationPublisher, ProfileRecord, ProfileRepository,
    RepositoryError,
};
use crate::workflows::assessment::{
    assessment_router, AssessmentService, JobBehavioralRequirement, QuestionBank, RawResponse,
};

/// Option index that leans toward each dimension in the built-in bank.
pub(super) const DOMINANCE_OPTION: usize = 0;
pub(super) const INFLUENCE_OPTION: usize = 1;
pub(super) const CONSCIENTIOUSNESS_OPTION: usize = 3;

pub(super) fn bank() -> QuestionBank {
    QuestionBank::standard()
}

pub(super) fn candidate(id: &str) -> CandidateId {
    CandidateId(id.to_string())
}

/// Answer every question with the same option index.
pub(super) fn uniform_responses(option_index: usize) -> Vec<SurveyResponse> {
    bank()
        .questions()
        .iter()
        .map(|question| SurveyResponse::new(question.id.clone(), option_index))
        .collect()
}

/// First half of the survey answered with `first`, second half with `second`.
pub(super) fn split_responses(first: usize, second: usize) -> Vec<SurveyResponse> {
    let bank = bank();
    let half = bank.len() / 2;
    bank.questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let option = if index < half { first } else { second };
            SurveyResponse::new(question.id.clone(), option)
        })
        .collect()
}

pub(super) fn raw(responses: Vec<SurveyResponse>) -> Vec<RawResponse> {
    responses.into_iter().map(RawResponse::from).collect()
}

pub(super) fn requirement() -> JobBehavioralRequirement {
    JobBehavioralRequirement {
        accepted_archetypes: vec!["Results Dynamo".to_string()],
        work_style: "fast outcomes autonomy".to_string(),
        team_dynamics: "decide quickly and own results".to_string(),
        communication_needs: "direct brief updates".to_string(),
    }
}

pub(super) fn build_service() -> (
    AssessmentService<MemoryRepository, MemoryNotifications>,
    Arc<MemoryRepository>,
    Arc<MemoryNotifications>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notifications = Arc::new(MemoryNotifications::default());
    let service = AssessmentService::new(repository.clone(), notifications.clone(), bank());
    (service, repository, notifications)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<BTreeMap<CandidateId, ProfileRecord>>>,
}

impl ProfileRepository for MemoryRepository {
    fn save(&self, record: ProfileRecord) -> Result<ProfileRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.candidate_id.clone(), record.clone());
        Ok(record)
    }

    fn load(&self, candidate_id: &CandidateId) -> Result<Option<ProfileRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(candidate_id).cloned())
    }

    fn list(&self, limit: usize) -> Result<Vec<ProfileRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().take(limit).cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifications {
    events: Arc<Mutex<Vec<AssessmentNotice>>>,
}

impl MemoryNotifications {
    pub(super) fn events(&self) -> Vec<AssessmentNotice> {
        self.events.lock().expect("notification mutex poisoned").clone()
    }
}

impl NotificationPublisher for MemoryNotifications {
    fn publish(&self, notice: AssessmentNotice) -> Result<(), NotificationError> {
        self.events
            .lock()
            .expect("notification mutex poisoned")
            .push(notice);
        Ok(())
    }
}

pub(super) struct OfflineNotifications;

impl NotificationPublisher for OfflineNotifications {
    fn publish(&self, _notice: AssessmentNotice) -> Result<(), NotificationError> {
        Err(NotificationError::Transport("webhook timed out".to_string()))
    }
}

pub(super) struct UnavailableRepository;

impl ProfileRepository for UnavailableRepository {
    fn save(&self, _record: ProfileRecord) -> Result<ProfileRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn load(&self, _candidate_id: &CandidateId) -> Result<Option<ProfileRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self, _limit: usize) -> Result<Vec<ProfileRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assessment_router_with_service(
    service: AssessmentService<MemoryRepository, MemoryNotifications>,
) -> axum::Router {
    assessment_router(Arc::new(service))
}
