use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use talent_fit::error::AppError;
use talent_fit::workflows::assessment::{
    AssessmentNotice, CandidateId, JobBehavioralRequirement, NotificationError,
    NotificationPublisher, ProfileRecord, ProfileRepository, Pronoun, RawResponse,
    RepositoryError,
};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local profile store; records are lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileRepository {
    records: Arc<Mutex<BTreeMap<CandidateId, ProfileRecord>>>,
}

impl ProfileRepository for InMemoryProfileRepository {
    fn save(&self, record: ProfileRecord) -> Result<ProfileRecord, RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("profile store poisoned".to_string()))?;
        guard.insert(record.candidate_id.clone(), record.clone());
        Ok(record)
    }

    fn load(&self, candidate_id: &CandidateId) -> Result<Option<ProfileRecord>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("profile store poisoned".to_string()))?;
        Ok(guard.get(candidate_id).cloned())
    }

    fn list(&self, limit: usize) -> Result<Vec<ProfileRecord>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("profile store poisoned".to_string()))?;
        Ok(guard.values().take(limit).cloned().collect())
    }
}

/// Publisher that records notices and logs them instead of calling out.
#[derive(Default, Clone)]
pub(crate) struct InMemoryNotificationPublisher {
    events: Arc<Mutex<Vec<AssessmentNotice>>>,
}

impl NotificationPublisher for InMemoryNotificationPublisher {
    fn publish(&self, notice: AssessmentNotice) -> Result<(), NotificationError> {
        info!(template = %notice.template, candidate = %notice.candidate_id.0, "assessment notice");
        let mut guard = self
            .events
            .lock()
            .map_err(|_| NotificationError::Transport("notice log poisoned".to_string()))?;
        guard.push(notice);
        Ok(())
    }
}

impl InMemoryNotificationPublisher {
    pub(crate) fn events(&self) -> Vec<AssessmentNotice> {
        self.events
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

pub(crate) fn parse_pronoun(raw: &str) -> Result<Pronoun, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "he" | "him" | "his" => Ok(Pronoun::He),
        "she" | "her" | "hers" => Ok(Pronoun::She),
        "they" | "them" | "their" => Ok(Pronoun::They),
        other => Err(format!("unsupported pronoun '{other}' (expected he, she, or they)")),
    }
}

pub(crate) fn read_responses(path: &Path) -> Result<Vec<RawResponse>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|err| {
        AppError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("{}: {err}", path.display()),
        ))
    })
}

pub(crate) fn read_requirement(path: &Path) -> Result<JobBehavioralRequirement, AppError> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|err| {
        AppError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("{}: {err}", path.display()),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pronouns_parse_from_common_forms() {
        assert_eq!(parse_pronoun("She"), Ok(Pronoun::She));
        assert_eq!(parse_pronoun(" him "), Ok(Pronoun::He));
        assert_eq!(parse_pronoun("they"), Ok(Pronoun::They));
        assert!(parse_pronoun("xe").is_err());
    }

    #[test]
    fn repository_replaces_records_per_candidate() {
        use talent_fit::workflows::assessment::{compute_profile, QuestionBank};

        let repository = InMemoryProfileRepository::default();
        let profile = compute_profile(&[], &QuestionBank::standard());
        let id = CandidateId("cand-1".to_string());

        for _ in 0..2 {
            repository
                .save(ProfileRecord {
                    candidate_id: id.clone(),
                    profile: profile.clone(),
                })
                .expect("save");
        }

        assert_eq!(repository.list(10).expect("list").len(), 1);
        assert!(repository.load(&id).expect("load").is_some());
    }
}
