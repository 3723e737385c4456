use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::Archetype;
use super::domain::{BehavioralProfile, CandidateId, DimensionVector};

/// Stored assessment result keyed by candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub candidate_id: CandidateId,
    pub profile: BehavioralProfile,
}

impl ProfileRecord {
    pub fn summary_view(&self) -> ProfileSummaryView {
        ProfileSummaryView {
            candidate_id: self.candidate_id.clone(),
            archetype: self.profile.archetype,
            secondary_trait: self.profile.secondary_trait.clone(),
            dimensions: self.profile.dimensions,
            completed_at: self.profile.completed_at.to_rfc3339(),
        }
    }
}

/// Storage abstraction so the service can be exercised without a database.
pub trait ProfileRepository: Send + Sync {
    /// Insert or replace the record for a candidate. A retaken assessment overwrites the old one.
    fn save(&self, record: ProfileRecord) -> Result<ProfileRecord, RepositoryError>;
    fn load(&self, candidate_id: &CandidateId) -> Result<Option<ProfileRecord>, RepositoryError>;
    /// Up to `limit` records ordered by candidate id.
    fn list(&self, limit: usize) -> Result<Vec<ProfileRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook for assessment events (ATS webhooks, e-mail, etc).
pub trait NotificationPublisher: Send + Sync {
    fn publish(&self, notice: AssessmentNotice) -> Result<(), NotificationError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentNotice {
    pub template: String,
    pub candidate_id: CandidateId,
    pub details: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}

/// Compact representation returned once an assessment is stored.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummaryView {
    pub candidate_id: CandidateId,
    pub archetype: Archetype,
    pub secondary_trait: String,
    pub dimensions: DimensionVector,
    pub completed_at: String,
}
