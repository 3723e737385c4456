use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::info;

use super::compatibility::{
    CompatibilityConfig, CompatibilityReport, CompatibilityScorer, JobBehavioralRequirement,
};
use super::domain::{BehavioralProfile, CandidateId};
use super::insights::{synthesize_insights, InsightBundle};
use super::narrative::NarrativeBundle;
use super::question_bank::QuestionBank;
use super::repository::{
    AssessmentNotice, NotificationError, NotificationPublisher, ProfileRecord, ProfileRepository,
    RepositoryError,
};
use super::responses::{adapt_responses, RawResponse};
use super::scoring::compute_profile;
use super::viewpoint::{render_for_viewer, ViewerContext};

/// Service composing the question bank, compatibility rubric, repository, and notifications.
pub struct AssessmentService<R, N> {
    bank: Arc<QuestionBank>,
    scorer: Arc<CompatibilityScorer>,
    repository: Arc<R>,
    notifications: Arc<N>,
}

impl<R, N> AssessmentService<R, N>
where
    R: ProfileRepository + 'static,
    N: NotificationPublisher + 'static,
{
    pub fn new(repository: Arc<R>, notifications: Arc<N>, bank: QuestionBank) -> Self {
        Self::with_config(repository, notifications, bank, CompatibilityConfig::default())
    }

    pub fn with_config(
        repository: Arc<R>,
        notifications: Arc<N>,
        bank: QuestionBank,
        config: CompatibilityConfig,
    ) -> Self {
        Self {
            bank: Arc::new(bank),
            scorer: Arc::new(CompatibilityScorer::new(config)),
            repository,
            notifications,
        }
    }

    pub fn question_bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Score a submission, persist the profile, and announce completion.
    pub fn complete(
        &self,
        candidate_id: CandidateId,
        responses: &[RawResponse],
    ) -> Result<ProfileRecord, AssessmentServiceError> {
        let canonical = adapt_responses(responses, &self.bank);
        let profile = compute_profile(&canonical, &self.bank);

        let stored = self.repository.save(ProfileRecord {
            candidate_id: candidate_id.clone(),
            profile,
        })?;

        let mut details = BTreeMap::new();
        details.insert(
            "archetype".to_string(),
            stored.profile.archetype.to_string(),
        );
        details.insert(
            "secondary_trait".to_string(),
            stored.profile.secondary_trait.clone(),
        );
        self.notifications.publish(AssessmentNotice {
            template: "assessment_completed".to_string(),
            candidate_id: candidate_id.clone(),
            details,
        })?;

        info!(candidate = %candidate_id.0, archetype = %stored.profile.archetype, "assessment completed");
        Ok(stored)
    }

    pub fn profile(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<BehavioralProfile, AssessmentServiceError> {
        let record = self
            .repository
            .load(candidate_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record.profile)
    }

    pub fn insights(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<InsightBundle, AssessmentServiceError> {
        let profile = self.profile(candidate_id)?;
        Ok(synthesize_insights(&profile))
    }

    pub fn compatibility(
        &self,
        candidate_id: &CandidateId,
        requirement: &JobBehavioralRequirement,
    ) -> Result<CompatibilityReport, AssessmentServiceError> {
        let profile = self.profile(candidate_id)?;
        Ok(self.scorer.evaluate(&profile, requirement))
    }

    /// Narrative for the stored profile, rendered for the given viewer.
    pub fn narrative(
        &self,
        candidate_id: &CandidateId,
        viewer: &ViewerContext,
    ) -> Result<NarrativeBundle, AssessmentServiceError> {
        let profile = self.profile(candidate_id)?;
        let bundle = NarrativeBundle::compose(&profile);
        Ok(render_for_viewer(&bundle, viewer))
    }

    /// Stored profiles in candidate-id order, at most `limit` of them.
    pub fn list_profiles(
        &self,
        limit: usize,
    ) -> Result<Vec<ProfileRecord>, AssessmentServiceError> {
        Ok(self.repository.list(limit)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Notification(#[from] NotificationError),
}
