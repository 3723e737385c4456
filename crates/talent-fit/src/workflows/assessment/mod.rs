//! Behavioral assessment engine: scoring survey responses into archetype profiles,
//! deriving insights, matching against job requirements, and rendering narrative
//! for different viewers.
//!
//! The engine functions are pure. The service, repository ports, and router wrap them
//! for the HTTP host.

pub mod catalog;
pub mod compatibility;
pub mod domain;
pub mod insights;
pub mod narrative;
pub mod question_bank;
pub mod repository;
pub mod responses;
pub mod router;
pub mod scoring;
pub mod service;
pub mod viewpoint;

#[cfg(test)]
mod tests;

pub use catalog::{Archetype, ArchetypeCatalog, ArchetypeEntry, KeyStrength};
pub use compatibility::{
    score_compatibility, CompatibilityComponent, CompatibilityConfig, CompatibilityFactor,
    CompatibilityReport, CompatibilityScorer, JobBehavioralRequirement,
};
pub use domain::{
    BehavioralProfile, CandidateId, Dimension, DimensionVector, Question, QuestionOption,
    Response, ResponseSet, StyleBundle,
};
pub use insights::{synthesize_from_dimensions, synthesize_insights, InsightBundle};
pub use narrative::{NarrativeBundle, NarrativeStrength};
pub use question_bank::{QuestionBank, QuestionBankError};
pub use repository::{
    AssessmentNotice, NotificationError, NotificationPublisher, ProfileRecord, ProfileRepository,
    ProfileSummaryView, RepositoryError,
};
pub use responses::{adapt_responses, RawResponse};
pub use router::{assessment_router, AssessmentSubmission, ListQuery, ViewerQuery};
pub use scoring::{
    classify, compute_profile, compute_profile_at, normalize, Classification, ClassificationRule,
};
pub use service::{AssessmentService, AssessmentServiceError};
pub use viewpoint::{render_for_viewer, transform_text, Pronoun, Render, ViewerContext, ViewerRole};
