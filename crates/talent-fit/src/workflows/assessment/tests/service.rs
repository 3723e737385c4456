use std::sync::Arc;

use super::common::*;
use crate::workflows::assessment::repository::{ProfileRepository, RepositoryError};
use crate::workflows::assessment::{
    Archetype, AssessmentService, AssessmentServiceError, Pronoun, RawResponse, ViewerContext,
};

#[test]
fn complete_persists_profile_and_publishes_notice() {
    let (service, repository, notifications) = build_service();

    let record = service
        .complete(candidate("cand-001"), &raw(uniform_responses(DOMINANCE_OPTION)))
        .expect("assessment completes");

    assert_eq!(record.profile.archetype, Archetype::ResultsDynamo);
    let stored = repository
        .load(&candidate("cand-001"))
        .expect("load succeeds")
        .expect("record stored");
    assert_eq!(stored, record);

    let events = notifications.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].template, "assessment_completed");
    assert_eq!(events[0].details["archetype"], "Results Dynamo");
}

#[test]
fn legacy_label_payloads_score_like_indexed_ones() {
    let (service, _, _) = build_service();
    let labeled: Vec<RawResponse> = bank()
        .questions()
        .iter()
        .map(|question| RawResponse::Labeled {
            question: question.id.clone(),
            answer: question.options[CONSCIENTIOUSNESS_OPTION].label.to_uppercase(),
        })
        .collect();

    let legacy = service
        .complete(candidate("legacy"), &labeled)
        .expect("legacy completes");
    let indexed = service
        .complete(
            candidate("indexed"),
            &raw(uniform_responses(CONSCIENTIOUSNESS_OPTION)),
        )
        .expect("indexed completes");

    assert_eq!(legacy.profile.dimensions, indexed.profile.dimensions);
    assert_eq!(legacy.profile.archetype, Archetype::PrecisionAnalyst);
}

#[test]
fn retaking_the_assessment_replaces_the_profile() {
    let (service, repository, _) = build_service();
    let id = candidate("cand-002");

    service
        .complete(id.clone(), &raw(uniform_responses(DOMINANCE_OPTION)))
        .expect("first attempt");
    service
        .complete(id.clone(), &raw(uniform_responses(CONSCIENTIOUSNESS_OPTION)))
        .expect("second attempt");

    assert_eq!(
        service.profile(&id).expect("profile").archetype,
        Archetype::PrecisionAnalyst
    );
    assert_eq!(repository.list(10).expect("list").len(), 1);
}

#[test]
fn missing_profiles_surface_not_found() {
    let (service, _, _) = build_service();

    let error = service
        .insights(&candidate("ghost"))
        .expect_err("no profile stored");

    assert!(matches!(
        error,
        AssessmentServiceError::Repository(RepositoryError::NotFound)
    ));
}

#[test]
fn narrative_respects_the_viewer() {
    let (service, _, _) = build_service();
    let id = candidate("cand-003");
    service
        .complete(id.clone(), &raw(uniform_responses(DOMINANCE_OPTION)))
        .expect("assessment completes");

    let own = service
        .narrative(&id, &ViewerContext::subject())
        .expect("self narrative");
    let recruiter = service
        .narrative(&id, &ViewerContext::third_party("Morgan", Pronoun::He))
        .expect("recruiter narrative");

    assert!(own.description.starts_with("You're"));
    assert!(recruiter.description.starts_with("Morgan is at his best"));
    assert_eq!(own.archetype, recruiter.archetype);
}

#[test]
fn compatibility_uses_the_stored_profile() {
    let (service, _, _) = build_service();
    let id = candidate("cand-004");
    service
        .complete(id.clone(), &raw(uniform_responses(DOMINANCE_OPTION)))
        .expect("assessment completes");

    let report = service
        .compatibility(&id, &requirement())
        .expect("report");

    assert!(report.score >= 40);
    assert_eq!(report.components.len(), 4);
}

#[test]
fn notification_failures_are_reported_after_saving() {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(repository.clone(), Arc::new(OfflineNotifications), bank());

    let error = service
        .complete(candidate("cand-005"), &raw(uniform_responses(INFLUENCE_OPTION)))
        .expect_err("publisher offline");

    assert!(matches!(error, AssessmentServiceError::Notification(_)));
    assert!(repository
        .load(&candidate("cand-005"))
        .expect("load")
        .is_some());
}

#[test]
fn repository_outages_propagate() {
    let service = AssessmentService::new(
        Arc::new(UnavailableRepository),
        Arc::new(MemoryNotifications::default()),
        bank(),
    );

    let error = service
        .complete(candidate("cand-006"), &raw(uniform_responses(INFLUENCE_OPTION)))
        .expect_err("repository offline");

    assert!(matches!(
        error,
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_))
    ));
}
