use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use super::common::*;
use crate::workflows::assessment::domain::Response as SurveyResponse;
use crate::workflows::assessment::{
    compute_profile, compute_profile_at, render_for_viewer, score_compatibility,
    synthesize_insights, Archetype, CompatibilityConfig, CompatibilityFactor, CompatibilityScorer,
    DimensionVector, JobBehavioralRequirement, NarrativeBundle, Pronoun, ViewerContext,
};

#[test]
fn dominant_answers_produce_a_pure_profile() {
    let profile = compute_profile(&uniform_responses(DOMINANCE_OPTION), &bank());

    assert_eq!(profile.dimensions, DimensionVector::new(78, 15, 0, 7));
    assert_eq!(profile.archetype, Archetype::ResultsDynamo);
    assert_eq!(profile.secondary_trait, "Influence");
    assert_eq!(profile.styles.team_role, "Driver");
}

#[test]
fn split_answers_produce_a_combination_profile() {
    let profile = compute_profile(
        &split_responses(DOMINANCE_OPTION, INFLUENCE_OPTION),
        &bank(),
    );

    assert_eq!(profile.dimensions, DimensionVector::new(43, 48, 7, 2));
    assert_eq!(profile.archetype, Archetype::PersuasiveMotivator);
    assert_eq!(profile.secondary_trait, "Dominance");
}

#[test]
fn careful_answers_produce_the_analyst() {
    let profile = compute_profile(&uniform_responses(CONSCIENTIOUSNESS_OPTION), &bank());
    assert_eq!(profile.dimensions, DimensionVector::new(8, 0, 12, 80));
    assert_eq!(profile.archetype, Archetype::PrecisionAnalyst);
}

#[test]
fn empty_and_unknown_responses_default_to_balanced() {
    let bogus = vec![
        SurveyResponse::new("q99", 0),
        SurveyResponse::new("q01", 9),
    ];

    for responses in [Vec::new(), bogus] {
        let profile = compute_profile(&responses, &bank());
        assert_eq!(profile.dimensions, DimensionVector::balanced());
        assert_eq!(profile.archetype, Archetype::VersatileAdapter);
    }
}

#[test]
fn scoring_is_deterministic_for_a_fixed_timestamp() {
    let at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).single().expect("valid time");
    let responses = split_responses(INFLUENCE_OPTION, CONSCIENTIOUSNESS_OPTION);

    let first = compute_profile_at(&responses, &bank(), at);
    let second = compute_profile_at(&responses, &bank(), at);

    assert_eq!(first, second);
}

#[test]
fn accepted_primary_archetype_earns_full_archetype_points() {
    let profile = compute_profile(&uniform_responses(DOMINANCE_OPTION), &bank());
    let report = CompatibilityScorer::default().evaluate(&profile, &requirement());

    let archetype = &report.components[0];
    assert_eq!(archetype.factor, CompatibilityFactor::Archetype);
    assert_eq!(archetype.points, 40.0);
    assert!(report.score >= 40);
    assert_eq!(report.score, score_compatibility(&profile, &requirement()));
}

#[test]
fn secondary_trait_archetype_earns_partial_points() {
    // Persuasive Motivator with Dominance as the secondary dimension.
    let profile = compute_profile(
        &split_responses(DOMINANCE_OPTION, INFLUENCE_OPTION),
        &bank(),
    );
    let requirement = JobBehavioralRequirement {
        accepted_archetypes: vec!["results dynamo".to_string()],
        ..JobBehavioralRequirement::default()
    };

    assert_eq!(score_compatibility(&profile, &requirement), 25);
}

#[test]
fn empty_requirements_score_zero() {
    let profile = compute_profile(&uniform_responses(DOMINANCE_OPTION), &bank());
    assert_eq!(
        score_compatibility(&profile, &JobBehavioralRequirement::default()),
        0
    );
}

#[test]
fn oversized_weights_are_clamped() {
    let profile = compute_profile(&uniform_responses(DOMINANCE_OPTION), &bank());
    let scorer = CompatibilityScorer::new(CompatibilityConfig {
        primary_archetype_points: 90.0,
        secondary_archetype_points: 50.0,
        work_style_weight: 90.0,
        communication_weight: 90.0,
        decision_making_weight: 90.0,
    });

    assert_eq!(scorer.evaluate(&profile, &requirement()).score, 100);
}

#[test]
fn computed_profiles_render_for_recruiters() {
    let profile = compute_profile(&uniform_responses(DOMINANCE_OPTION), &bank());
    let viewer = ViewerContext::third_party("Sam", Pronoun::She);

    let narrative = render_for_viewer(&NarrativeBundle::compose(&profile), &viewer);

    assert_eq!(narrative.archetype, "Results Dynamo");
    assert!(narrative.description.starts_with("Sam is at her best"));
    assert!(narrative.description.contains("would help her"));
    assert!(!narrative.challenges.is_empty());
}

#[test]
fn computed_insights_respect_role_cap() {
    for option in 0..4 {
        let profile = compute_profile(&uniform_responses(option), &bank());
        let insights = synthesize_insights(&profile);
        assert!(insights.compatible_roles.len() <= 5);
    }
}

proptest! {
    #[test]
    fn any_answer_pattern_normalizes_to_one_hundred(choices in prop::collection::vec(0usize..5, 0..12)) {
        let responses: Vec<SurveyResponse> = bank()
            .questions()
            .iter()
            .zip(choices)
            .map(|(question, option)| SurveyResponse::new(question.id.clone(), option))
            .collect();

        let profile = compute_profile(&responses, &bank());
        prop_assert_eq!(profile.dimensions.total(), 100);
    }

    #[test]
    fn compatibility_stays_within_bounds(
        option in 0usize..4,
        accepted in prop::collection::vec("[A-Za-z ]{0,24}", 0..3),
        work_style in ".{0,80}",
        team_dynamics in ".{0,80}",
        communication_needs in ".{0,80}",
    ) {
        let profile = compute_profile(&uniform_responses(option), &bank());
        let requirement = JobBehavioralRequirement {
            accepted_archetypes: accepted,
            work_style,
            team_dynamics,
            communication_needs,
        };

        let score = score_compatibility(&profile, &requirement);
        prop_assert!(score <= 100);
    }
}
