//! Lexical-overlap compatibility between a candidate profile and a job's behavioral requirements.
//!
//! This is a heuristic: tokens are compared by substring containment, not meaning.

use serde::{Deserialize, Serialize};

use super::catalog::Archetype;
use super::domain::BehavioralProfile;

/// Behavioral expectations declared on a job posting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobBehavioralRequirement {
    #[serde(default)]
    pub accepted_archetypes: Vec<String>,
    #[serde(default)]
    pub work_style: String,
    #[serde(default)]
    pub team_dynamics: String,
    #[serde(default)]
    pub communication_needs: String,
}

/// Rubric weights for the compatibility score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityConfig {
    pub primary_archetype_points: f64,
    pub secondary_archetype_points: f64,
    pub work_style_weight: f64,
    pub communication_weight: f64,
    pub decision_making_weight: f64,
}

impl Default for CompatibilityConfig {
    fn default() -> Self {
        Self {
            primary_archetype_points: 40.0,
            secondary_archetype_points: 25.0,
            work_style_weight: 30.0,
            communication_weight: 20.0,
            decision_making_weight: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityFactor {
    Archetype,
    WorkStyle,
    Communication,
    DecisionMaking,
}

/// Discrete contribution to the score so results can be audited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityComponent {
    pub factor: CompatibilityFactor,
    pub points: f64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub score: u8,
    pub components: Vec<CompatibilityComponent>,
}

/// Score a profile against a requirement using the default rubric.
pub fn score_compatibility(
    profile: &BehavioralProfile,
    requirement: &JobBehavioralRequirement,
) -> u8 {
    CompatibilityScorer::default()
        .evaluate(profile, requirement)
        .score
}

#[derive(Debug, Clone, Default)]
pub struct CompatibilityScorer {
    config: CompatibilityConfig,
}

impl CompatibilityScorer {
    pub fn new(config: CompatibilityConfig) -> Self {
        Self { config }
    }

    pub fn evaluate(
        &self,
        profile: &BehavioralProfile,
        requirement: &JobBehavioralRequirement,
    ) -> CompatibilityReport {
        let mut components = Vec::with_capacity(4);

        let secondary_archetype = Archetype::pure(profile.secondary_dimension());
        let archetype_points = if accepts(requirement, profile.archetype) {
            components.push(CompatibilityComponent {
                factor: CompatibilityFactor::Archetype,
                points: self.config.primary_archetype_points,
                notes: format!("{} is an accepted archetype", profile.archetype),
            });
            self.config.primary_archetype_points
        } else if accepts(requirement, secondary_archetype) {
            components.push(CompatibilityComponent {
                factor: CompatibilityFactor::Archetype,
                points: self.config.secondary_archetype_points,
                notes: format!(
                    "secondary {} trait maps to accepted {}",
                    profile.secondary_trait, secondary_archetype
                ),
            });
            self.config.secondary_archetype_points
        } else {
            components.push(CompatibilityComponent {
                factor: CompatibilityFactor::Archetype,
                points: 0.0,
                notes: "no accepted archetype matched".to_string(),
            });
            0.0
        };

        let overlaps = [
            (
                CompatibilityFactor::WorkStyle,
                &profile.styles.work_style,
                &requirement.work_style,
                self.config.work_style_weight,
            ),
            (
                CompatibilityFactor::Communication,
                &profile.styles.communication_style,
                &requirement.communication_needs,
                self.config.communication_weight,
            ),
            (
                CompatibilityFactor::DecisionMaking,
                &profile.styles.decision_making_style,
                &requirement.team_dynamics,
                self.config.decision_making_weight,
            ),
        ];

        let mut total = archetype_points;
        for (factor, candidate, required, weight) in overlaps {
            let ratio = token_overlap(candidate, required);
            let points = weight * ratio;
            components.push(CompatibilityComponent {
                factor,
                points,
                notes: format!("{:.0}% token overlap", ratio * 100.0),
            });
            total += points;
        }

        let score = total.clamp(0.0, 100.0).round() as u8;
        tracing::debug!(archetype = %profile.archetype, score, "compatibility scored");

        CompatibilityReport { score, components }
    }
}

fn accepts(requirement: &JobBehavioralRequirement, archetype: Archetype) -> bool {
    requirement
        .accepted_archetypes
        .iter()
        .any(|accepted| accepted.trim().eq_ignore_ascii_case(archetype.name()))
}

/// Fraction of candidate tokens that contain, or are contained in, some required token,
/// measured against the larger of the two token counts.
pub(crate) fn token_overlap(candidate: &str, required: &str) -> f64 {
    let candidate_tokens = tokenize(candidate);
    let required_tokens = tokenize(required);
    let denominator = candidate_tokens.len().max(required_tokens.len());
    if denominator == 0 {
        return 0.0;
    }

    let matched = candidate_tokens
        .iter()
        .filter(|token| {
            required_tokens
                .iter()
                .any(|required| required.contains(token.as_str()) || token.contains(required.as_str()))
        })
        .count();

    matched as f64 / denominator as f64
}

fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}
