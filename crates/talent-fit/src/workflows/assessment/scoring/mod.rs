mod aggregation;
mod classification;

pub use aggregation::normalize;
pub use classification::{classify, Classification, ClassificationRule};

use chrono::{DateTime, Utc};
use tracing::debug;

use super::catalog::ArchetypeCatalog;
use super::domain::{BehavioralProfile, Dimension, Response, StyleBundle};
use super::question_bank::QuestionBank;

/// Score a response set into a behavioral profile stamped with the current time.
pub fn compute_profile(responses: &[Response], bank: &QuestionBank) -> BehavioralProfile {
    compute_profile_at(responses, bank, Utc::now())
}

/// Same as [`compute_profile`] with an explicit completion timestamp.
pub fn compute_profile_at(
    responses: &[Response],
    bank: &QuestionBank,
    completed_at: DateTime<Utc>,
) -> BehavioralProfile {
    let raw = aggregation::aggregate(responses, bank);
    let dimensions = normalize(&raw);
    let classification = classify(&dimensions);

    debug!(
        responses = responses.len(),
        raw_total = raw.total(),
        dominance = dimensions.dominance,
        influence = dimensions.influence,
        steadiness = dimensions.steadiness,
        conscientiousness = dimensions.conscientiousness,
        archetype = %classification.archetype,
        rule = ?classification.rule,
        "behavioral profile scored"
    );

    let entry = ArchetypeCatalog::standard().resolve(classification.archetype);
    let traits = primary_traits(classification.primary);

    BehavioralProfile {
        dimensions,
        archetype: classification.archetype,
        secondary_trait: classification.secondary_trait().to_string(),
        styles: StyleBundle {
            work_style: entry.style.to_string(),
            communication_style: entry.communication_style.to_string(),
            decision_making_style: entry.decision_making_style.to_string(),
            stress_response: traits.stress_response.to_string(),
            team_role: traits.team_role.to_string(),
            leadership_style: traits.leadership_style.to_string(),
        },
        completed_at,
    }
}

struct PrimaryTraits {
    stress_response: &'static str,
    team_role: &'static str,
    leadership_style: &'static str,
}

fn primary_traits(primary: Dimension) -> PrimaryTraits {
    match primary {
        Dimension::Dominance => PrimaryTraits {
            stress_response: "Under pressure you become more direct and may take control to force progress.",
            team_role: "Driver",
            leadership_style: "Directive and results-focused",
        },
        Dimension::Influence => PrimaryTraits {
            stress_response: "Under pressure you seek reassurance and talk problems through with others.",
            team_role: "Energizer",
            leadership_style: "Inspirational and people-focused",
        },
        Dimension::Steadiness => PrimaryTraits {
            stress_response: "Under pressure you become quieter and work to keep the peace.",
            team_role: "Stabilizer",
            leadership_style: "Supportive and consistent",
        },
        Dimension::Conscientiousness => PrimaryTraits {
            stress_response: "Under pressure you double-check your work and hold firmly to standards.",
            team_role: "Quality Guardian",
            leadership_style: "Methodical and standards-driven",
        },
    }
}
