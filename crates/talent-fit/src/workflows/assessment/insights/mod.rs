//! Dimension-driven insight lists, independent of the archetype lookup.

mod phrases;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::domain::{BehavioralProfile, Dimension, DimensionVector};
use phrases::{combination_strength, curated_roles, phrases_for, COMBINED_ROLES};

const TIER_THRESHOLDS: [u32; 3] = [25, 35, 45];
const COMBINATION_THRESHOLD: u32 = 25;
const MAX_ROLES: usize = 5;

/// Supplementary narrative lists derived straight from dimension magnitudes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightBundle {
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub ideal_work_environment: Vec<String>,
    pub motivators: Vec<String>,
    pub compatible_roles: Vec<String>,
}

pub fn synthesize_insights(profile: &BehavioralProfile) -> InsightBundle {
    synthesize_from_dimensions(&profile.dimensions)
}

pub fn synthesize_from_dimensions(dimensions: &DimensionVector) -> InsightBundle {
    let mut bundle = InsightBundle::default();

    for dimension in Dimension::ordered() {
        let tiers = tiers_reached(dimensions.get(dimension));
        let phrases = phrases_for(dimension);
        for tier in 0..tiers {
            bundle.strengths.push(phrases.strengths[tier].to_string());
            bundle.challenges.push(phrases.challenges[tier].to_string());
            bundle
                .ideal_work_environment
                .push(phrases.environment[tier].to_string());
            bundle.motivators.push(phrases.motivators[tier].to_string());
            bundle
                .compatible_roles
                .extend(phrases.roles[tier].iter().map(|role| role.to_string()));
        }
    }

    let qualifying: Vec<Dimension> = Dimension::ordered()
        .into_iter()
        .filter(|dimension| dimensions.get(*dimension) >= COMBINATION_THRESHOLD)
        .collect();
    for (index, first) in qualifying.iter().enumerate() {
        for second in &qualifying[index + 1..] {
            if let Some(strength) = combination_strength(*first, *second) {
                bundle.strengths.push(strength.to_string());
            }
        }
    }

    dedupe(&mut bundle.strengths);
    dedupe(&mut bundle.challenges);
    dedupe(&mut bundle.ideal_work_environment);
    dedupe(&mut bundle.motivators);
    dedupe(&mut bundle.compatible_roles);

    if bundle.compatible_roles.len() > MAX_ROLES {
        bundle.compatible_roles = compress_roles(dimensions);
    }

    bundle
}

fn tiers_reached(value: u32) -> usize {
    TIER_THRESHOLDS
        .iter()
        .filter(|threshold| value >= **threshold)
        .count()
}

fn dedupe(values: &mut Vec<String>) {
    let mut seen = HashSet::new();
    values.retain(|value| seen.insert(value.clone()));
}

/// Replace an overlong role list with exactly four roles chosen from the two strongest dimensions.
fn compress_roles(dimensions: &DimensionVector) -> Vec<String> {
    let ranked = dimensions.ranked();
    let (first, second) = (ranked[0].0, ranked[1].0);

    if let Some(curated) = curated_roles(first, second) {
        return curated.iter().map(|role| role.to_string()).collect();
    }

    let mut roles = vec![
        phrases_for(first).roles[0][0].to_string(),
        phrases_for(second).roles[0][0].to_string(),
    ];
    roles.extend(COMBINED_ROLES.iter().map(|role| role.to_string()));
    roles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_profile_unlocks_all_tiers() {
        let insights = synthesize_from_dimensions(&DimensionVector::new(70, 10, 10, 10));

        assert_eq!(insights.strengths.len(), 3);
        assert_eq!(insights.challenges.len(), 3);
        assert_eq!(insights.motivators[2], "Winning and visible impact");
        // Three tiers of two roles trip the cap; D/I has a curated list.
        assert_eq!(
            insights.compatible_roles,
            vec![
                "Sales Director",
                "Business Development Manager",
                "Startup Founder",
                "Marketing Manager",
            ]
        );
    }

    #[test]
    fn short_role_lists_are_kept() {
        let insights = synthesize_from_dimensions(&DimensionVector::new(40, 24, 20, 16));

        assert_eq!(
            insights.compatible_roles,
            vec![
                "Project Lead",
                "Operations Manager",
                "Sales Manager",
                "Product Owner"
            ]
        );
        assert!(insights.strengths.iter().all(|s| !s.contains("charisma")));
    }

    #[test]
    fn qualifying_pairs_add_combination_strengths() {
        let insights = synthesize_from_dimensions(&DimensionVector::new(10, 30, 30, 30));

        for expected in [
            "Builds warm, lasting working relationships",
            "Explains complex ideas in engaging ways",
            "Delivers careful, consistent, high-quality work",
        ] {
            assert!(insights.strengths.iter().any(|s| s == expected), "{expected}");
        }
    }

    #[test]
    fn uncurated_pairs_fall_back_to_generic_roles() {
        // Dominance and Steadiness lead; that pair has no curated list.
        let insights = synthesize_from_dimensions(&DimensionVector::new(38, 12, 36, 14));

        assert_eq!(
            insights.compatible_roles,
            vec![
                "Project Lead",
                "Customer Support Specialist",
                "Cross-Functional Team Member",
                "Project Liaison",
            ]
        );
    }

    #[test]
    fn role_lists_never_exceed_five_entries() {
        for vector in [
            DimensionVector::balanced(),
            DimensionVector::new(100, 0, 0, 0),
            DimensionVector::new(45, 30, 25, 0),
            DimensionVector::new(0, 0, 50, 50),
        ] {
            let roles = synthesize_from_dimensions(&vector).compatible_roles;
            assert!(roles.len() <= MAX_ROLES, "{vector:?} -> {roles:?}");
        }
    }

    #[test]
    fn only_dimensions_above_threshold_contribute() {
        let insights = synthesize_from_dimensions(&DimensionVector::new(24, 24, 24, 28));

        assert_eq!(insights.strengths, vec!["Attention to detail"]);
        assert_eq!(
            insights.compatible_roles,
            vec!["Data Analyst", "Quality Assurance Analyst"]
        );
    }
}
