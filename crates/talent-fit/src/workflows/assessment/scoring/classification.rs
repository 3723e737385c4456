use serde::{Deserialize, Serialize};

use super::super::catalog::Archetype;
use super::super::domain::{Dimension, DimensionVector};

const PURE_DOMINANT: u32 = 60;
const PURE_LEADING: u32 = 45;
const PURE_SECONDARY_CEILING: u32 = 20;
const COMBINATION_PRIMARY: u32 = 35;
const COMBINATION_SECONDARY: u32 = 25;
const BALANCED_PRIMARY_CEILING: u32 = 35;
const BALANCED_SPREAD: u32 = 10;

/// Which rule produced the archetype, kept for audit logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationRule {
    Pure,
    Combination,
    Balanced,
    Fallback,
}

/// Classifier output: the archetype plus the ranked dimensions behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub archetype: Archetype,
    pub primary: Dimension,
    pub secondary: Dimension,
    pub rule: ClassificationRule,
}

impl Classification {
    /// Human-readable name of the secondary dimension.
    pub fn secondary_trait(&self) -> &'static str {
        self.secondary.label()
    }
}

/// Apply the ordered classification rules to normalized percentages. First match wins.
pub fn classify(dimensions: &DimensionVector) -> Classification {
    let ranked = dimensions.ranked();
    let (primary, primary_value) = ranked[0];
    let (secondary, secondary_value) = ranked[1];

    let (archetype, rule) = select_archetype(primary, primary_value, secondary, secondary_value);

    Classification {
        archetype,
        primary,
        secondary,
        rule,
    }
}

fn select_archetype(
    primary: Dimension,
    primary_value: u32,
    secondary: Dimension,
    secondary_value: u32,
) -> (Archetype, ClassificationRule) {
    if primary_value > PURE_DOMINANT
        || (primary_value > PURE_LEADING && secondary_value < PURE_SECONDARY_CEILING)
    {
        return (Archetype::pure(primary), ClassificationRule::Pure);
    }

    if primary_value > COMBINATION_PRIMARY && secondary_value > COMBINATION_SECONDARY {
        if let Some(archetype) = Archetype::combination(primary, secondary) {
            return (archetype, ClassificationRule::Combination);
        }
    }

    if primary_value <= BALANCED_PRIMARY_CEILING
        || primary_value.saturating_sub(secondary_value) < BALANCED_SPREAD
    {
        return (Archetype::balanced(), ClassificationRule::Balanced);
    }

    (Archetype::balanced(), ClassificationRule::Fallback)
}
