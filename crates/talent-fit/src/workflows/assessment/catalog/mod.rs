//! Archetype catalog: the fixed set of personality classifications and their narrative content.

mod entries;

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::domain::Dimension;

/// Discrete personality classification selected by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Archetype {
    #[serde(rename = "Results Dynamo")]
    ResultsDynamo,
    #[serde(rename = "Inspiring Connector")]
    InspiringConnector,
    #[serde(rename = "Steady Supporter")]
    SteadySupporter,
    #[serde(rename = "Precision Analyst")]
    PrecisionAnalyst,
    #[serde(rename = "Ambitious Influencer")]
    AmbitiousInfluencer,
    #[serde(rename = "Persuasive Motivator")]
    PersuasiveMotivator,
    #[serde(rename = "Steadfast Achiever")]
    SteadfastAchiever,
    #[serde(rename = "Dependable Driver")]
    DependableDriver,
    #[serde(rename = "Strategic Challenger")]
    StrategicChallenger,
    #[serde(rename = "Decisive Architect")]
    DecisiveArchitect,
    #[serde(rename = "Supportive Encourager")]
    SupportiveEncourager,
    #[serde(rename = "Harmonious Collaborator")]
    HarmoniousCollaborator,
    #[serde(rename = "Creative Strategist")]
    CreativeStrategist,
    #[serde(rename = "Insightful Communicator")]
    InsightfulCommunicator,
    #[serde(rename = "Methodical Coordinator")]
    MethodicalCoordinator,
    #[serde(rename = "Versatile Adapter")]
    VersatileAdapter,
}

impl Archetype {
    pub const fn all() -> [Self; 16] {
        [
            Self::ResultsDynamo,
            Self::InspiringConnector,
            Self::SteadySupporter,
            Self::PrecisionAnalyst,
            Self::AmbitiousInfluencer,
            Self::PersuasiveMotivator,
            Self::SteadfastAchiever,
            Self::DependableDriver,
            Self::StrategicChallenger,
            Self::DecisiveArchitect,
            Self::SupportiveEncourager,
            Self::HarmoniousCollaborator,
            Self::CreativeStrategist,
            Self::InsightfulCommunicator,
            Self::MethodicalCoordinator,
            Self::VersatileAdapter,
        ]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::ResultsDynamo => "Results Dynamo",
            Self::InspiringConnector => "Inspiring Connector",
            Self::SteadySupporter => "Steady Supporter",
            Self::PrecisionAnalyst => "Precision Analyst",
            Self::AmbitiousInfluencer => "Ambitious Influencer",
            Self::PersuasiveMotivator => "Persuasive Motivator",
            Self::SteadfastAchiever => "Steadfast Achiever",
            Self::DependableDriver => "Dependable Driver",
            Self::StrategicChallenger => "Strategic Challenger",
            Self::DecisiveArchitect => "Decisive Architect",
            Self::SupportiveEncourager => "Supportive Encourager",
            Self::HarmoniousCollaborator => "Harmonious Collaborator",
            Self::CreativeStrategist => "Creative Strategist",
            Self::InsightfulCommunicator => "Insightful Communicator",
            Self::MethodicalCoordinator => "Methodical Coordinator",
            Self::VersatileAdapter => "Versatile Adapter",
        }
    }

    /// The catalog's fallback for any unmatched classification.
    pub const fn balanced() -> Self {
        Self::VersatileAdapter
    }

    /// Archetype describing a profile dominated by a single dimension.
    pub const fn pure(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Dominance => Self::ResultsDynamo,
            Dimension::Influence => Self::InspiringConnector,
            Dimension::Steadiness => Self::SteadySupporter,
            Dimension::Conscientiousness => Self::PrecisionAnalyst,
        }
    }

    /// Directional (primary, secondary) combination table.
    ///
    /// (Steadiness, Conscientiousness) and its reverse both land on
    /// `MethodicalCoordinator`.
    pub const fn combination(primary: Dimension, secondary: Dimension) -> Option<Self> {
        use Dimension::*;
        match (primary, secondary) {
            (Dominance, Influence) => Some(Self::AmbitiousInfluencer),
            (Influence, Dominance) => Some(Self::PersuasiveMotivator),
            (Dominance, Steadiness) => Some(Self::SteadfastAchiever),
            (Steadiness, Dominance) => Some(Self::DependableDriver),
            (Dominance, Conscientiousness) => Some(Self::StrategicChallenger),
            (Conscientiousness, Dominance) => Some(Self::DecisiveArchitect),
            (Influence, Steadiness) => Some(Self::SupportiveEncourager),
            (Steadiness, Influence) => Some(Self::HarmoniousCollaborator),
            (Influence, Conscientiousness) => Some(Self::CreativeStrategist),
            (Conscientiousness, Influence) => Some(Self::InsightfulCommunicator),
            (Steadiness, Conscientiousness) => Some(Self::MethodicalCoordinator),
            (Conscientiousness, Steadiness) => Some(Self::MethodicalCoordinator),
            _ => None,
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Self> {
        let needle = name.trim();
        Self::all()
            .into_iter()
            .find(|archetype| archetype.name().eq_ignore_ascii_case(needle))
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Keyed strength headline with its second-person explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyStrength {
    pub title: &'static str,
    pub description: &'static str,
}

/// Narrative content stored for an archetype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchetypeEntry {
    pub name: Cow<'static, str>,
    pub headline: Cow<'static, str>,
    pub summary: &'static str,
    pub description: &'static str,
    pub style: &'static str,
    pub key_strengths: Vec<KeyStrength>,
    pub communication_style: &'static str,
    pub decision_making_style: &'static str,
    pub motivators: Vec<&'static str>,
    pub work_style_strengths: Vec<&'static str>,
    pub ideal_environment: &'static str,
    pub compatible_roles: Vec<&'static str>,
}

static STANDARD_CATALOG: LazyLock<ArchetypeCatalog> = LazyLock::new(ArchetypeCatalog::build);

/// Read-only archetype table, built once per process.
#[derive(Debug)]
pub struct ArchetypeCatalog {
    entries: Vec<(Archetype, ArchetypeEntry)>,
}

impl ArchetypeCatalog {
    pub fn standard() -> &'static Self {
        &STANDARD_CATALOG
    }

    fn build() -> Self {
        Self {
            entries: entries::standard_entries(),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &ArchetypeEntry> {
        self.entries.iter().map(|(_, entry)| entry)
    }

    pub fn get(&self, archetype: Archetype) -> Option<&ArchetypeEntry> {
        self.entries
            .iter()
            .find(|(key, _)| *key == archetype)
            .map(|(_, entry)| entry)
    }

    /// Content for a classified archetype. Falls back to the synthetic entry so it never fails.
    pub fn resolve(&self, archetype: Archetype) -> ArchetypeEntry {
        match self.get(archetype) {
            Some(entry) => entry.clone(),
            None => synthetic_entry(archetype.name()),
        }
    }

    /// Content for an externally supplied identifier such as a persisted archetype name.
    pub fn resolve_name(&self, identifier: &str) -> ArchetypeEntry {
        match Archetype::from_name(identifier).and_then(|archetype| self.get(archetype)) {
            Some(entry) => entry.clone(),
            None => {
                tracing::debug!(identifier, "archetype missing from catalog; using synthetic entry");
                synthetic_entry(identifier)
            }
        }
    }
}

fn synthetic_entry(identifier: &str) -> ArchetypeEntry {
    ArchetypeEntry {
        name: Cow::Owned(identifier.to_string()),
        headline: Cow::Owned(identifier.to_string()),
        summary: "A balanced professional who adapts to what each situation needs.",
        description: "",
        style: "",
        key_strengths: vec![
            KeyStrength {
                title: "Adaptability",
                description: "",
            },
            KeyStrength {
                title: "Balance",
                description: "",
            },
            KeyStrength {
                title: "Versatility",
                description: "",
            },
        ],
        communication_style: "",
        decision_making_style: "",
        motivators: Vec::new(),
        work_style_strengths: Vec::new(),
        ideal_environment: "",
        compatible_roles: Vec::new(),
    }
}
