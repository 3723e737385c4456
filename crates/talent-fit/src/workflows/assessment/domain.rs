use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::Archetype;

/// Identifier wrapper for the candidate who completed an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateId(pub String);

/// Behavioral axes scored by the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Dominance,
    Influence,
    Steadiness,
    Conscientiousness,
}

impl Dimension {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Dominance,
            Self::Influence,
            Self::Steadiness,
            Self::Conscientiousness,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dominance => "Dominance",
            Self::Influence => "Influence",
            Self::Steadiness => "Steadiness",
            Self::Conscientiousness => "Conscientiousness",
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Dominance => "D",
            Self::Influence => "I",
            Self::Steadiness => "S",
            Self::Conscientiousness => "C",
        }
    }
}

/// Four-axis score vector. Raw option weights and normalized percentages share this shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimensionVector {
    pub dominance: u32,
    pub influence: u32,
    pub steadiness: u32,
    pub conscientiousness: u32,
}

impl DimensionVector {
    pub const fn new(dominance: u32, influence: u32, steadiness: u32, conscientiousness: u32) -> Self {
        Self {
            dominance,
            influence,
            steadiness,
            conscientiousness,
        }
    }

    /// Neutral vector returned when a response set carries no signal.
    pub const fn balanced() -> Self {
        Self::new(25, 25, 25, 25)
    }

    pub const fn get(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Dominance => self.dominance,
            Dimension::Influence => self.influence,
            Dimension::Steadiness => self.steadiness,
            Dimension::Conscientiousness => self.conscientiousness,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: u32) {
        match dimension {
            Dimension::Dominance => self.dominance = value,
            Dimension::Influence => self.influence = value,
            Dimension::Steadiness => self.steadiness = value,
            Dimension::Conscientiousness => self.conscientiousness = value,
        }
    }

    /// Element-wise accumulation of another vector into this one.
    pub fn accumulate(&mut self, other: &DimensionVector) {
        for dimension in Dimension::ordered() {
            let value = self.get(dimension).saturating_add(other.get(dimension));
            self.set(dimension, value);
        }
    }

    pub fn total(&self) -> u64 {
        Dimension::ordered()
            .iter()
            .map(|dimension| u64::from(self.get(*dimension)))
            .sum()
    }

    /// Dimensions sorted from strongest to weakest; ties keep the D, I, S, C order.
    pub fn ranked(&self) -> [(Dimension, u32); 4] {
        let mut ranked = Dimension::ordered().map(|dimension| (dimension, self.get(dimension)));
        ranked.sort_by(|left, right| right.1.cmp(&left.1));
        ranked
    }
}

/// Selectable answer carrying its per-dimension weight contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub label: String,
    pub weights: DimensionVector,
}

/// Immutable survey question with three or four ordered options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<QuestionOption>,
}

/// Canonical (question, selected option) pair consumed by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub question_id: String,
    pub option_index: usize,
}

impl Response {
    pub fn new(question_id: impl Into<String>, option_index: usize) -> Self {
        Self {
            question_id: question_id.into(),
            option_index,
        }
    }
}

/// Ordered responses for one assessment attempt.
pub type ResponseSet = Vec<Response>;

/// Narrative style descriptors attached to a computed profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleBundle {
    pub work_style: String,
    pub communication_style: String,
    pub decision_making_style: String,
    pub stress_response: String,
    pub team_role: String,
    pub leadership_style: String,
}

/// Result of scoring a response set. Never mutated once computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehavioralProfile {
    pub dimensions: DimensionVector,
    pub archetype: Archetype,
    pub secondary_trait: String,
    pub styles: StyleBundle,
    pub completed_at: DateTime<Utc>,
}

impl BehavioralProfile {
    pub fn primary_dimension(&self) -> Dimension {
        self.dimensions.ranked()[0].0
    }

    pub fn secondary_dimension(&self) -> Dimension {
        self.dimensions.ranked()[1].0
    }
}
