use serde::{Deserialize, Serialize};

use super::catalog::{ArchetypeCatalog, ArchetypeEntry};
use super::domain::BehavioralProfile;
use super::insights::{synthesize_insights, InsightBundle};
use super::viewpoint::{render_list, render_string, Render, ViewerContext};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeStrength {
    pub title: String,
    pub description: String,
}

/// Presentation-ready narrative for one profile: archetype content first, with
/// dimension insights filling any list the catalog leaves empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeBundle {
    pub archetype: String,
    pub headline: String,
    pub summary: String,
    pub description: String,
    pub work_style: String,
    pub key_strengths: Vec<NarrativeStrength>,
    pub communication_style: String,
    pub decision_making_style: String,
    pub ideal_environment: String,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub ideal_work_environment: Vec<String>,
    pub motivators: Vec<String>,
    pub compatible_roles: Vec<String>,
}

impl NarrativeBundle {
    pub fn compose(profile: &BehavioralProfile) -> Self {
        let entry = ArchetypeCatalog::standard().resolve(profile.archetype);
        Self::from_parts(&entry, synthesize_insights(profile))
    }

    pub(crate) fn from_parts(entry: &ArchetypeEntry, insights: InsightBundle) -> Self {
        Self {
            archetype: entry.name.to_string(),
            headline: entry.headline.to_string(),
            summary: entry.summary.to_string(),
            description: entry.description.to_string(),
            work_style: entry.style.to_string(),
            key_strengths: entry
                .key_strengths
                .iter()
                .map(|strength| NarrativeStrength {
                    title: strength.title.to_string(),
                    description: strength.description.to_string(),
                })
                .collect(),
            communication_style: entry.communication_style.to_string(),
            decision_making_style: entry.decision_making_style.to_string(),
            ideal_environment: entry.ideal_environment.to_string(),
            strengths: prefer_catalog(&entry.work_style_strengths, insights.strengths),
            challenges: insights.challenges,
            ideal_work_environment: insights.ideal_work_environment,
            motivators: prefer_catalog(&entry.motivators, insights.motivators),
            compatible_roles: prefer_catalog(&entry.compatible_roles, insights.compatible_roles),
        }
    }
}

fn prefer_catalog(catalog: &[&'static str], fallback: Vec<String>) -> Vec<String> {
    if catalog.is_empty() {
        fallback
    } else {
        catalog.iter().map(|value| value.to_string()).collect()
    }
}

impl Render for NarrativeBundle {
    fn render(&self, viewer: &ViewerContext) -> Self {
        Self {
            archetype: self.archetype.clone(),
            headline: self.headline.clone(),
            summary: render_string(&self.summary, viewer),
            description: render_string(&self.description, viewer),
            work_style: render_string(&self.work_style, viewer),
            key_strengths: self
                .key_strengths
                .iter()
                .map(|strength| NarrativeStrength {
                    title: strength.title.clone(),
                    description: render_string(&strength.description, viewer),
                })
                .collect(),
            communication_style: render_string(&self.communication_style, viewer),
            decision_making_style: render_string(&self.decision_making_style, viewer),
            ideal_environment: render_string(&self.ideal_environment, viewer),
            strengths: render_list(&self.strengths, viewer),
            challenges: render_list(&self.challenges, viewer),
            ideal_work_environment: render_list(&self.ideal_work_environment, viewer),
            motivators: render_list(&self.motivators, viewer),
            compatible_roles: self.compatible_roles.clone(),
        }
    }
}
