use crate::infra::{
    read_requirement, read_responses, InMemoryNotificationPublisher, InMemoryProfileRepository,
};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use talent_fit::config::AssessmentSettings;
use talent_fit::error::AppError;
use talent_fit::workflows::assessment::{
    adapt_responses, compute_profile, render_for_viewer, synthesize_insights, AssessmentService,
    BehavioralProfile, CandidateId, CompatibilityReport, CompatibilityScorer, Dimension,
    InsightBundle, JobBehavioralRequirement, NarrativeBundle, Pronoun, QuestionBank, RawResponse,
    Response, ViewerContext,
};

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON array of responses (indexed or legacy labeled)
    #[arg(long)]
    pub(crate) responses: PathBuf,
    /// CSV question bank the responses refer to (defaults to the built-in survey)
    #[arg(long)]
    pub(crate) question_bank: Option<PathBuf>,
    /// Render the narrative in the third person using this name
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Pronoun for third-person rendering: he, she, or they
    #[arg(long, value_parser = crate::infra::parse_pronoun)]
    pub(crate) pronoun: Option<Pronoun>,
    /// JSON job behavioral requirement to score the profile against
    #[arg(long)]
    pub(crate) job: Option<PathBuf>,
    /// Emit machine-readable JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Show recruiter-facing narrative with this pronoun
    #[arg(long, value_parser = crate::infra::parse_pronoun)]
    pub(crate) pronoun: Option<Pronoun>,
    /// Skip the job compatibility portion of the demo
    #[arg(long)]
    pub(crate) skip_compatibility: bool,
}

#[derive(Debug, Serialize)]
struct AssessmentOutput {
    profile: BehavioralProfile,
    insights: InsightBundle,
    narrative: NarrativeBundle,
    #[serde(skip_serializing_if = "Option::is_none")]
    compatibility: Option<CompatibilityReport>,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        responses,
        question_bank,
        name,
        pronoun,
        job,
        json,
    } = args;

    let bank = AssessmentSettings { question_bank }.load_question_bank()?;
    let raw = read_responses(&responses)?;
    let canonical = adapt_responses(&raw, &bank);
    let profile = compute_profile(&canonical, &bank);

    let viewer = viewer_for(name, pronoun);
    let narrative = render_for_viewer(&NarrativeBundle::compose(&profile), &viewer);
    let insights = synthesize_insights(&profile);
    let compatibility = match job {
        Some(path) => {
            let requirement = read_requirement(&path)?;
            Some(CompatibilityScorer::default().evaluate(&profile, &requirement))
        }
        None => None,
    };

    let output = AssessmentOutput {
        profile: render_for_viewer(&profile, &viewer),
        insights,
        narrative,
        compatibility,
    };

    if json {
        let rendered = serde_json::to_string_pretty(&output)
            .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
        println!("{rendered}");
    } else {
        print_assessment(&output, raw.len(), canonical.len());
    }

    Ok(())
}

fn viewer_for(name: Option<String>, pronoun: Option<Pronoun>) -> ViewerContext {
    if name.is_none() && pronoun.is_none() {
        return ViewerContext::subject();
    }
    ViewerContext::third_party(name.unwrap_or_default(), pronoun.unwrap_or_default())
}

fn print_assessment(output: &AssessmentOutput, submitted: usize, scored: usize) {
    let profile = &output.profile;
    println!("Behavioral profile ({scored} of {submitted} responses scored)");
    println!("- Archetype: {} (secondary trait: {})", profile.archetype, profile.secondary_trait);
    println!("- Dimensions: {}", dimension_line(profile));
    println!("- Team role: {} | Leadership: {}", profile.styles.team_role, profile.styles.leadership_style);

    let narrative = &output.narrative;
    println!("\n{}: {}", narrative.archetype, narrative.headline);
    println!("{}", narrative.description);
    println!("\nKey strengths:");
    for strength in &narrative.key_strengths {
        println!("  - {}: {}", strength.title, strength.description);
    }
    print_list("Challenges", &narrative.challenges);
    print_list("Motivators", &narrative.motivators);
    print_list("Compatible roles", &narrative.compatible_roles);

    if let Some(report) = &output.compatibility {
        println!("\nJob compatibility: {}/100", report.score);
        for component in &report.components {
            println!(
                "  - {:?}: {:.1} pts ({})",
                component.factor, component.points, component.notes
            );
        }
    }
}

fn print_list(heading: &str, values: &[String]) {
    if values.is_empty() {
        return;
    }
    println!("\n{heading}:");
    for value in values {
        println!("  - {value}");
    }
}

fn dimension_line(profile: &BehavioralProfile) -> String {
    Dimension::ordered()
        .iter()
        .map(|dimension| format!("{} {}%", dimension.code(), profile.dimensions.get(*dimension)))
        .collect::<Vec<_>>()
        .join(" | ")
}

struct SampleCandidate {
    id: &'static str,
    name: &'static str,
    answers: [usize; 12],
}

const SAMPLE_CANDIDATES: [SampleCandidate; 3] = [
    SampleCandidate {
        id: "cand-jordan",
        name: "Jordan",
        answers: [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0],
    },
    SampleCandidate {
        id: "cand-riley",
        name: "Riley",
        answers: [1, 1, 2, 1, 1, 2, 1, 2, 1, 1, 2, 1],
    },
    SampleCandidate {
        id: "cand-casey",
        name: "Casey",
        answers: [3, 2, 3, 3, 2, 3, 3, 2, 3, 3, 3, 2],
    },
];

fn sample_requirement() -> JobBehavioralRequirement {
    JobBehavioralRequirement {
        accepted_archetypes: vec![
            "Results Dynamo".to_string(),
            "Inspiring Connector".to_string(),
        ],
        work_style: "fast paced outcomes with autonomy".to_string(),
        team_dynamics: "small team that decides quickly".to_string(),
        communication_needs: "direct and brief updates".to_string(),
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        pronoun,
        skip_compatibility,
    } = args;

    let bank = QuestionBank::standard();
    let repository = Arc::new(InMemoryProfileRepository::default());
    let notifications = Arc::new(InMemoryNotificationPublisher::default());
    let service = AssessmentService::new(repository, notifications.clone(), bank.clone());
    let requirement = sample_requirement();

    println!("Talent fit demo ({} question survey)", bank.len());

    for candidate in &SAMPLE_CANDIDATES {
        let responses: Vec<RawResponse> = bank
            .questions()
            .iter()
            .zip(candidate.answers)
            .map(|(question, option)| RawResponse::from(Response::new(question.id.clone(), option)))
            .collect();

        let id = CandidateId(candidate.id.to_string());
        let record = service.complete(id.clone(), &responses)?;
        println!(
            "\n{} -> {} ({})",
            candidate.name,
            record.profile.archetype,
            dimension_line(&record.profile)
        );

        let viewer = ViewerContext::third_party(candidate.name, pronoun.unwrap_or_default());
        let narrative = service.narrative(&id, &viewer)?;
        println!("  {}", narrative.description);

        let insights = service.insights(&id)?;
        if let Some(strength) = insights.strengths.first() {
            println!("  Top insight: {strength}");
        }

        if !skip_compatibility {
            let report = service.compatibility(&id, &requirement)?;
            println!("  Fit for sample sales lead role: {}/100", report.score);
        }
    }

    println!("\nStored profiles:");
    for record in service.list_profiles(SAMPLE_CANDIDATES.len())? {
        let summary = record.summary_view();
        println!("  {} -> {}", summary.candidate_id.0, summary.archetype);
    }

    println!(
        "\n{} assessment notices published",
        notifications.events().len()
    );
    Ok(())
}
