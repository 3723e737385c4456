use super::super::domain::Dimension;

/// Phrases unlocked tier by tier as a dimension crosses 25, 35 and 45 percent.
pub(super) struct DimensionPhrases {
    pub strengths: [&'static str; 3],
    pub challenges: [&'static str; 3],
    pub environment: [&'static str; 3],
    pub motivators: [&'static str; 3],
    pub roles: [[&'static str; 2]; 3],
}

static DOMINANCE: DimensionPhrases = DimensionPhrases {
    strengths: [
        "Takes initiative",
        "Makes decisions quickly",
        "Drives teams toward ambitious results",
    ],
    challenges: [
        "May overlook details when moving fast",
        "Can become impatient with slower processes",
        "May come across as overly blunt under pressure",
    ],
    environment: [
        "Clear goals and measurable outcomes",
        "Autonomy to make decisions",
        "Fast-paced, competitive settings",
    ],
    motivators: [
        "Achieving goals",
        "Authority and responsibility",
        "Winning and visible impact",
    ],
    roles: [
        ["Project Lead", "Operations Manager"],
        ["Sales Manager", "Product Owner"],
        ["General Manager", "Entrepreneur"],
    ],
};

static INFLUENCE: DimensionPhrases = DimensionPhrases {
    strengths: [
        "Builds rapport easily",
        "Communicates ideas with enthusiasm",
        "Inspires and motivates others",
    ],
    challenges: [
        "May lose focus on routine tasks",
        "Can overcommit to too many people",
        "May prioritize popularity over difficult decisions",
    ],
    environment: [
        "Collaborative, social teams",
        "Opportunities to present and persuade",
        "Recognition for contributions",
    ],
    motivators: [
        "Social connection",
        "Recognition and praise",
        "Freedom to share ideas",
    ],
    roles: [
        ["Account Executive", "Recruiter"],
        ["Marketing Specialist", "Community Manager"],
        ["Public Relations Lead", "Brand Ambassador"],
    ],
};

static STEADINESS: DimensionPhrases = DimensionPhrases {
    strengths: [
        "Reliable and consistent",
        "Patient listener",
        "Creates stability for the team",
    ],
    challenges: [
        "May resist sudden change",
        "Can avoid necessary conflict",
        "May take on too much to keep others comfortable",
    ],
    environment: [
        "Predictable routines",
        "Supportive, harmonious teams",
        "Time to adjust to change",
    ],
    motivators: [
        "Security and stability",
        "Helping others",
        "Sincere appreciation",
    ],
    roles: [
        ["Customer Support Specialist", "Office Coordinator"],
        ["Human Resources Specialist", "Client Success Manager"],
        ["Patient Care Coordinator", "Team Operations Lead"],
    ],
};

static CONSCIENTIOUSNESS: DimensionPhrases = DimensionPhrases {
    strengths: [
        "Attention to detail",
        "Analytical problem solving",
        "Maintains high quality standards",
    ],
    challenges: [
        "May over-analyze before acting",
        "Can be overly critical of self and others",
        "May struggle when rules are unclear",
    ],
    environment: [
        "Clear standards and expectations",
        "Quiet time for focused work",
        "Access to accurate data",
    ],
    motivators: [
        "Doing things correctly",
        "Mastery and expertise",
        "Logical, well-defined processes",
    ],
    roles: [
        ["Data Analyst", "Quality Assurance Analyst"],
        ["Accountant", "Compliance Officer"],
        ["Research Scientist", "Systems Engineer"],
    ],
};

pub(super) fn phrases_for(dimension: Dimension) -> &'static DimensionPhrases {
    match dimension {
        Dimension::Dominance => &DOMINANCE,
        Dimension::Influence => &INFLUENCE,
        Dimension::Steadiness => &STEADINESS,
        Dimension::Conscientiousness => &CONSCIENTIOUSNESS,
    }
}

/// Cross-dimension strength for every unordered pair, keyed in canonical order.
pub(super) fn combination_strength(first: Dimension, second: Dimension) -> Option<&'static str> {
    use Dimension::*;
    let pair = if first <= second {
        (first, second)
    } else {
        (second, first)
    };
    match pair {
        (Dominance, Influence) => Some("Leads with both conviction and charisma"),
        (Dominance, Steadiness) => Some("Balances drive with dependable follow-through"),
        (Dominance, Conscientiousness) => Some("Combines decisiveness with analytical rigor"),
        (Influence, Steadiness) => Some("Builds warm, lasting working relationships"),
        (Influence, Conscientiousness) => Some("Explains complex ideas in engaging ways"),
        (Steadiness, Conscientiousness) => Some("Delivers careful, consistent, high-quality work"),
        _ => None,
    }
}

/// Hand-picked role lists for the strongest dimension pairs.
pub(super) fn curated_roles(first: Dimension, second: Dimension) -> Option<[&'static str; 4]> {
    use Dimension::*;
    let pair = if first <= second {
        (first, second)
    } else {
        (second, first)
    };
    match pair {
        (Dominance, Influence) => Some([
            "Sales Director",
            "Business Development Manager",
            "Startup Founder",
            "Marketing Manager",
        ]),
        (Dominance, Conscientiousness) => Some([
            "Engineering Manager",
            "Strategy Consultant",
            "Operations Director",
            "Financial Controller",
        ]),
        (Influence, Steadiness) => Some([
            "Customer Success Manager",
            "Human Resources Business Partner",
            "Training Coordinator",
            "Community Manager",
        ]),
        (Steadiness, Conscientiousness) => Some([
            "Project Coordinator",
            "Quality Assurance Specialist",
            "Operations Analyst",
            "Administrative Manager",
        ]),
        _ => None,
    }
}

pub(super) const COMBINED_ROLES: [&str; 2] = ["Cross-Functional Team Member", "Project Liaison"];
