//! Second-person to third-person rewriting for narrative shown to someone other than the candidate.
//!
//! Contractions and possessives are word-bounded regex replacements. Bare "you" goes
//! through a token walk that decides subject or object from the neighbouring words and
//! conjugates the verbs a singular subject governs, including verbs coordinated with
//! the first one ("works fast, focuses on outcomes, and prefers autonomy").

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, NoExpand, Regex};
use serde::{Deserialize, Serialize};

use super::domain::{BehavioralProfile, StyleBundle};

const PLACEHOLDER_NAME: &str = "This person";

static CONTRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(You|you)['’](re|ve|ll|d)\b").expect("contraction pattern"));
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z]+(?:[-'’][A-Za-z]+)*|[^A-Za-z]+").expect("token pattern")
});
static REFLEXIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(Y|y)ourself\b").expect("reflexive pattern"));
static STANDALONE_POSSESSIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(Y|y)ours\b").expect("standalone possessive pattern"));
static CAPITAL_YOUR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bYour\b").expect("capital your pattern"));
static LOWER_YOUR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\byour\b").expect("lower your pattern"));
static ANY_CASE_YOU: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\byou(?:rselves|rself|rs|r|['’](?:re|ve|ll|d))?\b").expect("any case pattern")
});

/// Words after which "you" is an object: prepositions and verbs that take a person.
const OBJECT_CONTEXT: &[&str] = &[
    "about", "against", "alongside", "among", "around", "at", "behind", "beside", "between",
    "by", "for", "from", "into", "like", "near", "of", "on", "onto", "over", "to", "toward",
    "towards", "under", "upon", "with", "without",
    "allow", "allows", "ask", "asks", "bring", "brings", "brought", "call", "calls", "challenge",
    "challenges", "drive", "drives", "encourage", "encourages", "energize", "energizes",
    "frustrate", "frustrates", "get", "gets", "give", "gives", "gave", "given", "guide",
    "guides", "help", "helps", "helped", "inspire", "inspires", "join", "joins", "keep",
    "keeps", "kept", "lead", "leads", "leave", "leaves", "let", "lets", "make", "makes",
    "made", "motivate", "motivates", "need", "needs", "offer", "offers", "pay", "pays",
    "push", "pushes", "put", "puts", "remind", "reminds", "reward", "rewards", "see", "sees",
    "send", "sends", "set", "sets", "show", "shows", "suit", "suits", "support", "supports",
    "take", "takes", "tell", "tells", "thank", "thanks", "trust", "trusts", "want", "wants",
];

/// Words that open a clause, so a following "you" stays the subject.
const CLAUSE_OPENERS: &[&str] = &[
    "although", "and", "because", "but", "how", "if", "once", "or", "since", "so", "that",
    "then", "though", "unless", "until", "what", "when", "whenever", "where", "wherever",
    "whether", "while", "yet",
];

const CONJUNCTIONS: &[&str] = &["and", "but", "or", "then", "yet"];

const RELATIVIZERS: &[&str] = &["that", "which", "who", "whom", "whose", "where"];

/// Base verbs recognised when coordinated with an already conjugated verb.
const COORDINATED_VERBS: &[&str] = &[
    "act", "adapt", "adjust", "advocate", "align", "analyze", "are", "ask", "avoid", "back",
    "become", "bring", "build", "catch", "challenge", "check", "combine", "commit",
    "communicate", "connect", "consult", "create", "decide", "defend", "deliver", "design",
    "dig", "do", "double-check", "drive", "explain", "expose", "find", "focus", "follow",
    "frame", "generate", "get", "give", "go", "ground", "have", "help", "hold", "keep",
    "launch", "lead", "lift", "listen", "maintain", "make", "move", "paint", "prefer",
    "produce", "push", "raise", "rally", "read", "resolve", "respond", "see", "seek", "sense",
    "set", "share", "smooth", "stay", "step", "take", "talk", "test", "thrive", "track",
    "translate", "trust", "turn", "understand", "use", "value", "verify", "weigh", "work",
];

/// Finite forms and modals that never take a third-person ending.
const UNINFLECTED: &[&str] = &[
    "am", "can", "could", "did", "does", "had", "has", "is", "may", "might", "must", "shall",
    "should", "was", "were", "will", "would",
];

const ADVERBS: &[&str] = &[
    "also", "always", "just", "never", "often", "only", "rarely", "sometimes", "still", "then",
    "usually",
];

/// Verbs that end in "ly" and must not be mistaken for adverbs.
const LY_VERBS: &[&str] = &[
    "ally", "apply", "comply", "fly", "imply", "multiply", "rally", "rely", "reply", "supply",
    "tally",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pronoun {
    He,
    She,
    #[default]
    They,
}

impl Pronoun {
    pub const fn subject(self) -> &'static str {
        match self {
            Self::He => "he",
            Self::She => "she",
            Self::They => "they",
        }
    }

    pub const fn objective(self) -> &'static str {
        match self {
            Self::He => "him",
            Self::She => "her",
            Self::They => "them",
        }
    }

    pub const fn possessive(self) -> &'static str {
        match self {
            Self::He => "his",
            Self::She => "her",
            Self::They => "their",
        }
    }

    /// Possessive used without a noun ("the call is hers").
    pub const fn standalone_possessive(self) -> &'static str {
        match self {
            Self::He => "his",
            Self::She => "hers",
            Self::They => "theirs",
        }
    }

    pub const fn reflexive(self) -> &'static str {
        match self {
            Self::He => "himself",
            Self::She => "herself",
            Self::They => "themselves",
        }
    }

    const fn is_plural(self) -> bool {
        matches!(self, Self::They)
    }
}

/// Who is reading the narrative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewerRole {
    /// The candidate reading their own results.
    #[default]
    #[serde(rename = "self", alias = "subject", alias = "candidate")]
    Subject,
    #[serde(alias = "recruiter", alias = "employer")]
    ThirdParty,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerContext {
    pub role: ViewerRole,
    #[serde(default)]
    pub subject_name: Option<String>,
    #[serde(default)]
    pub pronoun: Pronoun,
}

impl ViewerContext {
    pub fn subject() -> Self {
        Self::default()
    }

    pub fn third_party(subject_name: impl Into<String>, pronoun: Pronoun) -> Self {
        Self {
            role: ViewerRole::ThirdParty,
            subject_name: Some(subject_name.into()),
            pronoun,
        }
    }

    pub fn is_subject(&self) -> bool {
        self.role == ViewerRole::Subject
    }

    /// Display name for third-person text; blank or missing names become a placeholder.
    pub fn display_name(&self) -> &str {
        self.subject_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(PLACEHOLDER_NAME)
    }
}

/// Rewrite second-person narrative for the given viewer. The candidate's own view is
/// returned untouched.
pub fn transform_text<'a>(text: &'a str, viewer: &ViewerContext) -> Cow<'a, str> {
    if viewer.is_subject() {
        return Cow::Borrowed(text);
    }

    let name = viewer.display_name();
    let pronoun = viewer.pronoun;

    let text = CONTRACTION.replace_all(text, |caps: &Captures<'_>| {
        let (who, plural) = if &caps[1] == "You" {
            (name, false)
        } else {
            (pronoun.subject(), pronoun.is_plural())
        };
        format!("{who} {}", contracted_verb(&caps[2], plural))
    });
    let text = rewrite_you(&text, name, pronoun);
    let text = REFLEXIVE.replace_all(&text, |caps: &Captures<'_>| {
        if &caps[1] == "Y" {
            capitalize(pronoun.reflexive())
        } else {
            pronoun.reflexive().to_string()
        }
    });
    let text = STANDALONE_POSSESSIVE.replace_all(&text, |caps: &Captures<'_>| {
        if &caps[1] == "Y" {
            capitalize(pronoun.standalone_possessive())
        } else {
            pronoun.standalone_possessive().to_string()
        }
    });
    let possessive_name = format!("{name}'s");
    let text = CAPITAL_YOUR.replace_all(&text, NoExpand(possessive_name.as_str()));
    let text = LOWER_YOUR.replace_all(&text, NoExpand(pronoun.possessive()));
    let text = collapse_repeated_name(&text, name);

    // Anything left is an unusual casing such as "YOUR" or "YOU'RE".
    let text = ANY_CASE_YOU.replace_all(&text, |caps: &Captures<'_>| {
        let matched = &caps[0];
        let lower = matched.to_lowercase();
        let replacement = match lower.as_str() {
            "you" => pronoun.subject().to_string(),
            "your" => pronoun.possessive().to_string(),
            "yours" => pronoun.standalone_possessive().to_string(),
            "yourself" | "yourselves" => pronoun.reflexive().to_string(),
            contraction => {
                let suffix = contraction
                    .trim_start_matches("you")
                    .trim_start_matches(['\'', '’']);
                format!(
                    "{} {}",
                    pronoun.subject(),
                    contracted_verb(suffix, pronoun.is_plural())
                )
            }
        };
        match_case(matched, replacement)
    });

    Cow::Owned(text.into_owned())
}

fn contracted_verb(suffix: &str, plural: bool) -> &'static str {
    match (suffix, plural) {
        ("re", false) => "is",
        ("re", true) => "are",
        ("ve", false) => "has",
        ("ve", true) => "have",
        ("ll", _) => "will",
        _ => "would",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    Comma,
    Conjunction,
}

/// Tracks the predicate of a singular subject so coordinated verbs agree with it.
#[derive(Debug, Default)]
struct Predicate {
    link: Option<Link>,
    in_relative: bool,
}

impl Predicate {
    fn punctuation(&mut self, token: &str) {
        self.link = token.contains(',').then_some(Link::Comma);
    }

    /// Returns the conjugated form when `word` continues the subject's predicate.
    fn word(&mut self, word: &str) -> Option<String> {
        if let Some(link) = self.link {
            // Inside a relative clause only a comma-led verb returns to the subject.
            if COORDINATED_VERBS.contains(&word) && (link == Link::Comma || !self.in_relative) {
                if let Some(verb) = third_person(word) {
                    self.link = None;
                    self.in_relative = false;
                    return Some(verb);
                }
            }
        }

        if CONJUNCTIONS.contains(&word) {
            if self.link != Some(Link::Comma) {
                self.link = Some(Link::Conjunction);
            }
        } else if self.link.is_none() || !is_adverb(word) {
            self.link = None;
            if RELATIVIZERS.contains(&word) {
                self.in_relative = true;
            }
        }
        None
    }
}

/// Replace bare "You"/"you" with the name or pronoun and make the verbs agree.
fn rewrite_you(text: &str, name: &str, pronoun: Pronoun) -> String {
    let tokens: Vec<&str> = TOKEN.find_iter(text).map(|token| token.as_str()).collect();
    let mut rewritten = String::with_capacity(text.len() + name.len());
    let mut previous_word: Option<&str> = None;
    let mut awaiting_verb: Option<bool> = None;
    let mut predicate: Option<Predicate> = None;

    for (index, &token) in tokens.iter().enumerate() {
        if !is_word(token) {
            if !token.trim().is_empty() {
                previous_word = None;
                awaiting_verb = None;
                if token.contains(['.', ';', ':', '!', '?']) {
                    predicate = None;
                } else if let Some(state) = predicate.as_mut() {
                    state.punctuation(token);
                }
            }
            rewritten.push_str(token);
            continue;
        }

        if token == "You" || token == "you" {
            let next = tokens.get(index + 1).copied();
            if token == "you" && is_object_position(previous_word, next) {
                rewritten.push_str(pronoun.objective());
            } else {
                let (subject, singular) = if token == "You" {
                    (name, true)
                } else {
                    (pronoun.subject(), !pronoun.is_plural())
                };
                rewritten.push_str(subject);
                awaiting_verb = Some(singular);
                predicate = None;
            }
            previous_word = Some(token);
            continue;
        }
        previous_word = Some(token);

        if let Some(singular) = awaiting_verb {
            if is_adverb(token) {
                rewritten.push_str(token);
                continue;
            }
            awaiting_verb = None;
            match singular.then(|| third_person(token)).flatten() {
                Some(verb) => {
                    rewritten.push_str(&verb);
                    predicate = Some(Predicate::default());
                }
                None => rewritten.push_str(token),
            }
            continue;
        }

        match predicate.as_mut().and_then(|state| state.word(token)) {
            Some(verb) => rewritten.push_str(&verb),
            None => rewritten.push_str(token),
        }
    }

    rewritten
}

fn is_word(token: &str) -> bool {
    token.starts_with(|c: char| c.is_ascii_alphabetic())
}

fn is_object_position(previous: Option<&str>, next: Option<&str>) -> bool {
    let Some(previous) = previous else {
        return false;
    };
    let previous = previous.to_ascii_lowercase();
    if OBJECT_CONTEXT.contains(&previous.as_str()) {
        return true;
    }

    let ends_clause = next.map_or(true, |token| {
        !is_word(token) && token.contains(['.', ',', ';', ':', '!', '?'])
    });
    ends_clause && !CLAUSE_OPENERS.contains(&previous.as_str())
}

fn is_adverb(word: &str) -> bool {
    ADVERBS.contains(&word)
        || (word.len() > 4 && word.ends_with("ly") && !LY_VERBS.contains(&word))
}

/// Third-person singular present of a base verb; `None` for modals and finite forms.
fn third_person(verb: &str) -> Option<String> {
    if verb.chars().any(|c| c.is_ascii_uppercase()) || UNINFLECTED.contains(&verb) {
        return None;
    }
    match verb {
        "are" | "be" => return Some("is".to_string()),
        "have" => return Some("has".to_string()),
        _ => {}
    }
    if verb.ends_with("ed") && !verb.ends_with("eed") {
        return None;
    }
    if ["s", "x", "z", "ch", "sh", "o"]
        .iter()
        .any(|ending| verb.ends_with(ending))
    {
        return Some(format!("{verb}es"));
    }
    if let Some(stem) = verb.strip_suffix('y') {
        if stem.ends_with(|c: char| !"aeiou".contains(c)) {
            return Some(format!("{stem}ies"));
        }
    }
    Some(format!("{verb}s"))
}

fn match_case(original: &str, replacement: String) -> String {
    let letters: Vec<char> = original.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.len() > 1 && letters.iter().all(|c| c.is_uppercase()) {
        replacement.to_uppercase()
    } else if letters.first().is_some_and(|c| c.is_uppercase()) {
        capitalize(&replacement)
    } else {
        replacement
    }
}

fn collapse_repeated_name(text: &str, name: &str) -> String {
    let escaped = regex::escape(name);
    let Ok(pattern) = Regex::new(&format!(r"\b{escaped}\s+{escaped}\b")) else {
        return text.to_string();
    };
    pattern.replace_all(text, NoExpand(name)).into_owned()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Values whose narrative text can be rendered for a particular viewer.
pub trait Render {
    fn render(&self, viewer: &ViewerContext) -> Self;
}

pub fn render_for_viewer<T: Render>(value: &T, viewer: &ViewerContext) -> T {
    value.render(viewer)
}

pub(crate) fn render_string(text: &str, viewer: &ViewerContext) -> String {
    transform_text(text, viewer).into_owned()
}

pub(crate) fn render_list(values: &[String], viewer: &ViewerContext) -> Vec<String> {
    values
        .iter()
        .map(|value| render_string(value, viewer))
        .collect()
}

impl Render for String {
    fn render(&self, viewer: &ViewerContext) -> Self {
        render_string(self, viewer)
    }
}

impl Render for StyleBundle {
    fn render(&self, viewer: &ViewerContext) -> Self {
        Self {
            work_style: render_string(&self.work_style, viewer),
            communication_style: render_string(&self.communication_style, viewer),
            decision_making_style: render_string(&self.decision_making_style, viewer),
            stress_response: render_string(&self.stress_response, viewer),
            team_role: self.team_role.clone(),
            leadership_style: self.leadership_style.clone(),
        }
    }
}

impl Render for BehavioralProfile {
    fn render(&self, viewer: &ViewerContext) -> Self {
        Self {
            styles: self.styles.render(viewer),
            ..self.clone()
        }
    }
}
