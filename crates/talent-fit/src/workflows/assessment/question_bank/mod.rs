//! Question bank sources: the built-in survey plus CSV/JSON imports.

mod parser;

use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

use super::domain::{Dimension, DimensionVector, Question, QuestionOption};

const MIN_OPTIONS: usize = 3;
const MAX_OPTIONS: usize = 4;
/// Upper bound for a single option weight on any dimension.
pub const MAX_OPTION_WEIGHT: u32 = 100;

/// Errors raised while importing a question bank.
#[derive(Debug, thiserror::Error)]
pub enum QuestionBankError {
    #[error("failed to read question bank: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid question bank row {row}: {source}")]
    Row { row: usize, source: csv::Error },
    #[error("question bank row {row} is missing a question id or option label")]
    MissingField { row: usize },
    #[error("question {question_id} appears again at row {row} after other questions")]
    DuplicateQuestion { question_id: String, row: usize },
    #[error("question {question_id} has {found} options (expected 3-4)")]
    OptionCount { question_id: String, found: usize },
    #[error("option '{option}' of question {question_id} has a weight above {max}")]
    WeightOutOfRange {
        question_id: String,
        option: String,
        max: u32,
    },
    #[error("question bank is empty")]
    Empty,
    #[error("invalid question bank json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered, immutable set of survey questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedBank")]
pub struct QuestionBank {
    questions: Vec<Question>,
}

#[derive(Deserialize)]
struct UncheckedBank {
    questions: Vec<Question>,
}

impl TryFrom<UncheckedBank> for QuestionBank {
    type Error = QuestionBankError;

    fn try_from(unchecked: UncheckedBank) -> Result<Self, Self::Error> {
        Self::new(unchecked.questions)
    }
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionBankError> {
        if questions.is_empty() {
            return Err(QuestionBankError::Empty);
        }

        for question in &questions {
            let found = question.options.len();
            if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&found) {
                return Err(QuestionBankError::OptionCount {
                    question_id: question.id.clone(),
                    found,
                });
            }

            let oversized = question.options.iter().find(|option| {
                Dimension::ordered()
                    .into_iter()
                    .any(|dimension| option.weights.get(dimension) > MAX_OPTION_WEIGHT)
            });
            if let Some(option) = oversized {
                return Err(QuestionBankError::WeightOutOfRange {
                    question_id: question.id.clone(),
                    option: option.label.clone(),
                    max: MAX_OPTION_WEIGHT,
                });
            }
        }

        Ok(Self { questions })
    }

    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, QuestionBankError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, QuestionBankError> {
        let questions = parser::parse_questions(reader)?;
        Self::new(questions)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, QuestionBankError> {
        let questions: Vec<Question> = serde_json::from_str(raw)?;
        Self::new(questions)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn option(&self, question_id: &str, index: usize) -> Option<&QuestionOption> {
        self.question(question_id)
            .and_then(|question| question.options.get(index))
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

fn question(id: &str, prompt: &str, options: [(&str, [u32; 4]); 4]) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        options: options
            .into_iter()
            .map(|(label, [d, i, s, c])| QuestionOption {
                label: label.to_string(),
                weights: DimensionVector::new(d, i, s, c),
            })
            .collect(),
    }
}

fn standard_questions() -> Vec<Question> {
    vec![
        question(
            "q01",
            "A project deadline suddenly moves up by a week. What do you do first?",
            [
                ("Take charge, cut scope, and assign owners immediately", [4, 1, 0, 0]),
                ("Rally the team and keep spirits high", [1, 4, 0, 0]),
                ("Check in with everyone to see how they are coping", [0, 1, 4, 0]),
                ("Re-plan the schedule task by task", [0, 0, 1, 4]),
            ],
        ),
        question(
            "q02",
            "In team meetings you are most likely to...",
            [
                ("Push the group toward a decision", [4, 1, 0, 1]),
                ("Share ideas and get people talking", [0, 4, 1, 0]),
                ("Listen and make sure quieter voices are heard", [0, 1, 4, 0]),
                ("Ask clarifying questions about the details", [1, 0, 0, 4]),
            ],
        ),
        question(
            "q03",
            "Which kind of recognition means the most to you?",
            [
                ("A promotion or expanded authority", [4, 1, 0, 0]),
                ("Public praise in front of colleagues", [1, 4, 0, 0]),
                ("A sincere thank-you from the people you helped", [0, 1, 4, 0]),
                ("Acknowledgment that your work was flawless", [0, 0, 1, 4]),
            ],
        ),
        question(
            "q04",
            "When you disagree with a decision, you usually...",
            [
                ("Challenge it directly and argue your case", [4, 1, 0, 0]),
                ("Talk it through informally to win people over", [1, 4, 0, 0]),
                ("Go along with it to keep the peace", [0, 0, 4, 1]),
                ("Prepare evidence and raise it through the right channel", [1, 0, 0, 4]),
            ],
        ),
        question(
            "q05",
            "Your ideal workday looks like...",
            [
                ("Fast-paced with several high-stakes calls to make", [4, 1, 0, 0]),
                ("Full of conversations and new people", [0, 4, 1, 0]),
                ("Predictable, with time to help teammates", [0, 1, 4, 0]),
                ("Quiet, focused work on a complex problem", [0, 0, 1, 4]),
            ],
        ),
        question(
            "q06",
            "When learning a new tool, you prefer to...",
            [
                ("Dive in and figure it out as you go", [4, 1, 0, 0]),
                ("Learn alongside others in a group session", [0, 4, 1, 0]),
                ("Follow a step-by-step walkthrough at your own pace", [0, 0, 4, 1]),
                ("Read the documentation thoroughly first", [0, 0, 1, 4]),
            ],
        ),
        question(
            "q07",
            "A teammate is struggling with their workload. You...",
            [
                ("Reassign tasks so the deadline is met", [4, 0, 0, 1]),
                ("Encourage them and boost their confidence", [0, 4, 1, 0]),
                ("Offer to take some of the work yourself", [0, 0, 4, 1]),
                ("Help them organize and prioritize their list", [0, 0, 1, 4]),
            ],
        ),
        question(
            "q08",
            "Which statement describes you best?",
            [
                ("I like to win", [4, 1, 0, 0]),
                ("I like to have fun with people", [0, 4, 1, 0]),
                ("I like stability and loyalty", [0, 0, 4, 1]),
                ("I like to be accurate", [1, 0, 0, 4]),
            ],
        ),
        question(
            "q09",
            "When facing a risky opportunity, you...",
            [
                ("Jump on it before someone else does", [4, 1, 0, 0]),
                ("Get excited and talk others into it", [1, 4, 0, 0]),
                ("Wait until the team feels comfortable", [0, 1, 4, 0]),
                ("Analyze the downside before committing", [0, 0, 1, 4]),
            ],
        ),
        question(
            "q10",
            "Others would most likely describe you as...",
            [
                ("Determined and direct", [4, 0, 0, 1]),
                ("Outgoing and optimistic", [1, 4, 0, 0]),
                ("Patient and dependable", [0, 1, 4, 0]),
                ("Careful and precise", [0, 0, 1, 4]),
            ],
        ),
        question(
            "q11",
            "Under stress, you tend to...",
            [
                ("Become more controlling and impatient", [4, 1, 0, 0]),
                ("Talk more and seek reassurance", [0, 4, 1, 0]),
                ("Withdraw and avoid conflict", [0, 0, 4, 1]),
                ("Double-check everything and become critical", [1, 0, 0, 4]),
            ],
        ),
        question(
            "q12",
            "The best way to communicate with you is...",
            [
                ("Get to the point quickly", [4, 0, 0, 1]),
                ("Be friendly and enthusiastic", [0, 4, 1, 0]),
                ("Be calm, patient, and sincere", [0, 1, 4, 0]),
                ("Provide facts and details in writing", [1, 0, 0, 4]),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str =
        "question_id,prompt,option_label,dominance,influence,steadiness,conscientiousness\n";

    #[test]
    fn standard_bank_has_weighted_options() {
        let bank = QuestionBank::standard();
        assert_eq!(bank.len(), 12);
        for question in bank.questions() {
            assert_eq!(question.options.len(), 4, "{} option count", question.id);
            for option in &question.options {
                let total = option.weights.total();
                assert!((4..=6).contains(&total), "{} weight {total}", option.label);
            }
        }
    }

    #[test]
    fn csv_rows_group_into_questions() {
        let csv = format!(
            "{HEADER}q1,Pick one,Lead,4,1,0,0\nq1,Pick one,Chat,0,4,1,0\nq1,Pick one,Check,0,0,1,4\n\
             q2,Then,Act,4,0,0,1\nq2,Then,Wait,0,0,4,1\nq2,Then,Plan,0,0,1,4\n"
        );

        let bank = QuestionBank::from_csv_reader(Cursor::new(csv)).expect("bank parses");

        assert_eq!(bank.len(), 2);
        let option = bank.option("q2", 1).expect("option present");
        assert_eq!(option.label, "Wait");
        assert_eq!(option.weights, DimensionVector::new(0, 0, 4, 1));
    }

    #[test]
    fn csv_rejects_questions_with_too_few_options() {
        let csv = format!("{HEADER}q1,Pick one,Lead,4,1,0,0\nq1,Pick one,Chat,0,4,1,0\n");

        match QuestionBank::from_csv_reader(Cursor::new(csv)) {
            Err(QuestionBankError::OptionCount { question_id, found }) => {
                assert_eq!(question_id, "q1");
                assert_eq!(found, 2);
            }
            other => panic!("expected option count error, got {other:?}"),
        }
    }

    #[test]
    fn csv_reports_row_for_negative_weights() {
        let csv = format!("{HEADER}q1,Pick one,Lead,4,1,0,0\nq1,Pick one,Chat,-1,4,1,0\n");

        match QuestionBank::from_csv_reader(Cursor::new(csv)) {
            Err(QuestionBankError::Row { row, .. }) => assert_eq!(row, 3),
            other => panic!("expected row error, got {other:?}"),
        }
    }

    #[test]
    fn csv_rejects_split_question_blocks() {
        let csv = format!(
            "{HEADER}q1,A,a,1,1,1,1\nq1,A,b,1,1,1,1\nq1,A,c,1,1,1,1\n\
             q2,B,a,1,1,1,1\nq2,B,b,1,1,1,1\nq2,B,c,1,1,1,1\nq1,A,d,1,1,1,1\n"
        );

        assert!(matches!(
            QuestionBank::from_csv_reader(Cursor::new(csv)),
            Err(QuestionBankError::DuplicateQuestion { row: 8, .. })
        ));
    }

    #[test]
    fn json_bank_round_trips_through_validation() {
        let raw = serde_json::to_string(QuestionBank::standard().questions()).expect("serialize");
        let bank = QuestionBank::from_json_str(&raw).expect("json bank loads");
        assert_eq!(bank, QuestionBank::standard());
    }

    #[test]
    fn deserializing_a_bank_runs_validation() {
        let short = r#"{"questions": [{"id": "q1", "prompt": "Pick", "options": [
            {"label": "a", "weights": {"dominance": 4, "influence": 0, "steadiness": 0, "conscientiousness": 0}}
        ]}]}"#;
        let error = serde_json::from_str::<QuestionBank>(short).expect_err("one option is rejected");
        assert!(error.to_string().contains("expected 3-4"), "{error}");

        let empty = serde_json::from_str::<QuestionBank>(r#"{"questions": []}"#);
        assert!(empty.is_err());

        let raw = serde_json::to_string(&QuestionBank::standard()).expect("serialize");
        let bank: QuestionBank = serde_json::from_str(&raw).expect("standard bank deserializes");
        assert_eq!(bank, QuestionBank::standard());
    }

    #[test]
    fn csv_rejects_weights_that_would_dominate_aggregation() {
        let csv = format!(
            "{HEADER}q1,Pick one,Lead,4000000000,0,0,0\nq1,Pick one,Chat,0,4,1,0\nq1,Pick one,Check,0,0,1,4\n"
        );

        match QuestionBank::from_csv_reader(Cursor::new(csv)) {
            Err(QuestionBankError::WeightOutOfRange {
                question_id,
                option,
                ..
            }) => {
                assert_eq!(question_id, "q1");
                assert_eq!(option, "Lead");
            }
            other => panic!("expected weight range error, got {other:?}"),
        }
    }
}
