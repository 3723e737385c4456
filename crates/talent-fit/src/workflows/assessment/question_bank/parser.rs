use serde::Deserialize;
use std::io::Read;

use super::super::domain::{DimensionVector, Question, QuestionOption};
use super::QuestionBankError;

#[derive(Debug, Deserialize)]
struct QuestionRow {
    question_id: String,
    prompt: String,
    option_label: String,
    dominance: u32,
    influence: u32,
    steadiness: u32,
    conscientiousness: u32,
}

/// Group CSV rows into questions. Consecutive rows sharing an id form one question.
pub(crate) fn parse_questions<R: Read>(reader: R) -> Result<Vec<Question>, QuestionBankError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut questions: Vec<Question> = Vec::new();

    for (index, record) in csv_reader.deserialize::<QuestionRow>().enumerate() {
        // Header occupies line 1.
        let row_number = index + 2;
        let row = record.map_err(|source| QuestionBankError::Row {
            row: row_number,
            source,
        })?;

        if row.question_id.is_empty() || row.option_label.is_empty() {
            return Err(QuestionBankError::MissingField { row: row_number });
        }

        let option = QuestionOption {
            label: row.option_label,
            weights: DimensionVector::new(
                row.dominance,
                row.influence,
                row.steadiness,
                row.conscientiousness,
            ),
        };

        match questions.last_mut() {
            Some(current) if current.id == row.question_id => current.options.push(option),
            _ => {
                if questions.iter().any(|question| question.id == row.question_id) {
                    return Err(QuestionBankError::DuplicateQuestion {
                        question_id: row.question_id,
                        row: row_number,
                    });
                }
                questions.push(Question {
                    id: row.question_id,
                    prompt: row.prompt,
                    options: vec![option],
                });
            }
        }
    }

    Ok(questions)
}
