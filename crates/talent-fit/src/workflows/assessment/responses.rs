//! Adapter converting the response shapes clients submit into the canonical response set.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{Response, ResponseSet};
use super::question_bank::QuestionBank;

/// Response payload as received from clients. Older clients send the option label
/// instead of its index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawResponse {
    Indexed {
        question_id: String,
        selected_option: usize,
    },
    Labeled {
        question: String,
        answer: String,
    },
}

impl From<Response> for RawResponse {
    fn from(response: Response) -> Self {
        RawResponse::Indexed {
            question_id: response.question_id,
            selected_option: response.option_index,
        }
    }
}

/// Convert raw payloads into canonical responses.
///
/// Legacy answers are matched to option labels case-insensitively; anything that
/// cannot be matched is dropped. Indexed responses pass through untouched so the
/// aggregator can decide what to skip. A repeated question keeps its last answer.
pub fn adapt_responses(raw: &[RawResponse], bank: &QuestionBank) -> ResponseSet {
    let mut adapted: ResponseSet = Vec::with_capacity(raw.len());

    for entry in raw {
        let response = match entry {
            RawResponse::Indexed {
                question_id,
                selected_option,
            } => Response::new(question_id.clone(), *selected_option),
            RawResponse::Labeled { question, answer } => {
                match resolve_label(bank, question, answer) {
                    Some(index) => Response::new(question.clone(), index),
                    None => {
                        debug!(question = %question, answer = %answer, "dropping unmatched legacy response");
                        continue;
                    }
                }
            }
        };

        adapted.push(response);
    }

    keep_last_answers(adapted)
}

/// Drop earlier answers to a repeated question, keeping the order of the survivors.
fn keep_last_answers(adapted: ResponseSet) -> ResponseSet {
    let mut last_seen: HashMap<&str, usize> = HashMap::with_capacity(adapted.len());
    for (index, response) in adapted.iter().enumerate() {
        last_seen.insert(response.question_id.as_str(), index);
    }

    let keep: Vec<bool> = adapted
        .iter()
        .enumerate()
        .map(|(index, response)| last_seen.get(response.question_id.as_str()) == Some(&index))
        .collect();

    adapted
        .into_iter()
        .zip(keep)
        .filter_map(|(response, kept)| kept.then_some(response))
        .collect()
}

fn resolve_label(bank: &QuestionBank, question_id: &str, answer: &str) -> Option<usize> {
    let needle = answer.trim();
    bank.question(question_id)?
        .options
        .iter()
        .position(|option| option.label.trim().eq_ignore_ascii_case(needle))
}
