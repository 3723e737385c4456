use tracing::debug;

use super::super::domain::{Dimension, DimensionVector, Response};
use super::super::question_bank::QuestionBank;

/// Sum the weight vectors of every answered option. Unknown questions or options contribute nothing.
pub(crate) fn aggregate(responses: &[Response], bank: &QuestionBank) -> DimensionVector {
    let mut totals = DimensionVector::default();

    for response in responses {
        match bank.option(&response.question_id, response.option_index) {
            Some(option) => totals.accumulate(&option.weights),
            None => debug!(
                question_id = %response.question_id,
                option_index = response.option_index,
                "skipping response with unknown question or option"
            ),
        }
    }

    totals
}

/// Convert raw totals into integer percentages summing to exactly 100.
///
/// Rounding drift is absorbed by the largest dimension. A zero total yields 25/25/25/25.
pub fn normalize(raw: &DimensionVector) -> DimensionVector {
    let total = raw.total();
    if total == 0 {
        return DimensionVector::balanced();
    }

    let mut percentages = Dimension::ordered().map(|dimension| {
        let share = f64::from(raw.get(dimension)) / total as f64 * 100.0;
        (dimension, share.round() as i64)
    });

    let sum: i64 = percentages.iter().map(|(_, value)| value).sum();
    let drift = 100 - sum;
    if drift != 0 {
        let mut largest = 0;
        for (index, (_, value)) in percentages.iter().enumerate() {
            if *value > percentages[largest].1 {
                largest = index;
            }
        }
        percentages[largest].1 += drift;
    }

    let mut normalized = DimensionVector::default();
    for (dimension, value) in percentages {
        normalized.set(dimension, value.max(0) as u32);
    }
    normalized
}
