use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Answers keyed by field id.
pub type AnswerMap = HashMap<String, AnswerValue>;

/// One answer value as the widgets produce it: a number input may deliver
/// either a JSON number or the raw text the respondent typed, and checkbox
/// groups deliver the set of picked options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum AnswerValue {
    Number(f64),
    Text(String),
    Selections(Vec<String>),
}

impl AnswerValue {
    /// An empty string or an empty selection set counts as no answer.
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Number(_) => false,
            AnswerValue::Text(text) => text.is_empty(),
            AnswerValue::Selections(picked) => picked.is_empty(),
        }
    }

    /// Numeric reading of the answer, whether it arrived as a number or as
    /// text. Non-finite values and selection sets read as not-a-number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => n.is_finite().then_some(*n),
            AnswerValue::Text(text) => {
                text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
            }
            AnswerValue::Selections(_) => None,
        }
    }
}
