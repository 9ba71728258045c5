use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::AnswerMap;

/// One respondent's completed answer set for one assessment type.
/// Immutable once submitted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResponse {
    pub id: String,
    pub assessment_type_id: String,
    pub user_id: String,
    pub answers: AnswerMap,
    pub completed_at: jiff::Timestamp,
    /// Completion percentage, recorded at submit time and never recomputed.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub score: Option<u8>,
}

/// Submission draft. The store assigns the id and `completed_at`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewResponse {
    pub assessment_type_id: String,
    pub user_id: String,
    pub answers: AnswerMap,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub score: Option<u8>,
}
