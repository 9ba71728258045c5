use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use intake_core::models::{AnswerMap, AnswerValue, AssessmentField, AssessmentType, FieldKind};

/// Why a field rejected its candidate answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldErrorKind {
    MissingRequired,
    NotANumber,
    BelowMin,
    AboveMax,
}

/// A per-field rejection, carrying the message the form shows inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[error("{message}")]
#[ts(export)]
pub struct FieldError {
    pub field_id: String,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    fn new(field: &AssessmentField, kind: FieldErrorKind, message: String) -> Self {
        Self {
            field_id: field.id.clone(),
            kind,
            message,
        }
    }
}

/// Validate one candidate answer against one field definition.
///
/// Rules run in a fixed order and the first match wins: required-but-empty,
/// then (for `Number` fields only) numeric parse, then the lower bound,
/// then the upper bound. Everything else is accepted as-is — this engine
/// deliberately enforces nothing beyond required-ness and numeric limits.
pub fn validate_field(
    field: &AssessmentField,
    value: Option<&AnswerValue>,
) -> Option<FieldError> {
    let answered = value.is_some_and(|v| !v.is_empty());

    if field.required && !answered {
        return Some(FieldError::new(
            field,
            FieldErrorKind::MissingRequired,
            "This field is required".to_string(),
        ));
    }

    if field.kind == FieldKind::Number && answered {
        let Some(number) = value.and_then(AnswerValue::as_number) else {
            return Some(FieldError::new(
                field,
                FieldErrorKind::NotANumber,
                "Please enter a valid number".to_string(),
            ));
        };

        if let Some(rules) = &field.rules {
            if let Some(min) = rules.min
                && number < min
            {
                return Some(FieldError::new(
                    field,
                    FieldErrorKind::BelowMin,
                    format!("Value must be at least {min}"),
                ));
            }
            if let Some(max) = rules.max
                && number > max
            {
                return Some(FieldError::new(
                    field,
                    FieldErrorKind::AboveMax,
                    format!("Value must be at most {max}"),
                ));
            }
        }
    }

    None
}

/// Validate every field of an assessment at once. An empty result means
/// the submission may proceed; a non-empty result rejects the submission
/// as a whole, one entry per failing field.
pub fn validate_form(assessment: &AssessmentType, answers: &AnswerMap) -> Vec<FieldError> {
    assessment
        .fields
        .iter()
        .filter_map(|field| validate_field(field, answers.get(&field.id)))
        .collect()
}
