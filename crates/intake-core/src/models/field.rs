use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The input widget class a field maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    Text,
    Number,
    Select,
    Radio,
    Checkbox,
    TextArea,
    Date,
}

impl FieldKind {
    /// Whether the field is answered by picking from `options`.
    pub fn takes_options(self) -> bool {
        matches!(self, FieldKind::Select | FieldKind::Radio | FieldKind::Checkbox)
    }
}

/// Constraints attached to a field beyond `required`.
///
/// `min`/`max` bound `Number` fields (closed interval). `pattern` is kept
/// in the stored shape for the form builder but no validation rule reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldRules {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pattern: Option<String>,
}

/// One question within an assessment definition.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentField {
    /// Stable within the owning assessment type; used as the answer-map key.
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rules: Option<FieldRules>,
}

/// Check the structural invariants of a field list: ids unique, options
/// present exactly for the kinds that pick from them.
pub fn check_fields(fields: &[AssessmentField]) -> Result<(), CoreError> {
    let mut seen = HashSet::new();
    for field in fields {
        if !seen.insert(field.id.as_str()) {
            return Err(CoreError::DuplicateFieldId(field.id.clone()));
        }
        if field.kind.takes_options() {
            if field.options.is_empty() {
                return Err(CoreError::MissingOptions(field.id.clone()));
            }
        } else if !field.options.is_empty() {
            return Err(CoreError::UnexpectedOptions(field.id.clone()));
        }
    }
    Ok(())
}
