use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::field::AssessmentField;

/// The definition of one questionnaire: its metadata plus an ordered list
/// of fields. Field order is display order and survives edits.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentType {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub fields: Vec<AssessmentField>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl AssessmentType {
    pub fn field(&self, id: &str) -> Option<&AssessmentField> {
        self.fields.iter().find(|field| field.id == id)
    }
}

/// Operator draft for a new assessment type. The store assigns the id and
/// both timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewAssessmentType {
    pub title: String,
    pub description: String,
    pub category: String,
    pub fields: Vec<AssessmentField>,
}

/// Partial update; a `Some` replaces the whole value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentTypeUpdate {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fields: Option<Vec<AssessmentField>>,
}
