//! Built-in assessment templates, seeded into the store on first run.

pub mod cardiac;
pub mod health_fitness;

use intake_core::models::{AssessmentField, AssessmentType, FieldKind, FieldRules};

/// All built-in templates, stamped with the given creation time.
pub fn builtin_types(now: jiff::Timestamp) -> Vec<AssessmentType> {
    vec![health_fitness::definition(now), cardiac::definition(now)]
}

/// Look up a built-in template by id.
pub fn builtin_type(id: &str, now: jiff::Timestamp) -> Option<AssessmentType> {
    builtin_types(now).into_iter().find(|t| t.id == id)
}

pub(crate) fn number(
    id: &str,
    label: &str,
    required: bool,
    min: f64,
    max: f64,
) -> AssessmentField {
    AssessmentField {
        id: id.to_string(),
        label: label.to_string(),
        kind: FieldKind::Number,
        required,
        options: Vec::new(),
        rules: Some(FieldRules {
            min: Some(min),
            max: Some(max),
            pattern: None,
        }),
    }
}

pub(crate) fn choice(
    kind: FieldKind,
    id: &str,
    label: &str,
    required: bool,
    options: &[&str],
) -> AssessmentField {
    AssessmentField {
        id: id.to_string(),
        label: label.to_string(),
        kind,
        required,
        options: options.iter().map(|o| o.to_string()).collect(),
        rules: None,
    }
}

pub(crate) fn plain(kind: FieldKind, id: &str, label: &str, required: bool) -> AssessmentField {
    AssessmentField {
        id: id.to_string(),
        label: label.to_string(),
        kind,
        required,
        options: Vec::new(),
        rules: None,
    }
}
