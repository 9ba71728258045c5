use std::collections::HashMap;

use intake_core::models::{
    AnswerMap, AnswerValue, AssessmentField, AssessmentType, FieldKind, FieldRules,
};
use intake_engine::validate::{FieldErrorKind, validate_field, validate_form};

fn field(id: &str, kind: FieldKind, required: bool) -> AssessmentField {
    let options = if kind.takes_options() {
        vec!["One".to_string(), "Two".to_string()]
    } else {
        Vec::new()
    };
    AssessmentField {
        id: id.to_string(),
        label: id.to_string(),
        kind,
        required,
        options,
        rules: None,
    }
}

fn bounded(id: &str, min: Option<f64>, max: Option<f64>) -> AssessmentField {
    AssessmentField {
        rules: Some(FieldRules {
            min,
            max,
            pattern: None,
        }),
        ..field(id, FieldKind::Number, true)
    }
}

fn assessment(fields: Vec<AssessmentField>) -> AssessmentType {
    let now: jiff::Timestamp = "2024-01-15T10:00:00Z".parse().unwrap();
    AssessmentType {
        id: "as_test".to_string(),
        title: "Test Assessment".to_string(),
        description: String::new(),
        category: "General".to_string(),
        fields,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn required_but_absent_is_rejected_for_every_kind() {
    let kinds = [
        FieldKind::Text,
        FieldKind::Number,
        FieldKind::Select,
        FieldKind::Radio,
        FieldKind::Checkbox,
        FieldKind::TextArea,
        FieldKind::Date,
    ];
    for kind in kinds {
        let error = validate_field(&field("q", kind, true), None).unwrap();
        assert_eq!(error.kind, FieldErrorKind::MissingRequired, "kind {kind:?}");
        assert_eq!(error.message, "This field is required");
    }
}

#[test]
fn required_but_empty_string_or_empty_set_is_rejected() {
    let text = field("q", FieldKind::Text, true);
    let error = validate_field(&text, Some(&AnswerValue::Text(String::new()))).unwrap();
    assert_eq!(error.kind, FieldErrorKind::MissingRequired);

    let boxes = field("q", FieldKind::Checkbox, true);
    let error = validate_field(&boxes, Some(&AnswerValue::Selections(Vec::new()))).unwrap();
    assert_eq!(error.kind, FieldErrorKind::MissingRequired);
}

#[test]
fn optional_fields_accept_absence() {
    assert!(validate_field(&field("q", FieldKind::Text, false), None).is_none());
    assert!(
        validate_field(
            &field("q", FieldKind::Number, false),
            Some(&AnswerValue::Text(String::new())),
        )
        .is_none()
    );
}

#[test]
fn required_empty_wins_over_number_parsing() {
    // Rule order is fixed: the empty check fires before any numeric rule.
    let error = validate_field(&bounded("q", Some(1.0), Some(9.0)), None).unwrap();
    assert_eq!(error.kind, FieldErrorKind::MissingRequired);
}

#[test]
fn number_fields_accept_numeric_text() {
    let numeric = field("q", FieldKind::Number, true);
    assert!(validate_field(&numeric, Some(&AnswerValue::Text("42".to_string()))).is_none());
    assert!(validate_field(&numeric, Some(&AnswerValue::Number(42.0))).is_none());
}

#[test]
fn number_fields_reject_unparseable_input() {
    let numeric = field("q", FieldKind::Number, true);

    let error =
        validate_field(&numeric, Some(&AnswerValue::Text("not a number".to_string()))).unwrap();
    assert_eq!(error.kind, FieldErrorKind::NotANumber);
    assert_eq!(error.message, "Please enter a valid number");

    // A selection set is a nonsensical answer for a number widget.
    let error = validate_field(
        &numeric,
        Some(&AnswerValue::Selections(vec!["1".to_string()])),
    )
    .unwrap();
    assert_eq!(error.kind, FieldErrorKind::NotANumber);
}

#[test]
fn bounds_accept_exactly_the_closed_interval() {
    let level = bounded("level", Some(1.0), Some(120.0));

    assert!(validate_field(&level, Some(&AnswerValue::Number(1.0))).is_none());
    assert!(validate_field(&level, Some(&AnswerValue::Number(120.0))).is_none());
    assert!(validate_field(&level, Some(&AnswerValue::Number(60.0))).is_none());

    let error = validate_field(&level, Some(&AnswerValue::Number(0.5))).unwrap();
    assert_eq!(error.kind, FieldErrorKind::BelowMin);
    assert_eq!(error.message, "Value must be at least 1");

    let error = validate_field(&level, Some(&AnswerValue::Number(130.0))).unwrap();
    assert_eq!(error.kind, FieldErrorKind::AboveMax);
    assert_eq!(error.message, "Value must be at most 120");
}

#[test]
fn one_sided_bounds_only_check_their_side() {
    let floor = bounded("q", Some(10.0), None);
    assert!(validate_field(&floor, Some(&AnswerValue::Number(1e9))).is_none());
    assert_eq!(
        validate_field(&floor, Some(&AnswerValue::Number(9.9)))
            .unwrap()
            .kind,
        FieldErrorKind::BelowMin
    );

    let ceiling = bounded("q", None, Some(10.0));
    assert!(validate_field(&ceiling, Some(&AnswerValue::Number(-1e9))).is_none());
    assert_eq!(
        validate_field(&ceiling, Some(&AnswerValue::Number(10.1)))
            .unwrap()
            .kind,
        FieldErrorKind::AboveMax
    );
}

#[test]
fn non_number_kinds_accept_free_text_as_is() {
    // Deliberately minimal validation: no format rules beyond
    // required-ness and numeric bounds.
    let date = field("when", FieldKind::Date, true);
    assert!(validate_field(&date, Some(&AnswerValue::Text("not a date".to_string()))).is_none());

    let name = field("name", FieldKind::Text, true);
    assert!(validate_field(&name, Some(&AnswerValue::Text("!!!".to_string()))).is_none());
}

#[test]
fn form_validation_reports_every_failing_field_at_once() {
    let form = assessment(vec![
        field("name", FieldKind::Text, true),
        bounded("age", Some(1.0), Some(120.0)),
        field("notes", FieldKind::TextArea, false),
    ]);

    let mut answers: AnswerMap = HashMap::new();
    answers.insert("age".to_string(), AnswerValue::Number(150.0));

    let errors = validate_form(&form, &answers);
    assert_eq!(errors.len(), 2);
    assert!(
        errors
            .iter()
            .any(|e| e.field_id == "name" && e.kind == FieldErrorKind::MissingRequired)
    );
    assert!(
        errors
            .iter()
            .any(|e| e.field_id == "age" && e.kind == FieldErrorKind::AboveMax)
    );
}

#[test]
fn form_validation_passes_when_every_field_passes() {
    let form = assessment(vec![
        field("name", FieldKind::Text, true),
        bounded("age", Some(1.0), Some(120.0)),
    ]);

    let mut answers: AnswerMap = HashMap::new();
    answers.insert("name".to_string(), AnswerValue::Text("Ada".to_string()));
    answers.insert("age".to_string(), AnswerValue::Text("36".to_string()));

    assert!(validate_form(&form, &answers).is_empty());
}

#[test]
fn answers_for_unknown_fields_are_ignored() {
    // Stale keys from an edited type are tolerated, not revalidated.
    let form = assessment(vec![field("name", FieldKind::Text, true)]);

    let mut answers: AnswerMap = HashMap::new();
    answers.insert("name".to_string(), AnswerValue::Text("Ada".to_string()));
    answers.insert("ghost".to_string(), AnswerValue::Text("old".to_string()));

    assert!(validate_form(&form, &answers).is_empty());
}
