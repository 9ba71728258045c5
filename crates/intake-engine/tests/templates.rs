use intake_core::models::{FieldKind, check_fields};
use intake_engine::templates::{builtin_type, builtin_types, cardiac, health_fitness};

fn now() -> jiff::Timestamp {
    "2024-01-15T10:00:00Z".parse().unwrap()
}

#[test]
fn both_builtin_templates_are_registered() {
    let types = builtin_types(now());
    assert_eq!(types.len(), 2);
    assert_eq!(types[0].id, health_fitness::TYPE_ID);
    assert_eq!(types[1].id, cardiac::TYPE_ID);
}

#[test]
fn builtin_templates_pass_the_integrity_check() {
    for assessment in builtin_types(now()) {
        check_fields(&assessment.fields)
            .unwrap_or_else(|e| panic!("{}: {e}", assessment.id));
    }
}

#[test]
fn lookup_by_id_finds_the_template() {
    let found = builtin_type(cardiac::TYPE_ID, now()).expect("cardiac template");
    assert_eq!(found.title, "Cardiac Assessment");
    assert!(builtin_type("as_missing", now()).is_none());
}

#[test]
fn health_template_carries_the_expected_fields_in_order() {
    let form = health_fitness::definition(now());
    let ids: Vec<&str> = form.fields.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "age",
            "gender",
            "height",
            "weight",
            "activity_level",
            "medical_conditions",
            "fitness_goals",
            "exercise_frequency",
        ]
    );

    let age = form.field("age").unwrap();
    assert_eq!(age.kind, FieldKind::Number);
    assert!(age.required);
    let rules = age.rules.as_ref().unwrap();
    assert_eq!(rules.min, Some(1.0));
    assert_eq!(rules.max, Some(120.0));

    let conditions = form.field("medical_conditions").unwrap();
    assert_eq!(conditions.kind, FieldKind::Checkbox);
    assert!(!conditions.required);
    assert_eq!(conditions.options.len(), 5);
}

#[test]
fn cardiac_template_carries_the_expected_fields_in_order() {
    let form = cardiac::definition(now());
    assert_eq!(form.category, "Medical");
    assert_eq!(form.fields.len(), 11);
    assert_eq!(form.fields[0].id, "patient_id");
    assert_eq!(form.fields[10].kind, FieldKind::Date);

    let systolic = form.field("blood_pressure_systolic").unwrap();
    let rules = systolic.rules.as_ref().unwrap();
    assert_eq!(rules.min, Some(70.0));
    assert_eq!(rules.max, Some(250.0));

    let smoking = form.field("smoking_status").unwrap();
    assert_eq!(smoking.options, ["Never", "Former", "Current"]);
}
