use std::collections::HashMap;

use intake_core::models::{AnswerValue, AssessmentResponse};
use intake_engine::render::{display_value, response_summary};
use intake_engine::templates::health_fitness;

#[test]
fn absent_and_empty_answers_read_not_provided() {
    assert_eq!(display_value(None), "Not provided");
    assert_eq!(
        display_value(Some(&AnswerValue::Text(String::new()))),
        "Not provided"
    );
}

#[test]
fn selection_sets_join_with_commas() {
    let picked = AnswerValue::Selections(vec!["Diabetes".to_string(), "Asthma".to_string()]);
    assert_eq!(display_value(Some(&picked)), "Diabetes, Asthma");
    assert_eq!(
        display_value(Some(&AnswerValue::Selections(Vec::new()))),
        "None selected"
    );
}

#[test]
fn numbers_and_text_pass_through() {
    assert_eq!(display_value(Some(&AnswerValue::Number(170.0))), "170");
    assert_eq!(display_value(Some(&AnswerValue::Number(7.5))), "7.5");
    assert_eq!(
        display_value(Some(&AnswerValue::Text("Male".to_string()))),
        "Male"
    );
}

#[test]
fn summary_lists_every_field_in_display_order() {
    let now: jiff::Timestamp = "2024-01-15T10:00:00Z".parse().unwrap();
    let form = health_fitness::definition(now);

    let mut answers = HashMap::new();
    answers.insert("age".to_string(), AnswerValue::Number(36.0));
    answers.insert(
        "medical_conditions".to_string(),
        AnswerValue::Selections(vec!["None".to_string()]),
    );

    let response = AssessmentResponse {
        id: "resp_test".to_string(),
        assessment_type_id: form.id.clone(),
        user_id: "2".to_string(),
        answers,
        completed_at: now,
        score: Some(25),
    };

    let summary = response_summary(&form, &response);
    assert!(summary.starts_with("## Health & Fitness Assessment"));
    assert!(summary.contains("- Age: 36\n"));
    assert!(summary.contains("- Medical Conditions: None\n"));
    assert!(summary.contains("- Fitness Goals: Not provided\n"));

    // One line per field, after the heading.
    let lines = summary.lines().filter(|l| l.starts_with("- ")).count();
    assert_eq!(lines, form.fields.len());
}
