use intake_core::models::{AnswerValue, AssessmentResponse, AssessmentType};

/// Format one answer the way the results view shows it.
pub fn display_value(value: Option<&AnswerValue>) -> String {
    match value {
        None => "Not provided".to_string(),
        Some(AnswerValue::Text(text)) if text.is_empty() => "Not provided".to_string(),
        Some(AnswerValue::Text(text)) => text.clone(),
        Some(AnswerValue::Number(n)) => n.to_string(),
        Some(AnswerValue::Selections(picked)) => {
            if picked.is_empty() {
                "None selected".to_string()
            } else {
                picked.join(", ")
            }
        }
    }
}

/// Format a whole response as structured text, one labeled line per field
/// in display order. Used for print/export of the results view.
pub fn response_summary(assessment: &AssessmentType, response: &AssessmentResponse) -> String {
    let mut output = format!("## {}\n\n", assessment.title);
    for field in &assessment.fields {
        let value = display_value(response.answers.get(&field.id));
        output.push_str(&format!("- {}: {}\n", field.label, value));
    }
    output
}
