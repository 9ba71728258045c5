use intake_core::models::{AnswerMap, AssessmentType};

/// How many fields of the assessment carry a non-empty answer.
pub fn answered_count(assessment: &AssessmentType, answers: &AnswerMap) -> usize {
    assessment
        .fields
        .iter()
        .filter(|field| answers.get(&field.id).is_some_and(|v| !v.is_empty()))
        .count()
}

/// Completion percentage, rounded to the nearest integer. This is a
/// completion-rate proxy, not a graded score — assessments carry no
/// notion of a correct answer. A field-less assessment scores 0.
pub fn completion_score(assessment: &AssessmentType, answers: &AnswerMap) -> u8 {
    if assessment.fields.is_empty() {
        return 0;
    }
    let answered = answered_count(assessment, answers) as f64;
    let total = assessment.fields.len() as f64;
    (answered / total * 100.0).round() as u8
}
