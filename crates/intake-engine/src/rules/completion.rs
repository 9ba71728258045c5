use intake_core::models::{AssessmentResponse, AssessmentType};

use crate::InsightRule;
use crate::insight::{Insight, Severity};

/// Grades how thoroughly the respondent filled in the form. Applies to
/// every assessment that recorded a completion score.
pub struct CompletionRule;

impl InsightRule for CompletionRule {
    fn id(&self) -> &str {
        "completion"
    }

    fn applies(&self, _assessment: &AssessmentType) -> bool {
        true
    }

    fn evaluate(
        &self,
        _assessment: &AssessmentType,
        response: &AssessmentResponse,
    ) -> Option<Insight> {
        let score = response.score?;

        let (severity, title, description) = if score >= 90 {
            (
                Severity::Success,
                "Excellent Completion",
                "You provided comprehensive information across all assessment areas.",
            )
        } else if score >= 70 {
            (
                Severity::Good,
                "Good Completion",
                "Most assessment areas were completed thoroughly.",
            )
        } else {
            (
                Severity::Warning,
                "Partial Completion",
                "Consider completing remaining fields for a more comprehensive assessment.",
            )
        };

        Some(Insight {
            severity,
            title: title.to_string(),
            description: description.to_string(),
        })
    }
}
