//! intake-engine
//!
//! The assessment engine: generic field validation, completion scoring,
//! and result interpretation. Pure functions over intake-core types —
//! no storage, no widgets.

pub mod insight;
pub mod render;
pub mod rules;
pub mod scoring;
pub mod templates;
pub mod validate;

use intake_core::models::{AssessmentResponse, AssessmentType};

use crate::insight::Insight;

/// Trait implemented by each result-interpretation rule.
///
/// Rules match on the shape of an assessment (which fields it carries),
/// not on a hardcoded template id, so new templates get interpretation
/// for free when their field layout fits an existing rule.
pub trait InsightRule: Send + Sync {
    /// Unique identifier for this rule (e.g., "bmi", "blood_pressure").
    fn id(&self) -> &str;

    /// Whether this rule knows how to read the given assessment.
    fn applies(&self, assessment: &AssessmentType) -> bool;

    /// Derive an insight from a response, or nothing when the answers it
    /// needs are missing or unreadable.
    fn evaluate(
        &self,
        assessment: &AssessmentType,
        response: &AssessmentResponse,
    ) -> Option<Insight>;
}

/// Return all registered rules, in presentation order.
pub fn all_rules() -> Vec<Box<dyn InsightRule>> {
    vec![
        Box::new(rules::completion::CompletionRule),
        Box::new(rules::bmi::BmiRule),
        Box::new(rules::blood_pressure::BloodPressureRule),
    ]
}

/// Run every applicable rule against a response. Recomputed on each view;
/// the result is never persisted.
pub fn derive_insights(
    assessment: &AssessmentType,
    response: &AssessmentResponse,
) -> Vec<Insight> {
    all_rules()
        .iter()
        .filter(|rule| rule.applies(assessment))
        .filter_map(|rule| rule.evaluate(assessment, response))
        .collect()
}
