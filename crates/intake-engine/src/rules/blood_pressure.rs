use intake_core::models::{AssessmentResponse, AssessmentType, FieldKind};

use crate::InsightRule;
use crate::insight::{Insight, Severity};

pub const SYSTOLIC_FIELD: &str = "blood_pressure_systolic";
pub const DIASTOLIC_FIELD: &str = "blood_pressure_diastolic";

/// Blood-pressure staging per the fixed ACC/AHA cutoffs, for assessments
/// that record systolic and diastolic readings as number fields.
pub struct BloodPressureRule;

impl InsightRule for BloodPressureRule {
    fn id(&self) -> &str {
        "blood_pressure"
    }

    fn applies(&self, assessment: &AssessmentType) -> bool {
        has_number_field(assessment, SYSTOLIC_FIELD)
            && has_number_field(assessment, DIASTOLIC_FIELD)
    }

    fn evaluate(
        &self,
        _assessment: &AssessmentType,
        response: &AssessmentResponse,
    ) -> Option<Insight> {
        let systolic = response.answers.get(SYSTOLIC_FIELD)?.as_number()?;
        let diastolic = response.answers.get(DIASTOLIC_FIELD)?.as_number()?;

        let (severity, description) = category(systolic, diastolic);

        Some(Insight {
            severity,
            title: format!("Blood Pressure: {systolic}/{diastolic} mmHg"),
            description: description.to_string(),
        })
    }
}

fn has_number_field(assessment: &AssessmentType, id: &str) -> bool {
    matches!(assessment.field(id), Some(field) if field.kind == FieldKind::Number)
}

/// Staged in order; the first band that matches wins.
fn category(systolic: f64, diastolic: f64) -> (Severity, &'static str) {
    if systolic < 120.0 && diastolic < 80.0 {
        (Severity::Success, "Normal blood pressure")
    } else if systolic < 130.0 && diastolic < 80.0 {
        (Severity::Warning, "Elevated blood pressure")
    } else if (130.0..140.0).contains(&systolic) || (80.0..90.0).contains(&diastolic) {
        (Severity::Warning, "Stage 1 Hypertension")
    } else {
        (Severity::Error, "Stage 2 Hypertension - Consult a physician")
    }
}
