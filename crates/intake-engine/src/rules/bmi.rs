use intake_core::models::{AssessmentResponse, AssessmentType, FieldKind};

use crate::InsightRule;
use crate::insight::{Insight, Severity};

pub const HEIGHT_FIELD: &str = "height";
pub const WEIGHT_FIELD: &str = "weight";

/// Body-mass index, for assessments that measure height (cm) and
/// weight (kg) as number fields.
pub struct BmiRule;

impl InsightRule for BmiRule {
    fn id(&self) -> &str {
        "bmi"
    }

    fn applies(&self, assessment: &AssessmentType) -> bool {
        has_number_field(assessment, HEIGHT_FIELD) && has_number_field(assessment, WEIGHT_FIELD)
    }

    fn evaluate(
        &self,
        _assessment: &AssessmentType,
        response: &AssessmentResponse,
    ) -> Option<Insight> {
        let height_cm = response.answers.get(HEIGHT_FIELD)?.as_number()?;
        let weight_kg = response.answers.get(WEIGHT_FIELD)?.as_number()?;
        if height_cm <= 0.0 || weight_kg <= 0.0 {
            return None;
        }

        let height_m = height_cm / 100.0;
        let bmi = weight_kg / (height_m * height_m);

        Some(Insight {
            severity: Severity::Info,
            title: format!("BMI: {bmi:.1}"),
            description: category(bmi).to_string(),
        })
    }
}

fn has_number_field(assessment: &AssessmentType, id: &str) -> bool {
    matches!(assessment.field(id), Some(field) if field.kind == FieldKind::Number)
}

fn category(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "Underweight"
    } else if bmi < 25.0 {
        "Normal weight"
    } else if bmi < 30.0 {
        "Overweight"
    } else {
        "Obese"
    }
}
