use intake_core::models::{AssessmentType, FieldKind};

use super::{choice, number, plain};

pub const TYPE_ID: &str = "as_hr_02";

/// Health & Fitness Assessment: self-reported vitals, activity, and goals.
pub fn definition(now: jiff::Timestamp) -> AssessmentType {
    AssessmentType {
        id: TYPE_ID.to_string(),
        title: "Health & Fitness Assessment".to_string(),
        description: "Comprehensive health and fitness evaluation".to_string(),
        category: "Health".to_string(),
        fields: vec![
            number("age", "Age", true, 1.0, 120.0),
            choice(
                FieldKind::Radio,
                "gender",
                "Gender",
                true,
                &["Male", "Female", "Other"],
            ),
            number("height", "Height (cm)", true, 50.0, 250.0),
            number("weight", "Weight (kg)", true, 20.0, 300.0),
            choice(
                FieldKind::Select,
                "activity_level",
                "Activity Level",
                true,
                &[
                    "Sedentary",
                    "Lightly Active",
                    "Moderately Active",
                    "Very Active",
                    "Extremely Active",
                ],
            ),
            choice(
                FieldKind::Checkbox,
                "medical_conditions",
                "Medical Conditions",
                false,
                &["Diabetes", "Hypertension", "Heart Disease", "Asthma", "None"],
            ),
            plain(FieldKind::TextArea, "fitness_goals", "Fitness Goals", true),
            number(
                "exercise_frequency",
                "Exercise Frequency (per week)",
                true,
                0.0,
                14.0,
            ),
        ],
        created_at: now,
        updated_at: now,
    }
}
