use intake_core::models::{AssessmentType, FieldKind};

use super::{choice, number, plain};

pub const TYPE_ID: &str = "as_card_01";

/// Cardiac Assessment: vitals, lipids, and cardiovascular risk factors.
pub fn definition(now: jiff::Timestamp) -> AssessmentType {
    AssessmentType {
        id: TYPE_ID.to_string(),
        title: "Cardiac Assessment".to_string(),
        description: "Cardiovascular health evaluation and risk assessment".to_string(),
        category: "Medical".to_string(),
        fields: vec![
            plain(FieldKind::Text, "patient_id", "Patient ID", true),
            number(
                "blood_pressure_systolic",
                "Systolic BP (mmHg)",
                true,
                70.0,
                250.0,
            ),
            number(
                "blood_pressure_diastolic",
                "Diastolic BP (mmHg)",
                true,
                40.0,
                150.0,
            ),
            number("heart_rate", "Heart Rate (bpm)", true, 30.0, 200.0),
            number(
                "cholesterol_total",
                "Total Cholesterol (mg/dL)",
                true,
                100.0,
                400.0,
            ),
            number(
                "cholesterol_hdl",
                "HDL Cholesterol (mg/dL)",
                true,
                20.0,
                100.0,
            ),
            number(
                "cholesterol_ldl",
                "LDL Cholesterol (mg/dL)",
                true,
                50.0,
                300.0,
            ),
            choice(
                FieldKind::Select,
                "smoking_status",
                "Smoking Status",
                true,
                &["Never", "Former", "Current"],
            ),
            choice(
                FieldKind::Radio,
                "family_history",
                "Family History of Heart Disease",
                true,
                &["Yes", "No"],
            ),
            choice(
                FieldKind::Checkbox,
                "chest_pain",
                "Chest Pain Symptoms",
                false,
                &["At Rest", "During Exercise", "After Meals", "None"],
            ),
            plain(FieldKind::Date, "assessment_date", "Assessment Date", true),
        ],
        created_at: now,
        updated_at: now,
    }
}
