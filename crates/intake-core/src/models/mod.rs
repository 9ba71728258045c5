pub mod activity;
pub mod actor;
pub mod answer;
pub mod assessment_type;
pub mod field;
pub mod response;

pub use activity::UserActivity;
pub use actor::{Actor, Role};
pub use answer::{AnswerMap, AnswerValue};
pub use assessment_type::{AssessmentType, AssessmentTypeUpdate, NewAssessmentType};
pub use field::{AssessmentField, FieldKind, FieldRules, check_fields};
pub use response::{AssessmentResponse, NewResponse};
