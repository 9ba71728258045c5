use uuid::Uuid;

/// Prefixed random tokens. The store treats a collision on insert as the
/// fatal `DuplicateId` error rather than retrying.
pub fn new_assessment_type_id() -> String {
    format!("as_{}", Uuid::new_v4().simple())
}

pub fn new_response_id() -> String {
    format!("resp_{}", Uuid::new_v4().simple())
}
