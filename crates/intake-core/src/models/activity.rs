use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Per-user dashboard rollup, derived from the stored collections on
/// every read. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserActivity {
    pub total_types: u32,
    pub completed: u32,
    pub pending: u32,
    /// Completed over available, as a percentage capped at 100.
    pub completion_rate: u8,
}
