use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How the results view should color an insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Success,
    Good,
    Warning,
    Error,
    Info,
}

/// A derived, human-readable finding about one response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Insight {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}
