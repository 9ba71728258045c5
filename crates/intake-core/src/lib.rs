//! intake-core
//!
//! Pure domain types for the assessment platform: field and assessment
//! definitions, responses, answers, and actors. No I/O — this is the
//! shared vocabulary of the intake system.

pub mod error;
pub mod models;
