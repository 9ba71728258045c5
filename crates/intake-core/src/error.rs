use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("duplicate field id: {0}")]
    DuplicateFieldId(String),

    #[error("field '{0}' needs at least one option")]
    MissingOptions(String),

    #[error("field '{0}' does not take options")]
    UnexpectedOptions(String),
}
