//! Error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by the timetabling engine.
///
/// A session that cannot be placed is not an error; it only shows up in
/// the failure counter.
#[derive(Debug, Error)]
pub enum TimetableError {
    /// The caller supplied sessions, rooms or configuration that break
    /// the input contract. Carries every problem found.
    #[error("invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),
}

impl TimetableError {
    /// The validation errors behind an `InvalidInput`.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            TimetableError::InvalidInput(errors) => errors,
        }
    }
}

impl From<Vec<ValidationError>> for TimetableError {
    fn from(errors: Vec<ValidationError>) -> Self {
        TimetableError::InvalidInput(errors)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, TimetableError>;
