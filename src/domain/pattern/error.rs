//! Pattern error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised by the pure pattern functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Invalid email format: '{0}' has no '@' delimiter")]
    InvalidEmailFormat(String),

    #[error("Field '{field}' cannot be empty")]
    EmptyInput { field: &'static str },
}

impl PatternError {
    /// Creates an empty input error for the named field.
    pub fn empty(field: &'static str) -> Self {
        PatternError::EmptyInput { field }
    }
}

impl From<PatternError> for DomainError {
    fn from(err: PatternError) -> Self {
        match &err {
            PatternError::InvalidEmailFormat(_) => {
                DomainError::new(ErrorCode::MalformedEmail, err.to_string())
            }
            PatternError::EmptyInput { field } => {
                DomainError::new(ErrorCode::EmptyInput, err.to_string()).with_detail("field", *field)
            }
        }
    }
}
