//! Error types for the analysis domain.

use thiserror::Error;

/// Errors raised while normalizing an invocation event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} parameter is required")]
    MissingParameter { field: &'static str },
}

impl ValidationError {
    /// Creates a missing parameter error.
    pub fn missing_parameter(field: &'static str) -> Self {
        ValidationError::MissingParameter { field }
    }

    /// Returns the name of the offending event field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingParameter { field } => field,
        }
    }
}

/// Errors raised while reading the model reply envelope.
///
/// A reply whose answer text is not JSON is not an error; see
/// [`ParsedModelOutput`](super::ParsedModelOutput).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelOutputError {
    #[error("model response is not a valid envelope: {0}")]
    InvalidEnvelope(String),

    #[error("model response contained no content blocks")]
    NoContent,

    #[error("first content block has no text")]
    MissingText,
}
