//! Contract-violation errors for outcome operations.
//!
//! Expected, business-level failures never show up here: they are diagnostic
//! items carried in an outcome's log. [`OutcomeError`] is reserved for misuse
//! of the API itself, such as reading the value of an outcome that has none.

use thiserror::Error;

/// Error raised when a caller violates a precondition of the outcome API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OutcomeError {
    /// The value of an outcome without a value was requested.
    ///
    /// `rendering` is the diagnostic summary of the outcome at the time of the
    /// request, so the failure describes itself.
    #[error(
        "The result '{rendering}' does not have a value. Use 'has_value' to check if a result has a value."
    )]
    ValueNotPresent { rendering: String },

    /// A required argument was missing.
    #[error("{argument} must not be missing.")]
    ArgumentMissing { argument: &'static str },
}

impl OutcomeError {
    /// Create a [`OutcomeError::ValueNotPresent`] for the given rendering.
    pub fn value_not_present(rendering: impl Into<String>) -> Self {
        Self::ValueNotPresent {
            rendering: rendering.into(),
        }
    }

    /// Create a [`OutcomeError::ArgumentMissing`] for the named argument.
    pub const fn argument_missing(argument: &'static str) -> Self {
        Self::ArgumentMissing { argument }
    }
}

/// Result type alias for fallible outcome operations.
pub type Result<T> = std::result::Result<T, OutcomeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_not_present_message_embeds_rendering() {
        let err = OutcomeError::value_not_present("ERROR");
        assert_eq!(
            err.to_string(),
            "The result 'ERROR' does not have a value. Use 'has_value' to check if a result has a value."
        );
    }

    #[test]
    fn test_argument_missing_names_argument() {
        let err = OutcomeError::argument_missing("item");
        assert_eq!(err.to_string(), "item must not be missing.");
    }
}
