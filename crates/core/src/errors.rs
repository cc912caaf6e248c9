//! Core error types for the incentives overlay.
//!
//! Nothing in the derivation pipeline is fatal: malformed records degrade a
//! single card instead of failing the render. These errors surface only at the
//! boundaries, when a replicant payload or a configuration value is rejected.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the overlay core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Replicant '{name}' rejected: {message}")]
    Replicant { name: String, message: String },

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

impl Error {
    /// Creates a Replicant error.
    pub fn replicant(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Replicant {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Validation errors for snapshot data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown replicant: {0}")]
    UnknownReplicant(String),

    #[error("Amount '{0}' is negative")]
    NegativeAmount(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::replicant("targets", "expected a sequence");
        assert_eq!(
            err.to_string(),
            "Replicant 'targets' rejected: expected a sequence"
        );

        let err: Error = ValidationError::UnknownReplicant("donations".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Input validation failed: Unknown replicant: donations"
        );
    }

    #[test]
    fn test_json_error_maps_to_validation() {
        let json_err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidInput(_))
        ));
    }
}
