//! Error types for model operations, drivers and scenario loading

use thiserror::Error;

use crate::domain::{Address, ValidationError};

/// Errors that can occur while operating on a model
#[derive(Debug, Error)]
pub enum ModelError {
    /// An argument was outside the operation's declared domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(ValidationError),

    /// A state invariant does not hold
    #[error("Invariant violated: {0}")]
    InvariantViolation(ValidationError),

    /// A command's contract between old and new state does not hold
    #[error("Postcondition violated: {0}")]
    PostconditionViolated(ValidationError),

    /// Balance arithmetic overflowed
    #[error("Balance overflow for address {address}: {balance} + {amount}")]
    Overflow {
        address: Address,
        balance: i64,
        amount: i64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Scenario file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Scenario file could not be parsed
    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
}

impl ModelError {
    /// The validation failure carried by this error, if any
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            ModelError::InvalidArgument(e)
            | ModelError::InvariantViolation(e)
            | ModelError::PostconditionViolated(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;
