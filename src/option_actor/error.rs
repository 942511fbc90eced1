//! Error types for the Option actor.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during configuration option operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OptionError {
    /// The requested option was not found.
    #[error("Option not found: {0}")]
    NotFound(String),

    /// An option with this key already exists.
    #[error("Option already exists: {0}")]
    AlreadyExists(String),

    /// The option data provided is invalid.
    #[error("Option validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OptionError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => OptionError::NotFound(id),
            FrameworkError::Conflict(key) => OptionError::AlreadyExists(key),
            FrameworkError::Custom(msg) => OptionError::ValidationError(msg),
            other => OptionError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<String> for OptionError {
    fn from(msg: String) -> Self {
        OptionError::ActorCommunicationError(msg)
    }
}
