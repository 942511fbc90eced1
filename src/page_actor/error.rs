//! Error types for the Page actor.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during page operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PageError {
    /// The requested page was not found.
    #[error("Page not found: {0}")]
    NotFound(String),

    /// Another page already uses this slug.
    #[error("Page slug already in use: {0}")]
    SlugTaken(String),

    /// The page data provided is invalid.
    #[error("Page validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for PageError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => PageError::NotFound(id),
            FrameworkError::Conflict(slug) => PageError::SlugTaken(slug),
            FrameworkError::Custom(msg) => PageError::ValidationError(msg),
            other => PageError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<String> for PageError {
    fn from(msg: String) -> Self {
        PageError::ActorCommunicationError(msg)
    }
}
