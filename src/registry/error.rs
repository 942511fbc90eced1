//! Error types for component registration.

use super::{ComponentContext, ComponentId};
use thiserror::Error;

/// Errors raised while building a [`ComponentRegistry`](super::ComponentRegistry).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    /// The identifier is already registered (in this or another context list).
    #[error("component {id} is already registered in the {existing:?} list")]
    DuplicateComponent {
        id: ComponentId,
        existing: ComponentContext,
    },

    /// Identifiers are non-empty lowercase ASCII with underscores.
    #[error("invalid component identifier: {0:?}")]
    InvalidIdentifier(&'static str),
}
