//! Error types for the lifecycle layer.

use crate::registry::RequestContext;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum LifecycleError {
    /// `init` already ran in this process.
    #[error("orchestrator already initialized for {0:?} request")]
    AlreadyInitialized(RequestContext),
}
