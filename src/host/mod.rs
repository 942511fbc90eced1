//! Collaborator contracts between the bootstrap layer and the hosting platform.
//!
//! The orchestrator never talks to the platform directly. Everything it needs
//! (schema, roles, pages, options, route rebuilds, translations) goes through these
//! traits, bundled into [`HostServices`]. [`memory`] provides an in-process host used by
//! the demo binary and the tests.

pub mod memory;

pub use memory::MemoryHost;

use crate::model::{Page, PageCreate};
use crate::option_actor::OptionError;
use crate::page_actor::PageError;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Failure reported by a host collaborator.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HostError {
    /// A record with the same unique key already exists.
    #[error("already exists: {0}")]
    Conflict(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// The host refused the data.
    #[error("rejected: {0}")]
    Rejected(String),

    /// The host could not be reached or gave up.
    #[error("host unavailable: {0}")]
    Unavailable(String),
}

impl From<PageError> for HostError {
    fn from(e: PageError) -> Self {
        match e {
            PageError::NotFound(id) => HostError::NotFound(id),
            PageError::SlugTaken(slug) => HostError::Conflict(slug),
            PageError::ValidationError(msg) => HostError::Rejected(msg),
            PageError::ActorCommunicationError(msg) => HostError::Unavailable(msg),
        }
    }
}

impl From<OptionError> for HostError {
    fn from(e: OptionError) -> Self {
        match e {
            OptionError::NotFound(key) => HostError::NotFound(key),
            OptionError::AlreadyExists(key) => HostError::Conflict(key),
            OptionError::ValidationError(msg) => HostError::Rejected(msg),
            OptionError::ActorCommunicationError(msg) => HostError::Unavailable(msg),
        }
    }
}

/// Creates or upgrades the add-on's database tables. Must be idempotent.
#[async_trait]
pub trait SchemaManager: Send + Sync {
    async fn ensure_schema(&self) -> Result<(), HostError>;
}

/// Creates the add-on's roles and capabilities. Must be idempotent.
#[async_trait]
pub trait RoleManager: Send + Sync {
    async fn ensure_roles(&self) -> Result<(), HostError>;
}

/// The host's page table. Slugs are unique across it.
#[async_trait]
pub trait PageStore: Send + Sync {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Page>, HostError>;

    /// Persists a new page. Fails with [`HostError::Conflict`] if the slug is taken.
    async fn create_page(&self, page: PageCreate) -> Result<Page, HostError>;
}

/// The host's option table. Keys are unique across it.
#[async_trait]
pub trait OptionStore: Send + Sync {
    /// `Ok(None)` means the key is absent, which is different from a key holding the
    /// empty string.
    async fn get_option(&self, key: &str) -> Result<Option<String>, HostError>;

    /// Stores `value` under a key that does not exist yet. Fails with
    /// [`HostError::Conflict`] if the key is already present, whatever its value.
    async fn add_option(&self, key: &str, value: String) -> Result<(), HostError>;
}

/// Asks the host to recompute its URL routing. Fire-and-forget.
pub trait RouteRebuilder: Send + Sync {
    fn schedule_rebuild(&self);
}

/// Loads localized strings for a text domain.
#[async_trait]
pub trait TextDomainLoader: Send + Sync {
    async fn load_text_domain(&self, domain: &str) -> Result<(), HostError>;
}

/// Every collaborator the bootstrap layer consumes, injected at process start.
#[derive(Clone)]
pub struct HostServices {
    pub schema: Arc<dyn SchemaManager>,
    pub roles: Arc<dyn RoleManager>,
    pub pages: Arc<dyn PageStore>,
    pub options: Arc<dyn OptionStore>,
    pub routes: Arc<dyn RouteRebuilder>,
    pub text: Arc<dyn TextDomainLoader>,
}
