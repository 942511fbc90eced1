use serde::{Deserialize, Serialize};

/// Publication status of a persisted page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    Published,
    Draft,
}

/// A page persisted in the host's page namespace.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
/// The slug is the store-wide unique key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub title: String,
    pub body: String,
    pub slug: String,
    pub status: PageStatus,
}

/// Payload for creating a new page.
#[derive(Debug, Clone)]
pub struct PageCreate {
    pub title: String,
    pub body: String,
    pub slug: String,
    pub status: PageStatus,
}

/// Payload for an administrator's edit: renaming the slug or unpublishing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageUpdate {
    pub slug: Option<String>,
    pub status: Option<PageStatus>,
}

impl PageUpdate {
    /// Update that only changes the slug.
    pub fn slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Self::default()
        }
    }
}
