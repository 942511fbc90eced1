//! Entity trait implementation for the [`Page`] record.
//!
//! Slugs are validated on create and on rename, and the slug is the store-wide unique
//! key, so the page actor behaves like a host page table with a unique slug index.

use crate::framework::ActorEntity;
use crate::model::{Page, PageCreate, PageUpdate};
use async_trait::async_trait;

/// Checks that a slug is a non-empty run of lowercase ASCII letters, digits and dashes.
pub fn validate_slug(slug: &str) -> Result<(), String> {
    if slug.is_empty() {
        return Err("slug must not be empty".to_string());
    }
    if let Some(c) = slug
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Err(format!("slug {slug:?} contains invalid character {c:?}"));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Page {
    type Id = String;
    type CreateParams = PageCreate;
    type UpdateParams = PageUpdate;
    type Context = ();

    fn from_create_params(id: String, params: PageCreate) -> Result<Self, String> {
        validate_slug(&params.slug)?;
        Ok(Self {
            id,
            title: params.title,
            body: params.body,
            slug: params.slug,
            status: params.status,
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.slug.clone())
    }

    /// Applies an edit.
    ///
    /// # Fields Updated
    /// - `slug`: Canonical slug (validated)
    /// - `status`: Publication status
    async fn on_update(&mut self, update: PageUpdate, _ctx: &Self::Context) -> Result<(), String> {
        if let Some(slug) = update.slug {
            validate_slug(&slug)?;
            self.slug = slug;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        Ok(())
    }
}
