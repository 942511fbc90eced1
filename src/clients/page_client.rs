use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::host::{HostError, PageStore};
use crate::model::{Page, PageCreate, PageUpdate};
use crate::page_actor::PageError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Page actor.
///
/// Serves the [`PageStore`] collaborator contract and also exposes the edits an
/// administrator can make outside provisioning (renaming a slug, unpublishing a page).
#[derive(Clone)]
pub struct PageClient {
    inner: ResourceClient<Page>,
}

impl PageClient {
    pub fn new(inner: ResourceClient<Page>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn find_page(&self, slug: &str) -> Result<Option<Page>, PageError> {
        debug!("Sending request");
        let slug = slug.to_owned();
        self.inner
            .find(move |page: &Page| page.slug == slug)
            .await
            .map_err(PageError::from)
    }

    #[instrument(skip(self, params), fields(slug = %params.slug))]
    pub async fn add_page(&self, params: PageCreate) -> Result<Page, PageError> {
        debug!(?params, "add_page called");
        self.inner.create(params).await.map_err(PageError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_page(&self, id: String, update: PageUpdate) -> Result<Page, PageError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(PageError::from)
    }

    /// Moves the page currently at `from` to the slug `to`.
    #[instrument(skip(self))]
    pub async fn rename_slug(&self, from: &str, to: &str) -> Result<Page, PageError> {
        let page = self
            .find_page(from)
            .await?
            .ok_or_else(|| PageError::NotFound(from.to_string()))?;
        self.update_page(page.id, PageUpdate::slug(to)).await
    }
}

#[async_trait]
impl ActorClient<Page> for PageClient {
    type Error = PageError;

    fn inner(&self) -> &ResourceClient<Page> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        PageError::from(e)
    }
}

#[async_trait]
impl PageStore for PageClient {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Page>, HostError> {
        Ok(self.find_page(slug).await?)
    }

    async fn create_page(&self, page: PageCreate) -> Result<Page, HostError> {
        Ok(self.add_page(page).await?)
    }
}
