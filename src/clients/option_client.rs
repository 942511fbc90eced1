use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::host::{HostError, OptionStore};
use crate::model::{ConfigOption, OptionCreate, OptionUpdate};
use crate::option_actor::OptionError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Option actor.
#[derive(Clone)]
pub struct OptionClient {
    inner: ResourceClient<ConfigOption>,
}

impl OptionClient {
    pub fn new(inner: ResourceClient<ConfigOption>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn find_option(&self, key: &str) -> Result<Option<ConfigOption>, OptionError> {
        debug!("Sending request");
        let key = key.to_owned();
        self.inner
            .find(move |option: &ConfigOption| option.key == key)
            .await
            .map_err(OptionError::from)
    }

    /// Stores a new option. Fails with [`OptionError::AlreadyExists`] if `key` is taken.
    #[instrument(skip(self, value))]
    pub async fn insert(&self, key: &str, value: String) -> Result<ConfigOption, OptionError> {
        debug!("Sending request");
        let params = OptionCreate {
            key: key.to_owned(),
            value,
        };
        self.inner.create(params).await.map_err(OptionError::from)
    }

    /// Inserts or replaces the value stored under `key`. This is an administrator's
    /// explicit write; provisioning only ever uses [`insert`](Self::insert).
    ///
    /// If another writer inserts the key between the lookup and the insert, the store
    /// rejects the insert and the value is written over the winner's record instead.
    #[instrument(skip(self, value))]
    pub async fn upsert(&self, key: &str, value: String) -> Result<ConfigOption, OptionError> {
        if let Some(existing) = self.find_option(key).await? {
            return self.replace(existing.id, value).await;
        }

        let params = OptionCreate {
            key: key.to_owned(),
            value: value.clone(),
        };
        match self.inner.create(params).await {
            Ok(created) => Ok(created),
            Err(FrameworkError::Conflict(_)) => {
                debug!("Lost insert race, updating instead");
                let existing = self
                    .find_option(key)
                    .await?
                    .ok_or_else(|| OptionError::NotFound(key.to_string()))?;
                self.replace(existing.id, value).await
            }
            Err(e) => Err(OptionError::from(e)),
        }
    }

    /// Removes `key` entirely, returning whether it existed.
    #[instrument(skip(self))]
    pub async fn remove(&self, key: &str) -> Result<bool, OptionError> {
        match self.find_option(key).await? {
            Some(existing) => {
                self.delete(existing.id).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn replace(&self, id: String, value: String) -> Result<ConfigOption, OptionError> {
        self.inner
            .update(id, OptionUpdate { value })
            .await
            .map_err(OptionError::from)
    }
}

#[async_trait]
impl ActorClient<ConfigOption> for OptionClient {
    type Error = OptionError;

    fn inner(&self) -> &ResourceClient<ConfigOption> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OptionError::from(e)
    }
}

#[async_trait]
impl OptionStore for OptionClient {
    async fn get_option(&self, key: &str) -> Result<Option<String>, HostError> {
        Ok(self.find_option(key).await?.map(|option| option.value))
    }

    async fn add_option(&self, key: &str, value: String) -> Result<(), HostError> {
        self.insert(key, value).await?;
        Ok(())
    }
}
