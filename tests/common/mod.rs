#![allow(dead_code)]

use async_trait::async_trait;
use lms_bootstrap::clients::OptionClient;
use lms_bootstrap::components;
use lms_bootstrap::config::BootstrapConfig;
use lms_bootstrap::host::{HostError, HostServices, OptionStore, RoleManager, SchemaManager};
use lms_bootstrap::lifecycle::Bootstrap;

/// Bootstrap over the given collaborators with the add-on's real component registry.
pub fn bootstrap(services: HostServices) -> Bootstrap {
    bootstrap_with(services, BootstrapConfig::default())
}

pub fn bootstrap_with(services: HostServices, config: BootstrapConfig) -> Bootstrap {
    let registry = components::default_registry().expect("default registry is valid");
    Bootstrap::new(services, registry, config)
}

/// Role collaborator that always fails.
pub struct FailingRoles;

#[async_trait]
impl RoleManager for FailingRoles {
    async fn ensure_roles(&self) -> Result<(), HostError> {
        Err(HostError::Unavailable("role table locked".into()))
    }
}

/// Schema collaborator that always fails.
pub struct FailingSchema;

#[async_trait]
impl SchemaManager for FailingSchema {
    async fn ensure_schema(&self) -> Result<(), HostError> {
        Err(HostError::Rejected("insufficient privileges".into()))
    }
}

/// Option store over the real actor where a user saves `key` right after the
/// provisioner has looked it up and found nothing.
pub struct UserWritesAfterLookup {
    pub options: OptionClient,
    pub key: &'static str,
    pub value: &'static str,
}

#[async_trait]
impl OptionStore for UserWritesAfterLookup {
    async fn get_option(&self, key: &str) -> Result<Option<String>, HostError> {
        let current = self.options.get_option(key).await?;
        if key == self.key && current.is_none() {
            self.options.upsert(key, self.value.to_string()).await?;
        }
        Ok(current)
    }

    async fn add_option(&self, key: &str, value: String) -> Result<(), HostError> {
        self.options.add_option(key, value).await
    }
}
