//! Entity trait implementation for [`ConfigOption`].
//!
//! The option key is the unique key; the value is free-form and may be empty.

use crate::framework::ActorEntity;
use crate::model::{ConfigOption, OptionCreate, OptionUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for ConfigOption {
    type Id = String;
    type CreateParams = OptionCreate;
    type UpdateParams = OptionUpdate;
    type Context = ();

    fn from_create_params(id: String, params: OptionCreate) -> Result<Self, String> {
        if params.key.trim().is_empty() {
            return Err("option key must not be blank".to_string());
        }
        Ok(Self {
            id,
            key: params.key,
            value: params.value,
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.key.clone())
    }

    async fn on_update(&mut self, update: OptionUpdate, _ctx: &Self::Context) -> Result<(), String> {
        self.value = update.value;
        Ok(())
    }
}
