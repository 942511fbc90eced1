//! Configuration option store logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OptionClient;
use crate::framework::ResourceActor;
use crate::model::ConfigOption;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Option actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<ConfigOption>, OptionClient) {
    let option_id_counter = Arc::new(AtomicU64::new(1));
    let next_option_id = move || {
        let id = option_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("option_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_option_id);
    let client = OptionClient::new(generic_client);

    (actor, client)
}
