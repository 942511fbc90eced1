//! Page store logic and entity implementation.

pub mod entity;
pub mod error;

pub use entity::validate_slug;
pub use error::*;

use crate::clients::PageClient;
use crate::framework::ResourceActor;
use crate::model::Page;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new Page actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Page>, PageClient) {
    let page_id_counter = Arc::new(AtomicU64::new(1));
    let next_page_id = move || {
        let id = page_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("page_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_page_id);
    let client = PageClient::new(generic_client);

    (actor, client)
}
