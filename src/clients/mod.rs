//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod option_client;
pub mod page_client;

pub use actor_client::*;
pub use option_client::*;
pub use page_client::*;
