//! Pure data structures (DTOs) implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod option;
pub mod page;

pub use option::*;
pub use page::*;
