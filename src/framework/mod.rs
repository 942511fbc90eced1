//! Generic actor framework backing the in-memory host stores.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that persisted record types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns records and enforces unique keys
//! - [`ResourceClient`] - Typed handle for sending requests to a `ResourceActor`
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test store clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
