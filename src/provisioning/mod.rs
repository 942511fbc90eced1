//! Idempotent provisioning: the baseline state the host must converge to.
//!
//! - [`pages::PAGE_DIRECTORY`] - pages that must exist
//! - [`defaults::CONFIG_DEFAULTS`] - options that must exist
//! - [`ProvisioningEngine`] - schema, roles, pages, defaults; safe to run any number of times

pub mod defaults;
pub mod engine;
pub mod pages;
pub mod report;

pub use defaults::*;
pub use engine::*;
pub use pages::*;
pub use report::*;
