//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber.
//!
//! - **Structured logging** with `tracing` fields (`slug`, `key`, `component`, `step`)
//! - **Spans** around `init`, `activate` and `deactivate`
//! - **Configurable levels** via `RUST_LOG`, falling back to the configured filter
//! - **Compact format** without module prefixes
//!
//! ```bash
//! # Provisioning decisions only
//! RUST_LOG=info cargo run
//!
//! # Every lookup, skip and store message
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a fresh install reads:
//!
//! ```text
//! INFO activate: Provisioning step completed step="schema"
//! INFO activate: Provisioning step completed step="roles"
//! INFO activate:provision: Page created slug="lms-login" id=page_1
//! INFO activate:provision: Option seeded key="lms_auth_social_login_google"
//! ```
//!
//! A second activation logs no `Page created`/`Option seeded` lines; the skips show up at `debug`.

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber. Call once, at process start.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (e.g. `"info"`) is used.
pub fn setup_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths
        .compact()
        .init();
}
