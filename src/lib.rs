//! # LMS Bootstrap
//!
//! > **Bring the learning-management add-on up in order, once, and converge its host.**
//!
//! This crate is the start-up and provisioning layer of a learning-management add-on
//! that runs inside a content-management platform. It decides which subsystems to
//! construct for a request, in what order, and it makes one-time setup (schema, roles,
//! pages, default options) safe to run any number of times.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Explicit over ambient
//! There are no globals. A [`Bootstrap`](lifecycle::Bootstrap) value is built at process
//! start and owns the single [`LifecycleOrchestrator`](lifecycle::LifecycleOrchestrator).
//! Components are registered up front as descriptors with factories, and the request
//! mode arrives as a [`RequestContext`](registry::RequestContext) value.
//!
//! ### Convergence, not installation
//! Provisioning never updates or deletes. It looks, and creates only what is missing:
//! a page whose slug is free, an option whose key was never stored. An option holding
//! the empty string counts as present and is left alone.
//!
//! ### Degrade, don't abort
//! A failed role step does not stop page creation. Every step and every entry is
//! attempted, and the outcome of each lands in an
//! [`ActivationReport`](lifecycle::ActivationReport) and in the logs.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Orchestrator ([`lifecycle`])
//! - **Role**: process context, singleton orchestrator, signal bus, tracing setup.
//! - **Key items**: [`Bootstrap`](lifecycle::Bootstrap), [`HostSignal`](lifecycle::HostSignal).
//!
//! ### 2. The Catalog ([`registry`], [`components`], [`provisioning`])
//! - **Role**: what exists (components per context) and what must exist (pages, options).
//! - **Key items**: [`ComponentRegistry`](registry::ComponentRegistry),
//!   [`ProvisioningEngine`](provisioning::ProvisioningEngine).
//!
//! ### 3. The Boundary ([`host`])
//! - **Role**: collaborator traits for schema, roles, pages, options, routes and translations.
//! - **Key items**: [`HostServices`](host::HostServices), [`MemoryHost`](host::MemoryHost).
//!
//! ### 4. The In-Memory Host ([`framework`], [`model`], [`page_actor`], [`option_actor`], [`clients`])
//! - **Role**: actor-backed page and option tables with unique-key enforcement, used by
//!   the demo and the tests.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Fresh install, one frontend request, re-activation, deactivation
//! RUST_LOG=info cargo run
//!
//! # With a config file
//! cargo run -- bootstrap.json
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod components;
pub mod config;
pub mod framework;
pub mod host;
pub mod lifecycle;
pub mod model;
pub mod option_actor;
pub mod page_actor;
pub mod provisioning;
pub mod registry;
