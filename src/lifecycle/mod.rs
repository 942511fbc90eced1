//! # Lifecycle & Orchestration
//!
//! This module decides what gets initialized, in which order, and when provisioning runs.
//!
//! ## The Pieces
//!
//! 1. **[`Bootstrap`]** - the process context. Created once at start-up and passed around
//!    explicitly; it owns the collaborators, the component registry and the single
//!    orchestrator.
//! 2. **[`LifecycleOrchestrator`]** - `init` on platform-ready, `activate` and
//!    `deactivate` on the add-on's own transitions.
//! 3. **[`SignalBus`]** - delivers [`HostSignal`]s to subscribers.
//! 4. **[`setup_tracing`]** - the process-wide log subscriber.
//!
//! ## State Machine
//!
//! ```text
//! Unconstructed --Bootstrap::orchestrator()--> Constructed --PlatformReady(ctx)--> Initialized(ctx)
//! ```
//!
//! `Activated` and `Deactivated` can arrive in any state and never move it.
//!
//! ## Context Injection
//!
//! The request mode is an explicit [`RequestContext`](crate::registry::RequestContext)
//! carried by `PlatformReady`, not a global query. Admin requests get the admin list,
//! everything else gets the frontend list. Never both.
//!
//! ## Failure Policy
//!
//! `activate` runs schema, roles, pages, defaults and the route rebuild regardless of
//! earlier failures, and reports rather than returns errors. Operators read the logs and
//! re-activate; every step is safe to repeat.

pub mod bootstrap;
pub mod error;
pub mod orchestrator;
pub mod signals;
pub mod tracing;

pub use self::bootstrap::*;
pub use self::error::*;
pub use self::orchestrator::*;
pub use self::signals::*;
pub use self::tracing::*;
