//! Component descriptors and their lazily-initialized singleton slots.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Stable identifier of a component, e.g. `"authentication"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ComponentId(&'static str);

impl ComponentId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl PartialEq<&str> for ComponentId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Which list a component belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentContext {
    /// Instantiated on every request.
    Core,
    /// Instantiated only for administrative requests.
    Admin,
    /// Instantiated only for end-user-facing requests.
    Frontend,
}

/// The mode of the request being served. Exactly one of the two per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestContext {
    Admin,
    Frontend,
}

impl RequestContext {
    /// The context-specific component list this request selects.
    pub fn component_context(self) -> ComponentContext {
        match self {
            RequestContext::Admin => ComponentContext::Admin,
            RequestContext::Frontend => ComponentContext::Frontend,
        }
    }
}

/// A subsystem the orchestrator brings to life. Internals belong to the subsystem.
pub trait Component: Send + Sync + 'static {
    fn id(&self) -> ComponentId;
}

/// Builds the single instance of a component.
pub type ComponentFactory = fn() -> Arc<dyn Component>;

/// Static registration record: identifier, context list, factory.
#[derive(Clone, Copy)]
pub struct ComponentDescriptor {
    pub id: ComponentId,
    pub context: ComponentContext,
    pub factory: ComponentFactory,
}

impl ComponentDescriptor {
    pub const fn new(id: &'static str, context: ComponentContext, factory: ComponentFactory) -> Self {
        Self {
            id: ComponentId::new(id),
            context,
            factory,
        }
    }
}

impl fmt::Debug for ComponentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDescriptor")
            .field("id", &self.id)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

/// A registered component and its lazily-built instance.
pub struct ComponentSlot {
    descriptor: ComponentDescriptor,
    instance: OnceLock<Arc<dyn Component>>,
}

impl ComponentSlot {
    pub(crate) fn new(descriptor: ComponentDescriptor) -> Self {
        Self {
            descriptor,
            instance: OnceLock::new(),
        }
    }

    pub fn id(&self) -> ComponentId {
        self.descriptor.id
    }

    pub fn context(&self) -> ComponentContext {
        self.descriptor.context
    }

    /// The component's singleton accessor. The factory runs at most once.
    pub fn instance(&self) -> Arc<dyn Component> {
        self.instance
            .get_or_init(|| {
                debug!(component = %self.descriptor.id, "Constructing component");
                (self.descriptor.factory)()
            })
            .clone()
    }

    pub fn is_instantiated(&self) -> bool {
        self.instance.get().is_some()
    }
}

impl fmt::Debug for ComponentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentSlot")
            .field("descriptor", &self.descriptor)
            .field("instantiated", &self.is_instantiated())
            .finish()
    }
}
