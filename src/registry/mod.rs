//! Explicit component registry.
//!
//! Components are registered up front as [`ComponentDescriptor`]s (identifier, context
//! list, factory). Nothing is looked up by string at runtime except through
//! [`ComponentRegistry::resolve`], and a miss there is not an error: callers that need a
//! missing component fail downstream on their own.

pub mod component;
pub mod error;

pub use component::*;
pub use error::*;

use tracing::debug;

/// Three ordered component lists (core, admin, frontend) held in one registry.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    slots: Vec<ComponentSlot>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from descriptors, preserving their order.
    pub fn with_components(
        descriptors: impl IntoIterator<Item = ComponentDescriptor>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for descriptor in descriptors {
            registry.register(descriptor)?;
        }
        Ok(registry)
    }

    /// Appends a descriptor to its context list.
    ///
    /// Each identifier may appear in exactly one list, once.
    pub fn register(&mut self, descriptor: ComponentDescriptor) -> Result<(), RegistryError> {
        let id = descriptor.id.as_str();
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_lowercase() || c == '_') {
            return Err(RegistryError::InvalidIdentifier(id));
        }
        if let Some(existing) = self.slots.iter().find(|slot| slot.id() == descriptor.id) {
            return Err(RegistryError::DuplicateComponent {
                id: descriptor.id,
                existing: existing.context(),
            });
        }
        debug!(component = %descriptor.id, context = ?descriptor.context, "Component registered");
        self.slots.push(ComponentSlot::new(descriptor));
        Ok(())
    }

    /// Looks a component up by identifier.
    pub fn resolve(&self, id: &str) -> Option<&ComponentSlot> {
        let slot = self.slots.iter().find(|slot| slot.id() == id);
        if slot.is_none() {
            debug!(component = id, "Component not registered");
        }
        slot
    }

    /// Slots of one context list, in registration order.
    pub fn in_context(&self, context: ComponentContext) -> impl Iterator<Item = &ComponentSlot> {
        self.slots.iter().filter(move |slot| slot.context() == context)
    }

    /// Instantiates every component of one list, in order, returning their ids.
    pub fn instantiate(&self, context: ComponentContext) -> Vec<ComponentId> {
        self.in_context(context)
            .map(|slot| {
                slot.instance();
                slot.id()
            })
            .collect()
    }

    /// Ids of every component whose instance has been built.
    pub fn instantiated(&self) -> Vec<ComponentId> {
        self.slots
            .iter()
            .filter(|slot| slot.is_instantiated())
            .map(ComponentSlot::id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
