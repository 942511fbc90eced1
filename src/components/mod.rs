//! The add-on's subsystems as seen by the orchestrator.
//!
//! Authentication, assessment, course, payment and AI integration live elsewhere; here
//! each one is only an identity, a context list and a factory for its single instance.

use crate::registry::{
    Component, ComponentContext, ComponentDescriptor, ComponentId, ComponentRegistry, RegistryError,
};
use std::sync::Arc;

macro_rules! lms_component {
    ($(#[$meta:meta])* $name:ident, $id:literal, $context:ident) => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        pub struct $name;

        impl $name {
            pub const ID: ComponentId = ComponentId::new($id);

            pub fn descriptor() -> ComponentDescriptor {
                ComponentDescriptor::new($id, ComponentContext::$context, Self::build)
            }

            fn build() -> Arc<dyn Component> {
                Arc::new($name)
            }
        }

        impl Component for $name {
            fn id(&self) -> ComponentId {
                Self::ID
            }
        }
    };
}

lms_component!(
    /// Login, registration and social sign-in.
    Authentication, "authentication", Core
);
lms_component!(
    /// Quizzes, questions and attempts.
    Assessment, "assessment", Core
);
lms_component!(Course, "course", Core);
lms_component!(
    /// Subscription packages and gateway integrations.
    Payment, "payment", Core
);
lms_component!(AiIntegration, "ai_integration", Core);
lms_component!(AdminMenu, "admin_menu", Admin);
lms_component!(Settings, "settings", Admin);
lms_component!(
    /// Sends each role to its dashboard page.
    DashboardRouter, "dashboard_router", Frontend
);
lms_component!(Shortcodes, "shortcodes", Frontend);
lms_component!(RequestHandler, "request_handler", Frontend);

/// Every component, in activation order within each list.
pub fn descriptors() -> [ComponentDescriptor; 10] {
    [
        Authentication::descriptor(),
        Assessment::descriptor(),
        Course::descriptor(),
        Payment::descriptor(),
        AiIntegration::descriptor(),
        AdminMenu::descriptor(),
        Settings::descriptor(),
        DashboardRouter::descriptor(),
        Shortcodes::descriptor(),
        RequestHandler::descriptor(),
    ]
}

/// Registry holding every component of the add-on.
pub fn default_registry() -> Result<ComponentRegistry, RegistryError> {
    ComponentRegistry::with_components(descriptors())
}
