use super::error::LifecycleError;
use super::signals::{HostSignal, SignalHandler};
use crate::host::HostServices;
use crate::provisioning::{ProvisioningEngine, ProvisioningReport};
use crate::registry::{ComponentContext, ComponentId, ComponentRegistry, RequestContext};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::{Arc, OnceLock};
use tracing::{info, instrument, warn};

/// Where the orchestrator is in its per-process lifecycle.
///
/// `activate`/`deactivate` never move between these states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LifecycleState {
    Unconstructed,
    Constructed,
    Initialized(RequestContext),
}

/// What `init` brought up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitReport {
    pub context: RequestContext,
    pub translations_loaded: bool,
    /// Core components first, then the request context's components, in order.
    pub components: Vec<ComponentId>,
}

/// What `activate` did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivationReport {
    pub provisioning: ProvisioningReport,
}

/// The top-level controller of the add-on.
///
/// There is one per process, owned by [`Bootstrap`](super::Bootstrap). It brings the
/// components up on `platform-ready` and runs provisioning on activation.
pub struct LifecycleOrchestrator {
    host: HostServices,
    registry: Arc<ComponentRegistry>,
    text_domain: String,
    initialized: OnceLock<RequestContext>,
}

impl LifecycleOrchestrator {
    pub(crate) fn new(host: HostServices, registry: Arc<ComponentRegistry>, text_domain: String) -> Self {
        Self {
            host,
            registry,
            text_domain,
            initialized: OnceLock::new(),
        }
    }

    pub fn state(&self) -> LifecycleState {
        match self.initialized.get() {
            Some(context) => LifecycleState::Initialized(*context),
            None => LifecycleState::Constructed,
        }
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Brings the add-on up for one request. Runs once per process.
    ///
    /// 1. Load translations (best-effort).
    /// 2. Instantiate every core component, in registry order.
    /// 3. Instantiate the admin list for admin requests, the frontend list otherwise.
    #[instrument(skip(self))]
    pub async fn init(&self, context: RequestContext) -> Result<InitReport, LifecycleError> {
        if let Err(requested) = self.initialized.set(context) {
            let existing = self.initialized.get().copied().unwrap_or(requested);
            warn!(?existing, "Already initialized, ignoring");
            return Err(LifecycleError::AlreadyInitialized(existing));
        }

        let translations_loaded = match self.host.text.load_text_domain(&self.text_domain).await {
            Ok(()) => true,
            Err(e) => {
                warn!(domain = %self.text_domain, error = %e, "Translations not loaded");
                false
            }
        };

        let mut components = self.registry.instantiate(ComponentContext::Core);
        components.extend(self.registry.instantiate(context.component_context()));

        info!(components = components.len(), "Initialized");
        Ok(InitReport {
            context,
            translations_loaded,
            components,
        })
    }

    /// Converges the host to the add-on's baseline, then asks for a route rebuild.
    ///
    /// Never fails: every step's failure is logged and recorded in the report.
    #[instrument(skip(self))]
    pub async fn activate(&self) -> ActivationReport {
        let provisioning = ProvisioningEngine::new(&self.host).provision().await;
        self.host.routes.schedule_rebuild();

        if !provisioning.is_clean() {
            warn!(failures = provisioning.failures(), "Activation finished with failures");
        }
        ActivationReport { provisioning }
    }

    /// Asks for a route rebuild. Pages, options, roles and schema are left in place.
    #[instrument(skip(self))]
    pub async fn deactivate(&self) {
        self.host.routes.schedule_rebuild();
        info!("Deactivated");
    }
}

#[async_trait]
impl SignalHandler for LifecycleOrchestrator {
    async fn on_signal(&self, signal: HostSignal) {
        match signal {
            HostSignal::PlatformReady(context) => {
                // A repeated platform-ready is already logged by `init`.
                let _ = self.init(context).await;
            }
            HostSignal::Activated => {
                self.activate().await;
            }
            HostSignal::Deactivated => self.deactivate().await,
        }
    }
}
