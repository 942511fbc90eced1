use super::orchestrator::{LifecycleOrchestrator, LifecycleState};
use super::signals::{HostSignal, SignalBus, SignalKind};
use crate::config::BootstrapConfig;
use crate::host::HostServices;
use crate::registry::ComponentRegistry;
use std::sync::{Arc, OnceLock};
use tracing::info;

/// Process-scoped context: collaborators, components, configuration, and the single
/// [`LifecycleOrchestrator`].
///
/// Build one at process start and pass it to whatever needs the orchestrator.
///
/// # Example
///
/// ```ignore
/// let bootstrap = Bootstrap::new(host.services(), components::default_registry()?, config);
/// let orchestrator = bootstrap.orchestrator();
///
/// bootstrap.emit(HostSignal::PlatformReady(RequestContext::Frontend)).await;
/// ```
pub struct Bootstrap {
    host: HostServices,
    registry: Arc<ComponentRegistry>,
    config: BootstrapConfig,
    signals: SignalBus,
    orchestrator: OnceLock<Arc<LifecycleOrchestrator>>,
}

impl Bootstrap {
    pub fn new(host: HostServices, registry: ComponentRegistry, config: BootstrapConfig) -> Self {
        Self {
            host,
            registry: Arc::new(registry),
            config,
            signals: SignalBus::new(),
            orchestrator: OnceLock::new(),
        }
    }

    /// The process-wide orchestrator, constructed on first call.
    ///
    /// Construction subscribes it to platform-ready, activation and deactivation. However
    /// many callers race here, one instance is built and it subscribes once.
    pub fn orchestrator(&self) -> Arc<LifecycleOrchestrator> {
        self.orchestrator
            .get_or_init(|| {
                let orchestrator = Arc::new(LifecycleOrchestrator::new(
                    self.host.clone(),
                    self.registry.clone(),
                    self.config.text_domain.clone(),
                ));
                for kind in [SignalKind::PlatformReady, SignalKind::Activated, SignalKind::Deactivated] {
                    self.signals.subscribe(kind, orchestrator.clone());
                }
                info!(components = self.registry.len(), "Orchestrator constructed");
                orchestrator
            })
            .clone()
    }

    pub fn state(&self) -> LifecycleState {
        self.orchestrator
            .get()
            .map_or(LifecycleState::Unconstructed, |orchestrator| orchestrator.state())
    }

    pub fn signals(&self) -> &SignalBus {
        &self.signals
    }

    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Host-side trigger: delivers `signal` to its subscribers.
    pub async fn emit(&self, signal: HostSignal) -> usize {
        self.signals.emit(signal).await
    }
}
