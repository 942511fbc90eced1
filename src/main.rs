//! Demo: provisions an in-memory host, serves one frontend request, re-activates, and
//! deactivates.
//!
//! Pass a JSON config path as the first argument to override the defaults.

use lms_bootstrap::components;
use lms_bootstrap::config::BootstrapConfig;
use lms_bootstrap::host::MemoryHost;
use lms_bootstrap::lifecycle::{setup_tracing, Bootstrap, HostSignal};
use lms_bootstrap::registry::RequestContext;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = match std::env::args().nth(1) {
        Some(path) => BootstrapConfig::load(path),
        None => Ok(BootstrapConfig::default()),
    }
    .and_then(BootstrapConfig::with_env_overrides)
    .map_err(|e| e.to_string())?;

    // Setup tracing once for the entire application
    setup_tracing(&config.log_filter);

    let host = MemoryHost::start(config.store_buffer);
    let registry = components::default_registry().map_err(|e| e.to_string())?;
    let bootstrap = Bootstrap::new(host.services(), registry, config);
    info!(
        text_domain = %bootstrap.config().text_domain,
        store_buffer = bootstrap.config().store_buffer,
        "Bootstrap ready"
    );

    // Construct the orchestrator up front so it is subscribed before the host speaks.
    let orchestrator = bootstrap.orchestrator();

    bootstrap
        .emit(HostSignal::Activated)
        .instrument(tracing::info_span!("install"))
        .await;
    bootstrap
        .emit(HostSignal::PlatformReady(RequestContext::Frontend))
        .instrument(tracing::info_span!("request"))
        .await;

    // A second activation must change nothing.
    let report = orchestrator
        .activate()
        .instrument(tracing::info_span!("reactivate"))
        .await;
    match serde_json::to_string_pretty(&report) {
        Ok(json) => info!("Re-activation report:\n{json}"),
        Err(e) => warn!(error = %e, "Could not render report"),
    }

    bootstrap.emit(HostSignal::Deactivated).await;
    info!(state = ?bootstrap.state(), "Lifecycle complete");

    // The host's actors stop once every client clone is gone.
    drop(orchestrator);
    drop(bootstrap);
    host.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
