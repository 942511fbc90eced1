mod common;

use lms_bootstrap::clients::ActorClient;
use lms_bootstrap::config::BootstrapConfig;
use lms_bootstrap::host::MemoryHost;
use lms_bootstrap::lifecycle::{HostSignal, LifecycleError, LifecycleState};
use lms_bootstrap::registry::{ComponentContext, ComponentId, ComponentSlot, RequestContext};
use std::sync::Arc;

fn ids(slots: impl Iterator<Item = ComponentId>) -> Vec<&'static str> {
    slots.map(|id| id.as_str()).collect()
}

const CORE: [&str; 5] = ["authentication", "assessment", "course", "payment", "ai_integration"];

#[tokio::test]
async fn test_state_machine() {
    let host = MemoryHost::start(8);
    let bootstrap = common::bootstrap(host.services());
    assert_eq!(bootstrap.state(), LifecycleState::Unconstructed);

    let orchestrator = bootstrap.orchestrator();
    assert_eq!(bootstrap.state(), LifecycleState::Constructed);

    // Activation does not touch the init flag.
    orchestrator.activate().await;
    orchestrator.deactivate().await;
    assert_eq!(bootstrap.state(), LifecycleState::Constructed);

    orchestrator.init(RequestContext::Admin).await.expect("First init succeeds");
    assert_eq!(bootstrap.state(), LifecycleState::Initialized(RequestContext::Admin));

    orchestrator.activate().await;
    assert_eq!(orchestrator.state(), LifecycleState::Initialized(RequestContext::Admin));
}

#[tokio::test]
async fn test_orchestrator_is_constructed_once() {
    let host = MemoryHost::start(8);
    let bootstrap = common::bootstrap(host.services());

    let first = bootstrap.orchestrator();
    for _ in 0..10 {
        assert!(Arc::ptr_eq(&first, &bootstrap.orchestrator()));
    }
    // platform-ready, activated, deactivated
    assert_eq!(bootstrap.signals().subscription_count(), 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_accessor_calls_construct_once() {
    let host = MemoryHost::start(8);
    let bootstrap = Arc::new(common::bootstrap(host.services()));

    let mut handles = vec![];
    for _ in 0..32 {
        let bootstrap = bootstrap.clone();
        handles.push(tokio::spawn(async move { bootstrap.orchestrator() }));
    }

    let mut instances = vec![];
    for handle in handles {
        instances.push(handle.await.unwrap());
    }
    assert!(instances.iter().all(|o| Arc::ptr_eq(o, &instances[0])));
    assert_eq!(bootstrap.signals().subscription_count(), 3);
}

#[tokio::test]
async fn test_admin_request_gets_core_then_admin_components() {
    let host = MemoryHost::start(8);
    let bootstrap = common::bootstrap(host.services());
    let orchestrator = bootstrap.orchestrator();

    let report = orchestrator.init(RequestContext::Admin).await.unwrap();
    assert_eq!(report.context, RequestContext::Admin);
    assert!(report.translations_loaded);

    let mut expected = CORE.to_vec();
    expected.extend(["admin_menu", "settings"]);
    assert_eq!(ids(report.components.into_iter()), expected);
    assert_eq!(ids(orchestrator.registry().instantiated().into_iter()), expected);

    let frontend_built = orchestrator
        .registry()
        .in_context(ComponentContext::Frontend)
        .any(ComponentSlot::is_instantiated);
    assert!(!frontend_built, "frontend components must not be built for admin requests");
}

#[tokio::test]
async fn test_frontend_request_gets_core_then_frontend_components() {
    let host = MemoryHost::start(8);
    let bootstrap = common::bootstrap(host.services());
    let orchestrator = bootstrap.orchestrator();

    let report = orchestrator.init(RequestContext::Frontend).await.unwrap();

    let mut expected = CORE.to_vec();
    expected.extend(["dashboard_router", "shortcodes", "request_handler"]);
    assert_eq!(ids(report.components.into_iter()), expected);

    let admin_built = orchestrator
        .registry()
        .in_context(ComponentContext::Admin)
        .any(ComponentSlot::is_instantiated);
    assert!(!admin_built, "admin components must not be built for frontend requests");
}

#[tokio::test]
async fn test_second_init_is_rejected_and_builds_nothing() {
    let host = MemoryHost::start(8);
    let bootstrap = common::bootstrap(host.services());
    let orchestrator = bootstrap.orchestrator();

    orchestrator.init(RequestContext::Frontend).await.unwrap();
    let before = orchestrator.registry().instantiated();

    let err = orchestrator.init(RequestContext::Admin).await.unwrap_err();
    assert_eq!(err, LifecycleError::AlreadyInitialized(RequestContext::Frontend));
    assert_eq!(orchestrator.registry().instantiated(), before);
    assert_eq!(host.text.loaded().await.len(), 1);
}

#[tokio::test]
async fn test_missing_translations_are_not_fatal() {
    let host = MemoryHost::start(8);
    let config = BootstrapConfig {
        text_domain: "lms-missing".into(),
        ..BootstrapConfig::default()
    };
    let bootstrap = common::bootstrap_with(host.services(), config);
    assert_eq!(bootstrap.config().text_domain, "lms-missing");

    let report = bootstrap.orchestrator().init(RequestContext::Frontend).await.unwrap();
    assert!(!report.translations_loaded);
    assert_eq!(report.components.len(), 8);
}

#[tokio::test]
async fn test_signals_drive_the_orchestrator() {
    let host = MemoryHost::start(8);
    let bootstrap = common::bootstrap(host.services());

    // Nobody is listening before the orchestrator exists.
    assert_eq!(bootstrap.emit(HostSignal::Activated).await, 0);
    assert!(host.pages.list().await.unwrap().is_empty());

    bootstrap.orchestrator();
    assert_eq!(bootstrap.emit(HostSignal::Activated).await, 1);
    assert_eq!(host.pages.list().await.unwrap().len(), 6);

    bootstrap.emit(HostSignal::PlatformReady(RequestContext::Admin)).await;
    assert_eq!(bootstrap.state(), LifecycleState::Initialized(RequestContext::Admin));

    // A repeated platform-ready is absorbed.
    bootstrap.emit(HostSignal::PlatformReady(RequestContext::Frontend)).await;
    assert_eq!(bootstrap.state(), LifecycleState::Initialized(RequestContext::Admin));

    bootstrap.emit(HostSignal::Deactivated).await;
    assert_eq!(host.routes.rebuilds(), 2);
    assert_eq!(host.pages.list().await.unwrap().len(), 6);
}
