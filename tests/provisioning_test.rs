mod common;

use lms_bootstrap::clients::ActorClient;
use lms_bootstrap::host::MemoryHost;
use lms_bootstrap::model::{PageStatus, PageUpdate};
use lms_bootstrap::provisioning::{OptionOutcome, PageOutcome, StepOutcome, CONFIG_DEFAULTS, PAGE_DIRECTORY};
use std::collections::BTreeMap;
use std::sync::Arc;

const EXPECTED_SLUGS: [&str; 6] = [
    "lms-login",
    "lms-register",
    "subscription-packages",
    "student-dashboard",
    "instructor-dashboard",
    "institution-dashboard",
];

const EXPECTED_KEYS: [&str; 8] = [
    "lms_auth_social_login_google",
    "lms_auth_social_login_facebook",
    "lms_auth_social_login_apple",
    "lms_auth_openai_api_key",
    "lms_auth_stripe_public_key",
    "lms_auth_stripe_secret_key",
    "lms_auth_paypal_client_id",
    "lms_auth_paypal_client_secret",
];

async fn pages_by_id(host: &MemoryHost) -> BTreeMap<String, (String, String)> {
    host.pages
        .list()
        .await
        .expect("Failed to list pages")
        .into_iter()
        .map(|p| (p.id, (p.slug, p.title)))
        .collect()
}

async fn options_by_key(host: &MemoryHost) -> BTreeMap<String, String> {
    host.options
        .list()
        .await
        .expect("Failed to list options")
        .into_iter()
        .map(|o| (o.key, o.value))
        .collect()
}

/// Empty page and option stores: activation yields the six pages and eight empty options.
#[tokio::test]
async fn test_fresh_install() {
    let host = MemoryHost::start(16);
    let bootstrap = common::bootstrap(host.services());

    let report = bootstrap.orchestrator().activate().await;
    assert!(report.provisioning.is_clean(), "{:?}", report.provisioning);
    assert_eq!(report.provisioning.pages.created(), 6);
    assert_eq!(report.provisioning.options.seeded(), 8);

    let pages = host.pages.list().await.expect("Failed to list pages");
    let mut slugs: Vec<_> = pages.iter().map(|p| p.slug.as_str()).collect();
    slugs.sort_unstable();
    let mut expected = EXPECTED_SLUGS.to_vec();
    expected.sort_unstable();
    assert_eq!(slugs, expected);

    for page in &pages {
        let spec = PAGE_DIRECTORY.iter().find(|s| s.slug == page.slug).expect("Unknown slug");
        assert_eq!(page.title, spec.title);
        assert_eq!(page.body, spec.body_template, "body must be stored verbatim");
        assert_eq!(page.status, PageStatus::Published);
    }

    let options = options_by_key(&host).await;
    assert_eq!(options.len(), 8);
    for key in EXPECTED_KEYS {
        assert_eq!(options.get(key).map(String::as_str), Some(""), "key {key}");
    }

    assert_eq!(host.schema.runs(), 1);
    assert_eq!(host.roles.roles().await.len(), 3);
    assert_eq!(host.routes.rebuilds(), 1);
}

/// Running activation N times leaves exactly the state of one run.
#[tokio::test]
async fn test_repeated_activation_is_idempotent() {
    let host = MemoryHost::start(16);
    let bootstrap = common::bootstrap(host.services());
    let orchestrator = bootstrap.orchestrator();

    orchestrator.activate().await;
    let pages_once = pages_by_id(&host).await;
    let options_once = options_by_key(&host).await;

    for _ in 0..3 {
        let report = orchestrator.activate().await;
        assert!(report.provisioning.is_clean());
        assert_eq!(report.provisioning.pages.created(), 0);
        assert_eq!(report.provisioning.pages.skipped(), PAGE_DIRECTORY.len());
        assert_eq!(report.provisioning.options.seeded(), 0);
        assert_eq!(report.provisioning.options.kept(), CONFIG_DEFAULTS.len());
    }

    assert_eq!(pages_by_id(&host).await, pages_once);
    assert_eq!(options_by_key(&host).await, options_once);
    assert_eq!(host.routes.rebuilds(), 4);
}

/// Stored values, including empty and falsy ones, survive; absent keys get the default.
#[tokio::test]
async fn test_existing_options_are_never_clobbered() {
    let host = MemoryHost::start(16);
    host.options.upsert("lms_auth_openai_api_key", String::new()).await.unwrap();
    host.options.upsert("lms_auth_stripe_public_key", "pk_test_123".into()).await.unwrap();
    host.options.upsert("lms_auth_social_login_google", "0".into()).await.unwrap();

    let bootstrap = common::bootstrap(host.services());
    let report = bootstrap.orchestrator().activate().await;

    let outcome = |key: &str| {
        report
            .provisioning
            .options
            .entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.outcome.clone())
    };
    assert_eq!(outcome("lms_auth_openai_api_key"), Some(OptionOutcome::Kept));
    assert_eq!(outcome("lms_auth_stripe_public_key"), Some(OptionOutcome::Kept));
    assert_eq!(outcome("lms_auth_social_login_google"), Some(OptionOutcome::Kept));
    assert_eq!(outcome("lms_auth_paypal_client_id"), Some(OptionOutcome::Seeded));
    assert_eq!(report.provisioning.options.seeded(), 5);

    let options = options_by_key(&host).await;
    assert_eq!(options["lms_auth_openai_api_key"], "");
    assert_eq!(options["lms_auth_stripe_public_key"], "pk_test_123");
    assert_eq!(options["lms_auth_social_login_google"], "0");
    assert_eq!(options["lms_auth_paypal_client_id"], "");
}

/// An option removed outright is absent again, so the next activation restores it.
#[tokio::test]
async fn test_removed_option_is_reseeded() {
    let host = MemoryHost::start(16);
    let bootstrap = common::bootstrap(host.services());
    let orchestrator = bootstrap.orchestrator();

    orchestrator.activate().await;
    assert!(host.options.remove("lms_auth_paypal_client_secret").await.unwrap());
    assert_eq!(options_by_key(&host).await.len(), 7);

    let report = orchestrator.activate().await;
    assert_eq!(report.provisioning.options.seeded(), 1);
    assert_eq!(options_by_key(&host).await.len(), 8);
}

/// A value saved between the existence check and the seed survives, and the seed is
/// reported as kept rather than seeded.
#[tokio::test]
async fn test_option_saved_during_seeding_is_not_overwritten() {
    let host = MemoryHost::start(16);
    let mut services = host.services();
    services.options = Arc::new(common::UserWritesAfterLookup {
        options: host.options.clone(),
        key: "lms_auth_openai_api_key",
        value: "sk-user",
    });
    let bootstrap = common::bootstrap(services);

    let report = bootstrap.orchestrator().activate().await;
    let entry = report
        .provisioning
        .options
        .entries
        .iter()
        .find(|e| e.key == "lms_auth_openai_api_key")
        .expect("openai entry");
    assert_eq!(entry.outcome, OptionOutcome::Kept);
    assert!(report.provisioning.is_clean());
    assert_eq!(report.provisioning.options.seeded(), 7);

    let options = options_by_key(&host).await;
    assert_eq!(options["lms_auth_openai_api_key"], "sk-user");
    assert_eq!(options.len(), 8);
}

/// An administrator unpublishing a directory page does not make provisioning touch it.
#[tokio::test]
async fn test_drafted_page_is_left_alone() {
    let host = MemoryHost::start(16);
    let bootstrap = common::bootstrap(host.services());
    let orchestrator = bootstrap.orchestrator();

    orchestrator.activate().await;
    let register = host
        .pages
        .find_page("lms-register")
        .await
        .unwrap()
        .expect("register page");
    let update = PageUpdate {
        status: Some(PageStatus::Draft),
        ..PageUpdate::default()
    };
    host.pages.update_page(register.id.clone(), update).await.unwrap();

    let report = orchestrator.activate().await;
    assert_eq!(report.provisioning.pages.created(), 0);

    let register_after = host.pages.get(register.id).await.unwrap().expect("still there");
    assert_eq!(register_after.status, PageStatus::Draft);
    assert_eq!(register_after.slug, "lms-register");
}

/// Renaming `lms-login` away frees the slug, so re-activation creates a second "Login" page.
#[tokio::test]
async fn test_reactivation_after_slug_rename_creates_new_page() {
    let host = MemoryHost::start(16);
    let bootstrap = common::bootstrap(host.services());
    let orchestrator = bootstrap.orchestrator();

    orchestrator.activate().await;
    let renamed = host.pages.rename_slug("lms-login", "old-login").await.expect("Rename failed");
    assert_eq!(renamed.slug, "old-login");

    let report = orchestrator.activate().await;
    let login = report
        .provisioning
        .pages
        .entries
        .iter()
        .find(|e| e.slug == "lms-login")
        .expect("lms-login entry");
    assert!(matches!(login.outcome, PageOutcome::Created { .. }));
    assert_eq!(report.provisioning.pages.created(), 1);
    assert_eq!(report.provisioning.pages.skipped(), 5);

    let pages = host.pages.list().await.unwrap();
    assert_eq!(pages.len(), 7);
    let mut login_slugs: Vec<_> = pages
        .iter()
        .filter(|p| p.title == "Login")
        .map(|p| p.slug.as_str())
        .collect();
    login_slugs.sort_unstable();
    assert_eq!(login_slugs, ["lms-login", "old-login"]);
}

/// A failing role step does not stop pages, defaults or the route rebuild.
#[tokio::test]
async fn test_role_failure_does_not_block_other_steps() {
    let host = MemoryHost::start(16);
    let mut services = host.services();
    services.roles = Arc::new(common::FailingRoles);
    let bootstrap = common::bootstrap(services);

    let report = bootstrap.orchestrator().activate().await;
    let provisioning = &report.provisioning;
    assert_eq!(provisioning.schema, StepOutcome::Completed);
    assert!(matches!(provisioning.roles, StepOutcome::Failed(ref reason) if reason.contains("role table locked")));
    assert_eq!(provisioning.pages.created(), 6);
    assert_eq!(provisioning.options.seeded(), 8);
    assert_eq!(provisioning.failures(), 1);
    assert_eq!(host.routes.rebuilds(), 1);
}

#[tokio::test]
async fn test_schema_and_role_failures_together() {
    let host = MemoryHost::start(16);
    let mut services = host.services();
    services.schema = Arc::new(common::FailingSchema);
    services.roles = Arc::new(common::FailingRoles);
    let bootstrap = common::bootstrap(services);

    let report = bootstrap.orchestrator().activate().await;
    assert_eq!(report.provisioning.failures(), 2);
    assert_eq!(pages_by_id(&host).await.len(), 6);
    assert_eq!(options_by_key(&host).await.len(), 8);
    assert_eq!(host.routes.rebuilds(), 1);
}

/// Deactivation only asks for a route rebuild; everything provisioned stays.
#[tokio::test]
async fn test_deactivate_keeps_data() {
    let host = MemoryHost::start(16);
    let bootstrap = common::bootstrap(host.services());
    let orchestrator = bootstrap.orchestrator();

    orchestrator.activate().await;
    host.options.upsert("lms_auth_stripe_secret_key", "sk_test".into()).await.unwrap();
    let pages_before = pages_by_id(&host).await;
    let options_before = options_by_key(&host).await;

    orchestrator.deactivate().await;
    assert_eq!(pages_by_id(&host).await, pages_before);
    assert_eq!(options_by_key(&host).await, options_before);
    assert_eq!(host.routes.rebuilds(), 2);

    // Reactivation keeps the user's value.
    orchestrator.activate().await;
    assert_eq!(options_by_key(&host).await["lms_auth_stripe_secret_key"], "sk_test");
}

/// Two processes activating at once against one host end with one set of pages.
#[tokio::test]
async fn test_concurrent_activation_from_two_processes() {
    let host = MemoryHost::start(64);
    let first = common::bootstrap(host.services());
    let second = common::bootstrap(host.services());

    let (one, two) = (first.orchestrator(), second.orchestrator());
    let (a, b) = tokio::join!(one.activate(), two.activate());
    assert!(a.provisioning.is_clean());
    assert!(b.provisioning.is_clean());
    assert_eq!(a.provisioning.pages.created() + b.provisioning.pages.created(), 6);

    let pages = host.pages.list().await.unwrap();
    assert_eq!(pages.len(), 6);
    assert_eq!(options_by_key(&host).await.len(), 8);
}

/// The host's actors shut down once every client is gone.
#[tokio::test]
async fn test_host_shutdown_after_activation() {
    let host = MemoryHost::start(16);
    let bootstrap = common::bootstrap(host.services());
    bootstrap.orchestrator().activate().await;

    drop(bootstrap);
    host.shutdown().await.expect("Failed to shutdown host");
}
