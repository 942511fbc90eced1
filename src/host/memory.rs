//! In-process host used by the demo binary and the tests.
//!
//! [`MemoryHost`] spins up one [`ResourceActor`](crate::framework::ResourceActor) per
//! table (pages, options) and wires simple in-memory stand-ins for the remaining
//! collaborators. Like a real host, the page and option tables enforce uniqueness on
//! slug and option key, so concurrent provisioners cannot create duplicates.

use super::{HostError, HostServices, RoleManager, RouteRebuilder, SchemaManager, TextDomainLoader};
use crate::clients::{OptionClient, PageClient};
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

/// Tables the add-on's schema consists of.
pub const LMS_TABLES: &[&str] = &[
    "lms_courses",
    "lms_enrollments",
    "lms_quizzes",
    "lms_questions",
    "lms_quiz_attempts",
    "lms_subscriptions",
    "lms_payments",
];

/// Roles the add-on needs, with their capabilities.
pub const LMS_ROLES: &[(&str, &[&str])] = &[
    ("lms_student", &["read", "lms_view_courses", "lms_take_quiz"]),
    (
        "lms_instructor",
        &["read", "lms_view_courses", "lms_take_quiz", "lms_manage_courses", "lms_grade_attempts"],
    ),
    (
        "lms_institution",
        &["read", "lms_view_courses", "lms_manage_courses", "lms_manage_instructors", "lms_view_reports"],
    ),
];

/// Schema stand-in: a set of created tables.
#[derive(Default)]
pub struct MemorySchema {
    tables: Mutex<BTreeSet<String>>,
    runs: AtomicUsize,
}

impl MemorySchema {
    pub async fn tables(&self) -> BTreeSet<String> {
        self.tables.lock().await.clone()
    }

    /// Number of times `ensure_schema` was called.
    pub fn runs(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SchemaManager for MemorySchema {
    async fn ensure_schema(&self) -> Result<(), HostError> {
        self.runs.fetch_add(1, Ordering::SeqCst);
        let mut tables = self.tables.lock().await;
        for table in LMS_TABLES {
            if tables.insert((*table).to_string()) {
                debug!(table, "Table created");
            }
        }
        Ok(())
    }
}

/// Role stand-in: role name to capability set.
#[derive(Default)]
pub struct MemoryRoles {
    roles: Mutex<BTreeMap<String, BTreeSet<String>>>,
}

impl MemoryRoles {
    pub async fn roles(&self) -> BTreeMap<String, BTreeSet<String>> {
        self.roles.lock().await.clone()
    }
}

#[async_trait]
impl RoleManager for MemoryRoles {
    /// Adds missing roles and missing capabilities. Never removes anything.
    async fn ensure_roles(&self) -> Result<(), HostError> {
        let mut roles = self.roles.lock().await;
        for (role, capabilities) in LMS_ROLES {
            let granted = roles.entry((*role).to_string()).or_default();
            granted.extend(capabilities.iter().map(|c| (*c).to_string()));
        }
        Ok(())
    }
}

/// Counts route rebuild requests.
#[derive(Default)]
pub struct RouteRecorder {
    rebuilds: AtomicUsize,
}

impl RouteRecorder {
    pub fn rebuilds(&self) -> usize {
        self.rebuilds.load(Ordering::SeqCst)
    }
}

impl RouteRebuilder for RouteRecorder {
    fn schedule_rebuild(&self) {
        let n = self.rebuilds.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(rebuilds = n, "Route rebuild scheduled");
    }
}

/// Translation stand-in: knows a fixed set of catalogues and records what was loaded.
pub struct MemoryTextDomains {
    catalogues: BTreeSet<String>,
    loaded: Mutex<Vec<String>>,
}

impl MemoryTextDomains {
    pub fn with_catalogues<I, S>(catalogues: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            catalogues: catalogues.into_iter().map(Into::into).collect(),
            loaded: Mutex::new(Vec::new()),
        }
    }

    pub async fn loaded(&self) -> Vec<String> {
        self.loaded.lock().await.clone()
    }
}

impl Default for MemoryTextDomains {
    fn default() -> Self {
        Self::with_catalogues(["lms-auth"])
    }
}

#[async_trait]
impl TextDomainLoader for MemoryTextDomains {
    async fn load_text_domain(&self, domain: &str) -> Result<(), HostError> {
        if !self.catalogues.contains(domain) {
            return Err(HostError::NotFound(format!("no catalogue for text domain {domain}")));
        }
        self.loaded.lock().await.push(domain.to_string());
        Ok(())
    }
}

/// An in-process host with actor-backed page and option tables.
///
/// # Example
///
/// ```ignore
/// let host = MemoryHost::start(32);
/// let bootstrap = Bootstrap::new(host.services(), components::default_registry()?, config);
/// // ... emit signals ...
/// drop(bootstrap);
/// host.shutdown().await?;
/// ```
pub struct MemoryHost {
    /// Page table client
    pub pages: PageClient,

    /// Option table client
    pub options: OptionClient,

    pub schema: Arc<MemorySchema>,
    pub roles: Arc<MemoryRoles>,
    pub routes: Arc<RouteRecorder>,
    pub text: Arc<MemoryTextDomains>,

    /// Task handles for the table actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl MemoryHost {
    /// Spawns the table actors. Must be called from within a Tokio runtime.
    pub fn start(buffer_size: usize) -> Self {
        let (page_actor, pages) = crate::page_actor::new(buffer_size);
        let (option_actor, options) = crate::option_actor::new(buffer_size);

        let page_handle = tokio::spawn(page_actor.run(()));
        let option_handle = tokio::spawn(option_actor.run(()));

        info!(buffer_size, "Memory host started");
        Self {
            pages,
            options,
            schema: Arc::new(MemorySchema::default()),
            roles: Arc::new(MemoryRoles::default()),
            routes: Arc::new(RouteRecorder::default()),
            text: Arc::new(MemoryTextDomains::default()),
            handles: vec![page_handle, option_handle],
        }
    }

    /// Collaborator bundle backed by this host.
    pub fn services(&self) -> HostServices {
        HostServices {
            schema: self.schema.clone(),
            roles: self.roles.clone(),
            pages: Arc::new(self.pages.clone()),
            options: Arc::new(self.options.clone()),
            routes: self.routes.clone(),
            text: self.text.clone(),
        }
    }

    /// Gracefully shuts the table actors down.
    ///
    /// The actors stop once every client clone is gone, so anything holding a
    /// [`HostServices`] from [`MemoryHost::services`] must be dropped first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down memory host...");

        // Dropping the clients closes the channels; each actor exits its loop.
        drop(self.pages);
        drop(self.options);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Table actor failed: {:?}", e);
                return Err(format!("Table actor failed: {:?}", e));
            }
        }

        info!("Memory host shutdown complete.");
        Ok(())
    }
}
