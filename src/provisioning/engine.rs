//! Convergence procedures run on activation.
//!
//! Every procedure is a check-then-create over state the host persists. Nothing is ever
//! updated or removed, each entry is handled on its own, and a failing entry is logged
//! and recorded without stopping the rest.

use super::defaults::{ConfigDefault, CONFIG_DEFAULTS};
use super::pages::{PageSpec, PAGE_DIRECTORY};
use super::report::{
    OptionConvergence, OptionEntry, OptionOutcome, PageConvergence, PageEntry, PageOutcome,
    ProvisioningPlan, ProvisioningReport, StepOutcome,
};
use crate::host::{HostError, HostServices};
use crate::model::{PageCreate, PageStatus};
use tracing::{debug, info, instrument, warn};

/// Runs provisioning against a set of host collaborators.
///
/// The engine holds no state of its own beyond the catalog it converges toward.
pub struct ProvisioningEngine<'a> {
    host: &'a HostServices,
    pages: &'a [PageSpec],
    defaults: &'a [ConfigDefault],
}

impl<'a> ProvisioningEngine<'a> {
    /// Engine for the add-on's own page directory and default table.
    pub fn new(host: &'a HostServices) -> Self {
        Self::with_catalog(host, &PAGE_DIRECTORY, &CONFIG_DEFAULTS)
    }

    pub fn with_catalog(host: &'a HostServices, pages: &'a [PageSpec], defaults: &'a [ConfigDefault]) -> Self {
        Self { host, pages, defaults }
    }

    /// Schema, roles, pages, defaults. Every step runs whatever happened before it.
    #[instrument(skip(self))]
    pub async fn provision(&self) -> ProvisioningReport {
        let schema = self.ensure_schema().await;
        let roles = self.ensure_roles().await;
        let pages = self.converge_pages().await;
        let options = self.converge_defaults().await;

        let report = ProvisioningReport {
            schema,
            roles,
            pages,
            options,
        };
        info!(
            pages_created = report.pages.created(),
            options_seeded = report.options.seeded(),
            failures = report.failures(),
            "Provisioning finished"
        );
        report
    }

    pub async fn ensure_schema(&self) -> StepOutcome {
        step_outcome("schema", self.host.schema.ensure_schema().await)
    }

    pub async fn ensure_roles(&self) -> StepOutcome {
        step_outcome("roles", self.host.roles.ensure_roles().await)
    }

    /// Creates every directory page whose slug is not yet taken.
    pub async fn converge_pages(&self) -> PageConvergence {
        let mut convergence = PageConvergence::default();
        for spec in self.pages {
            let outcome = self.converge_page(spec).await;
            convergence.entries.push(PageEntry {
                slug: spec.slug,
                outcome,
            });
        }
        convergence
    }

    async fn converge_page(&self, spec: &PageSpec) -> PageOutcome {
        match self.host.pages.find_by_slug(spec.slug).await {
            Ok(Some(existing)) => {
                debug!(slug = spec.slug, id = %existing.id, "Page exists, skipping");
                return PageOutcome::Skipped;
            }
            Ok(None) => {}
            Err(e) => {
                warn!(slug = spec.slug, error = %e, "Page lookup failed");
                return PageOutcome::Failed(e.to_string());
            }
        }

        let page = PageCreate {
            title: spec.title.to_string(),
            body: spec.body_template.to_string(),
            slug: spec.slug.to_string(),
            status: PageStatus::Published,
        };
        match self.host.pages.create_page(page).await {
            Ok(created) => {
                info!(slug = spec.slug, id = %created.id, "Page created");
                PageOutcome::Created { id: created.id }
            }
            // Another provisioner got there between our lookup and our insert.
            Err(HostError::Conflict(_)) => {
                info!(slug = spec.slug, "Page created concurrently, skipping");
                PageOutcome::Skipped
            }
            Err(e) => {
                warn!(slug = spec.slug, error = %e, "Page creation failed");
                PageOutcome::Failed(e.to_string())
            }
        }
    }

    /// Stores the default for every key that does not exist at all.
    ///
    /// A key holding the empty string exists and is kept. The write is insert-only, so a
    /// value stored between the lookup and the insert is never replaced.
    pub async fn converge_defaults(&self) -> OptionConvergence {
        let mut convergence = OptionConvergence::default();
        for default in self.defaults {
            let outcome = self.converge_default(default).await;
            convergence.entries.push(OptionEntry {
                key: default.key,
                outcome,
            });
        }
        convergence
    }

    async fn converge_default(&self, default: &ConfigDefault) -> OptionOutcome {
        match self.host.options.get_option(default.key).await {
            Ok(Some(_)) => {
                debug!(key = default.key, "Option exists, keeping");
                OptionOutcome::Kept
            }
            Ok(None) => match self.host.options.add_option(default.key, default.value.to_string()).await {
                Ok(()) => {
                    info!(key = default.key, "Option seeded");
                    OptionOutcome::Seeded
                }
                // Someone stored the key after our lookup. Their value wins.
                Err(HostError::Conflict(_)) => {
                    info!(key = default.key, "Option stored concurrently, keeping");
                    OptionOutcome::Kept
                }
                Err(e) => {
                    warn!(key = default.key, error = %e, "Option seeding failed");
                    OptionOutcome::Failed(e.to_string())
                }
            },
            Err(e) => {
                warn!(key = default.key, error = %e, "Option lookup failed");
                OptionOutcome::Failed(e.to_string())
            }
        }
    }

    /// Read-only preview of what [`provision`](Self::provision) would create.
    pub async fn plan(&self) -> ProvisioningPlan {
        let mut plan = ProvisioningPlan::default();
        for spec in self.pages {
            match self.host.pages.find_by_slug(spec.slug).await {
                Ok(Some(_)) => {}
                Ok(None) => plan.pages_to_create.push(spec.slug),
                Err(e) => {
                    debug!(slug = spec.slug, error = %e, "Plan lookup failed");
                    plan.unknown.push(spec.slug);
                }
            }
        }
        for default in self.defaults {
            match self.host.options.get_option(default.key).await {
                Ok(Some(_)) => {}
                Ok(None) => plan.options_to_seed.push(default.key),
                Err(e) => {
                    debug!(key = default.key, error = %e, "Plan lookup failed");
                    plan.unknown.push(default.key);
                }
            }
        }
        plan
    }
}

fn step_outcome(step: &'static str, result: Result<(), HostError>) -> StepOutcome {
    match result {
        Ok(()) => {
            info!(step, "Provisioning step completed");
            StepOutcome::Completed
        }
        Err(e) => {
            warn!(step, error = %e, "Provisioning step failed");
            StepOutcome::Failed(e.to_string())
        }
    }
}
