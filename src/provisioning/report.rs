//! Outcome records produced by a provisioning run.

use serde::Serialize;

/// Result of a single all-or-nothing step (schema, roles).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    Completed,
    Failed(String),
}

impl StepOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, StepOutcome::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageOutcome {
    /// A new page was persisted under the directory slug.
    Created { id: String },
    /// A page already holds the slug.
    Skipped,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageEntry {
    pub slug: &'static str,
    pub outcome: PageOutcome,
}

/// Per-page outcomes of one page convergence pass, in directory order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageConvergence {
    pub entries: Vec<PageEntry>,
}

impl PageConvergence {
    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, PageOutcome::Created { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, PageOutcome::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, PageOutcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&PageOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionOutcome {
    /// The key was absent and now holds its default.
    Seeded,
    /// The key already existed (possibly empty) and was left alone.
    Kept,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionEntry {
    pub key: &'static str,
    pub outcome: OptionOutcome,
}

/// Per-key outcomes of one default-seeding pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionConvergence {
    pub entries: Vec<OptionEntry>,
}

impl OptionConvergence {
    pub fn seeded(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome == OptionOutcome::Seeded).count()
    }

    pub fn kept(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome == OptionOutcome::Kept).count()
    }

    pub fn failed(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, OptionOutcome::Failed(_)))
            .count()
    }
}

/// Everything one provisioning run did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvisioningReport {
    pub schema: StepOutcome,
    pub roles: StepOutcome,
    pub pages: PageConvergence,
    pub options: OptionConvergence,
}

impl ProvisioningReport {
    /// Number of steps or entries that failed.
    pub fn failures(&self) -> usize {
        usize::from(self.schema.is_failed())
            + usize::from(self.roles.is_failed())
            + self.pages.failed()
            + self.options.failed()
    }

    pub fn is_clean(&self) -> bool {
        self.failures() == 0
    }
}

/// What a provisioning run would create, computed without writing anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProvisioningPlan {
    pub pages_to_create: Vec<&'static str>,
    pub options_to_seed: Vec<&'static str>,
    /// Slugs or keys whose lookup failed.
    pub unknown: Vec<&'static str>,
}

impl ProvisioningPlan {
    pub fn is_converged(&self) -> bool {
        self.pages_to_create.is_empty() && self.options_to_seed.is_empty() && self.unknown.is_empty()
    }
}
