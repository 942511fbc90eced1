//! Process configuration.
//!
//! Defaults, optionally overlaid by a JSON file, then by `LMS_*` environment variables.
//!
//! ```json
//! { "text_domain": "lms-auth", "store_buffer": 64, "log_filter": "lms_bootstrap=debug" }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BootstrapConfig {
    /// Translation catalogue loaded during `init`.
    pub text_domain: String,
    /// Channel capacity of each in-memory store actor.
    pub store_buffer: usize,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            text_domain: "lms-auth".to_string(),
            store_buffer: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl BootstrapConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Applies `LMS_TEXT_DOMAIN`, `LMS_STORE_BUFFER` and `LMS_LOG`.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(domain) = lookup("LMS_TEXT_DOMAIN") {
            self.text_domain = domain;
        }
        if let Some(buffer) = lookup("LMS_STORE_BUFFER") {
            self.store_buffer = buffer
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("LMS_STORE_BUFFER is not a number: {buffer:?}")))?;
        }
        if let Some(filter) = lookup("LMS_LOG") {
            self.log_filter = filter;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.text_domain.trim().is_empty() {
            return Err(ConfigError::Invalid("text_domain must not be empty".into()));
        }
        if self.store_buffer == 0 {
            return Err(ConfigError::Invalid("store_buffer must be at least 1".into()));
        }
        Ok(())
    }
}
