//! Audit configuration.
//!
//! Everything is read once at startup and passed explicitly into each collector.

use std::time::Duration;
use thiserror::Error;

/// Environment variable naming the project to audit.
pub const PROJECT_ENV_VAR: &str = "GCP_PROJECT_ID";

/// Dataset IDs to skip (e.g. `["temp_data", "staging"]`).
pub const SKIP_DATASETS: &[&str] = &[];

/// Timeout for each per-table `COUNT(*)` query.
pub const ROW_COUNT_TIMEOUT_SECS: u64 = 30;

/// Timeout for every other external command.
pub const COMMAND_TIMEOUT_SECS: u64 = 120;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ERROR: {0} environment variable not set")]
    MissingProject(&'static str),
}

#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub project_id: String,
    pub skip_datasets: Vec<String>,
    pub command_timeout: Duration,
    pub row_count_timeout: Duration,
}

impl AuditConfig {
    /// Config for `project_id` using the compiled-in defaults.
    pub fn new(project_id: impl Into<String>) -> Self {
        AuditConfig {
            project_id: project_id.into(),
            skip_datasets: SKIP_DATASETS.iter().map(|s| s.to_string()).collect(),
            command_timeout: Duration::from_secs(COMMAND_TIMEOUT_SECS),
            row_count_timeout: Duration::from_secs(ROW_COUNT_TIMEOUT_SECS),
        }
    }

    /// Read the project from [`PROJECT_ENV_VAR`].
    ///
    /// Surrounding whitespace is trimmed; an empty or blank value counts as unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_project(std::env::var(PROJECT_ENV_VAR).ok())
    }

    fn from_project(project_id: Option<String>) -> Result<Self, ConfigError> {
        match project_id {
            Some(p) if !p.trim().is_empty() => Ok(Self::new(p.trim())),
            _ => Err(ConfigError::MissingProject(PROJECT_ENV_VAR)),
        }
    }

    pub fn with_skip_datasets<S: AsRef<str>>(mut self, skip: &[S]) -> Self {
        self.skip_datasets = skip.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    pub fn with_row_count_timeout(mut self, timeout: Duration) -> Self {
        self.row_count_timeout = timeout;
        self
    }

    pub fn is_skipped(&self, dataset_id: &str) -> bool {
        self.skip_datasets.iter().any(|s| s == dataset_id)
    }
}
