//! Top-level audit report.

use super::{Dataset, Entry, NameEntry, ServiceAccount};
use serde::Serialize;

/// BigQuery section of the report.
#[derive(Serialize, Debug, Default)]
pub struct BigQuery {
    pub datasets: Vec<Entry<Dataset>>,
}

/// The document written to stdout.
#[derive(Serialize, Debug)]
pub struct Report {
    /// Audited project.
    pub project_id: String,
    /// Start of the audit, RFC 3339.
    pub audit_time: String,
    pub bigquery: BigQuery,
    pub apis: Vec<NameEntry>,
    pub secrets: Vec<NameEntry>,
    pub service_accounts: Vec<Entry<ServiceAccount>>,
}

impl Report {
    /// Report shell with empty sections.
    pub fn new(project_id: impl Into<String>, audit_time: impl Into<String>) -> Self {
        Report {
            project_id: project_id.into(),
            audit_time: audit_time.into(),
            bigquery: BigQuery::default(),
            apis: vec![],
            secrets: vec![],
            service_accounts: vec![],
        }
    }
}
