//! Report data model for the infrastructure audit.
//!
//! This module contains the records assembled into the final JSON report:
//! - [`Entry`] and [`NameEntry`] - success-or-error wrappers returned by collectors
//! - [`Dataset`] and [`Table`] - BigQuery datasets with their tables
//! - [`ServiceAccount`] - simplified IAM service account
//! - [`Report`] - the top-level document

mod dataset;
mod entry;
mod report;
mod service_account;

// Re-export public types
pub use dataset::{Dataset, RowCount, Table, TABLE_TYPE};
pub use entry::{count_ok, Entry, ErrorEntry, MaybeError, NameEntry};
pub use report::{BigQuery, Report};
pub use service_account::ServiceAccount;
