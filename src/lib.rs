//! Audit a Google Cloud project through the `bq` and `gcloud` CLIs.
//!
//! Collects BigQuery datasets and tables (with row counts), enabled APIs,
//! secret names and service accounts into one JSON [`models::Report`].

pub mod audit;
pub mod config;
pub mod gcp;
pub mod logging;
pub mod models;
pub mod output;

pub use audit::run_audit;
pub use config::AuditConfig;
