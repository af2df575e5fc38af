//! Google Cloud CLI interaction.
//!
//! This module handles every call out to `bq` and `gcloud`:
//! - [`cli`] - Command execution with timeouts
//! - [`bigquery`] - Datasets, tables and row counts
//! - [`services`] - Enabled APIs and secret names
//! - [`iam`] - Service accounts

pub mod bigquery;
pub mod cli;
pub mod iam;
mod parse;
pub mod services;
#[cfg(test)]
pub(crate) mod testing;

// Re-export public types and functions
pub use bigquery::get_bigquery_datasets;
pub use cli::{run, CommandError, CommandRunner, ShellRunner};
pub use iam::get_service_accounts;
pub use parse::{DecodeError, MAX_DIAGNOSTIC_CHARS};
pub use services::{get_enabled_apis, get_secrets};
