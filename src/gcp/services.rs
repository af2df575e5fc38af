//! Enabled service APIs and Secret Manager secret names through `gcloud`.
//!
//! Both listings use `--format=value(...)`, one name per line.

use super::cli::{argv, CommandRunner};
use crate::config::AuditConfig;
use crate::models::NameEntry;
use itertools::Itertools;

pub fn enabled_apis_cmd(project_id: &str) -> Vec<String> {
    argv(&[
        "gcloud",
        "services",
        "list",
        "--enabled",
        &format!("--project={project_id}"),
        "--format=value(config.name)",
    ])
}

pub fn secrets_cmd(project_id: &str) -> Vec<String> {
    argv(&[
        "gcloud",
        "secrets",
        "list",
        &format!("--project={project_id}"),
        "--format=value(name)",
    ])
}

/// Sorted names of the enabled APIs.
pub async fn get_enabled_apis<R>(runner: &R, config: &AuditConfig) -> Vec<NameEntry>
where
    R: CommandRunner + ?Sized,
{
    list_names(runner, config, &enabled_apis_cmd(&config.project_id)).await
}

/// Sorted secret names.
pub async fn get_secrets<R>(runner: &R, config: &AuditConfig) -> Vec<NameEntry>
where
    R: CommandRunner + ?Sized,
{
    list_names(runner, config, &secrets_cmd(&config.project_id)).await
}

async fn list_names<R>(runner: &R, config: &AuditConfig, cmd: &[String]) -> Vec<NameEntry>
where
    R: CommandRunner + ?Sized,
{
    match runner.run(cmd, config.command_timeout).await {
        Ok(output) => split_sorted(&output),
        Err(e) => vec![NameEntry::Error(e.to_string())],
    }
}

fn split_sorted(output: &str) -> Vec<NameEntry> {
    if output.is_empty() {
        return vec![];
    }
    output
        .lines()
        .sorted()
        .map(|name| NameEntry::Name(name.to_string()))
        .collect()
}
