//! IAM service accounts through `gcloud iam service-accounts list`.

use super::cli::{argv, CommandRunner};
use super::parse::{decode, diagnostic};
use crate::config::AuditConfig;
use crate::models::{Entry, ServiceAccount};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ServiceAccountDescriptor {
    email: Option<String>,
    display_name: Option<String>,
    disabled: Option<bool>,
}

impl From<ServiceAccountDescriptor> for ServiceAccount {
    fn from(d: ServiceAccountDescriptor) -> Self {
        ServiceAccount {
            email: d.email.unwrap_or_else(|| "unknown".to_string()),
            display_name: d.display_name.unwrap_or_default(),
            disabled: d.disabled.unwrap_or(false),
        }
    }
}

pub fn service_accounts_cmd(project_id: &str) -> Vec<String> {
    argv(&[
        "gcloud",
        "iam",
        "service-accounts",
        "list",
        &format!("--project={project_id}"),
        "--format=json",
    ])
}

/// Service accounts in listing order, or a single error entry.
pub async fn get_service_accounts<R>(runner: &R, config: &AuditConfig) -> Vec<Entry<ServiceAccount>>
where
    R: CommandRunner + ?Sized,
{
    let output = match runner
        .run(&service_accounts_cmd(&config.project_id), config.command_timeout)
        .await
    {
        Ok(output) => output,
        Err(e) => return vec![Entry::error(e.to_string())],
    };

    match decode::<Vec<ServiceAccountDescriptor>>(&output, "service accounts") {
        Ok(accounts) => accounts
            .into_iter()
            .map(|a| Entry::Ok(ServiceAccount::from(a)))
            .collect(),
        Err(_) => vec![Entry::error(format!(
            "Failed to parse: {}",
            diagnostic(&output)
        ))],
    }
}
