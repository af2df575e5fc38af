//! The audit run: collectors in fixed order, assembled into one [`Report`].

use crate::config::AuditConfig;
use crate::gcp::{
    get_bigquery_datasets, get_enabled_apis, get_secrets, get_service_accounts, CommandRunner,
};
use crate::models::{count_ok, Report};
use crate::output::{print_banner, print_count, print_done, print_step};
use chrono::{Local, SecondsFormat};

/// Current local time, RFC 3339 with microseconds.
pub fn timestamp_now() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Run every collector and return the assembled report.
///
/// Never fails: collector failures are inside the report as error entries.
/// Progress goes to stderr.
pub async fn run_audit<R>(runner: &R, config: &AuditConfig) -> Report
where
    R: CommandRunner + ?Sized,
{
    let audit_time = timestamp_now();
    print_banner(&config.project_id, &audit_time);
    log::info!("#Start audit of {}", config.project_id);

    let mut report = Report::new(&config.project_id, audit_time);

    // BigQuery is slow: one COUNT(*) per table
    print_step("📊", "Scanning BigQuery datasets...");
    report.bigquery.datasets = get_bigquery_datasets(runner, config).await;
    print_count(count_ok(&report.bigquery.datasets), "datasets");

    print_step("🔌", "Listing enabled APIs...");
    report.apis = get_enabled_apis(runner, config).await;
    print_count(count_ok(&report.apis), "APIs");

    print_step("🔐", "Listing secrets...");
    report.secrets = get_secrets(runner, config).await;
    print_count(count_ok(&report.secrets), "secrets");

    print_step("👤", "Listing service accounts...");
    report.service_accounts = get_service_accounts(runner, config).await;
    print_count(count_ok(&report.service_accounts), "service accounts");

    print_done();
    report
}
