//! Integration tests for gcp-infra-audit
//!
//! These tests run the binary against fake `bq` and `gcloud` scripts placed
//! first on `PATH`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn audit_cmd(workdir: &TempDir) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("gcp-infra-audit");
    cmd.current_dir(workdir.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_missing_project_exits_1() {
    let workdir = TempDir::new().unwrap();

    audit_cmd(&workdir)
        .env_remove("GCP_PROJECT_ID")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "ERROR: GCP_PROJECT_ID environment variable not set",
        ))
        .stderr(predicate::str::contains("Usage: export GCP_PROJECT_ID="));
}

#[test]
fn test_empty_project_exits_1() {
    let workdir = TempDir::new().unwrap();

    audit_cmd(&workdir)
        .env("GCP_PROJECT_ID", "")
        .assert()
        .code(1)
        .stdout("");
}

#[cfg(unix)]
mod fake_cli {
    use super::*;
    use serde_json::{json, Value};
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    const FAKE_BQ: &str = r#"#!/bin/sh
case "$*" in
  "ls --project_id=p1 --format=json")
    echo '[{"datasetReference":{"datasetId":"d1"}},{"datasetReference":{"datasetId":"d2"}}]' ;;
  "ls --project_id=p1 --format=json p1:d1")
    echo '[{"tableReference":{"tableId":"t1"},"type":"TABLE","creationTime":"123"},'
    echo ' {"tableReference":{"tableId":"t2"},"type":"TABLE","creationTime":"456"},'
    echo ' {"tableReference":{"tableId":"v1"},"type":"VIEW","creationTime":"789"}]' ;;
  "ls --project_id=p1 --format=json p1:d2")
    echo 'BigQuery error in ls operation: Access Denied' ;;
  *'p1.d1.t1'*)
    echo '[{"cnt":"42"}]' ;;
  *'p1.d1.t2'*)
    echo 'Waiting on bqjob_r1 ... (0s) Current status: DONE' ;;
  *)
    echo "unexpected bq call: $*" >&2
    exit 2 ;;
esac
"#;

    const FAKE_GCLOUD: &str = r#"#!/bin/sh
case "$*" in
  "services list --enabled --project=p1 --format=value(config.name)")
    printf 'storage.googleapis.com\nbigquery.googleapis.com\n' ;;
  "secrets list --project=p1 --format=value(name)")
    printf 'zeta\nalpha\n' ;;
  "iam service-accounts list --project=p1 --format=json")
    echo 'ERROR: (gcloud.iam.service-accounts.list) PERMISSION_DENIED' ;;
  *)
    echo "unexpected gcloud call: $*" >&2
    exit 2 ;;
esac
"#;

    fn write_script(dir: &Path, name: &str, body: &str) {
        let path = dir.join(name);
        std::fs::write(&path, body).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn fake_path(bin_dir: &TempDir) -> String {
        let system_path = std::env::var("PATH").unwrap_or_default();
        format!("{}:{}", bin_dir.path().display(), system_path)
    }

    #[test]
    fn test_full_audit_with_fake_clis() {
        let bin_dir = TempDir::new().unwrap();
        write_script(bin_dir.path(), "bq", FAKE_BQ);
        write_script(bin_dir.path(), "gcloud", FAKE_GCLOUD);
        let workdir = TempDir::new().unwrap();

        let assert = audit_cmd(&workdir)
            .env("GCP_PROJECT_ID", "p1")
            .env("PATH", fake_path(&bin_dir))
            .assert()
            .success()
            .stderr(predicate::str::contains("Found 2 datasets"))
            .stderr(predicate::str::contains("Found 2 APIs"))
            .stderr(predicate::str::contains("Found 2 secrets"))
            .stderr(predicate::str::contains("Found 0 service accounts"))
            .stderr(predicate::str::contains("Audit complete"));

        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        let report: Value = serde_json::from_str(&stdout).expect("stdout should be one JSON document");

        assert_eq!(report["project_id"], "p1");
        assert!(report["audit_time"].is_string());
        assert_eq!(
            report["bigquery"]["datasets"],
            json!([
                {
                    "dataset_id": "d1",
                    "tables": [
                        {"table_id": "t1", "type": "TABLE", "creation_time": "123", "row_count": 42},
                        {"table_id": "t2", "type": "TABLE", "creation_time": "456", "row_count": "unknown"},
                        {"table_id": "v1", "type": "VIEW", "creation_time": "789"}
                    ]
                },
                {
                    "dataset_id": "d2",
                    "tables": [],
                    "tables_error": "BigQuery error in ls operation: Access Denied"
                }
            ])
        );
        assert_eq!(
            report["apis"],
            json!(["bigquery.googleapis.com", "storage.googleapis.com"])
        );
        assert_eq!(report["secrets"], json!(["alpha", "zeta"]));
        assert_eq!(
            report["service_accounts"],
            json!([{"error": "Failed to parse: ERROR: (gcloud.iam.service-accounts.list) PERMISSION_DENIED"}])
        );
    }

    const DENYING_GCLOUD: &str = r#"#!/bin/sh
case "$*" in
  "iam service-accounts list --project=p1 --format=json")
    echo 'ERROR: (gcloud.iam.service-accounts.list) PERMISSION_DENIED' >&2
    exit 1 ;;
  *)
    exit 0 ;;
esac
"#;

    const EMPTY_BQ: &str = r#"#!/bin/sh
echo '[]'
"#;

    #[test]
    fn test_silent_service_account_failure_is_error_shaped() {
        let bin_dir = TempDir::new().unwrap();
        write_script(bin_dir.path(), "bq", EMPTY_BQ);
        write_script(bin_dir.path(), "gcloud", DENYING_GCLOUD);
        let workdir = TempDir::new().unwrap();

        let assert = audit_cmd(&workdir)
            .env("GCP_PROJECT_ID", "p1")
            .env("PATH", fake_path(&bin_dir))
            .assert()
            .code(0)
            .stderr(predicate::str::contains("Found 0 service accounts"));

        let report: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
        assert_eq!(
            report["service_accounts"],
            json!([{"error": "Failed to parse: "}])
        );
        assert_eq!(report["bigquery"]["datasets"], json!([]));
        assert_eq!(report["apis"], json!([]));
        assert_eq!(report["secrets"], json!([]));
    }

    #[test]
    fn test_missing_clis_still_produce_a_report() {
        let empty_bin = TempDir::new().unwrap();
        let workdir = TempDir::new().unwrap();

        let assert = audit_cmd(&workdir)
            .env("GCP_PROJECT_ID", "p1")
            .env("PATH", empty_bin.path())
            .assert()
            .success();

        let report: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
        let datasets = report["bigquery"]["datasets"].as_array().unwrap();
        assert_eq!(datasets.len(), 1);
        assert!(datasets[0]["error"].as_str().unwrap().starts_with("ERROR: "));
        assert!(report["apis"][0].as_str().unwrap().starts_with("ERROR: "));
        assert!(report["secrets"][0].as_str().unwrap().starts_with("ERROR: "));
        assert!(report["service_accounts"][0]["error"]
            .as_str()
            .unwrap()
            .starts_with("ERROR: "));
    }
}
