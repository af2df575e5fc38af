//! BigQuery dataset, table and row-count collection through the `bq` CLI.
//!
//! Every decode point degrades locally: a bad table listing marks only its
//! dataset, a bad count marks only its table as `"unknown"`.

use super::cli::{argv, CommandRunner};
use super::parse::{decode, decode_list, diagnostic};
use crate::config::AuditConfig;
use crate::models::{Dataset, Entry, RowCount, Table, TABLE_TYPE};
use serde::Deserialize;
use serde_json::Value;

const UNKNOWN_ID: &str = "unknown";

/// One element of `bq ls --format=json`.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct DatasetDescriptor {
    dataset_reference: Option<DatasetReference>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct DatasetReference {
    dataset_id: Option<String>,
}

impl DatasetDescriptor {
    fn dataset_id(self) -> String {
        self.dataset_reference
            .and_then(|r| r.dataset_id)
            .unwrap_or_else(|| UNKNOWN_ID.to_string())
    }
}

/// One element of `bq ls --format=json <project>:<dataset>`.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct TableDescriptor {
    table_reference: Option<TableReference>,
    #[serde(rename = "type")]
    table_type: Option<String>,
    creation_time: Option<Value>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct TableReference {
    table_id: Option<String>,
}

impl TableDescriptor {
    fn into_table(self) -> Table {
        Table {
            table_id: self
                .table_reference
                .and_then(|r| r.table_id)
                .unwrap_or_else(|| UNKNOWN_ID.to_string()),
            table_type: self.table_type.unwrap_or_else(|| TABLE_TYPE.to_string()),
            // epoch millis, normally a JSON string; other values keep their JSON text
            creation_time: match self.creation_time {
                None | Some(Value::Null) => None,
                Some(Value::String(s)) => Some(s),
                Some(other) => Some(other.to_string()),
            },
            row_count: None,
        }
    }
}

/// One row of the `COUNT(*)` query result.
#[derive(Deserialize, Debug)]
struct CountRow {
    cnt: Value,
}

pub fn list_datasets_cmd(project_id: &str) -> Vec<String> {
    argv(&["bq", "ls", &format!("--project_id={project_id}"), "--format=json"])
}

pub fn list_tables_cmd(project_id: &str, dataset_id: &str) -> Vec<String> {
    argv(&[
        "bq",
        "ls",
        &format!("--project_id={project_id}"),
        "--format=json",
        &format!("{project_id}:{dataset_id}"),
    ])
}

pub fn row_count_cmd(project_id: &str, dataset_id: &str, table_id: &str) -> Vec<String> {
    argv(&[
        "bq",
        "query",
        "--nouse_legacy_sql",
        "--format=json",
        &format!("SELECT COUNT(*) as cnt FROM `{project_id}.{dataset_id}.{table_id}`"),
    ])
}

/// Collect every dataset of the project (minus the skip-list) with its tables.
///
/// # Returns
/// The datasets in listing order, or a single error entry when the dataset
/// listing itself failed.
pub async fn get_bigquery_datasets<R>(runner: &R, config: &AuditConfig) -> Vec<Entry<Dataset>>
where
    R: CommandRunner + ?Sized,
{
    let output = match runner
        .run(&list_datasets_cmd(&config.project_id), config.command_timeout)
        .await
    {
        Ok(output) => output,
        Err(e) => return vec![Entry::error(e.to_string())],
    };

    let descriptors: Vec<DatasetDescriptor> = match decode(&output, "datasets") {
        Ok(descriptors) => descriptors,
        Err(_) => {
            return vec![Entry::error(format!(
                "Failed to parse datasets: {}",
                diagnostic(&output)
            ))]
        }
    };
    log::info!("got {} datasets", descriptors.len());

    let mut datasets = Vec::with_capacity(descriptors.len());
    for descriptor in descriptors {
        let dataset_id = descriptor.dataset_id();
        if config.is_skipped(&dataset_id) {
            log::info!("Skipping dataset {dataset_id}");
            continue;
        }
        datasets.push(Entry::Ok(get_dataset(runner, config, dataset_id).await));
    }
    datasets
}

async fn get_dataset<R>(runner: &R, config: &AuditConfig, dataset_id: String) -> Dataset
where
    R: CommandRunner + ?Sized,
{
    let mut dataset = Dataset::new(dataset_id);

    let output = match runner
        .run(
            &list_tables_cmd(&config.project_id, &dataset.dataset_id),
            config.command_timeout,
        )
        .await
    {
        Ok(output) => output,
        Err(e) => {
            dataset.tables_error = Some(diagnostic(&e.to_string()));
            return dataset;
        }
    };

    let descriptors: Vec<TableDescriptor> = match decode_list(&output, "tables") {
        Ok(descriptors) => descriptors,
        Err(_) => {
            dataset.tables_error = Some(diagnostic(&output));
            return dataset;
        }
    };

    for descriptor in descriptors {
        // only an explicit TABLE is counted, not the defaulted tag
        let counted = descriptor.table_type.as_deref() == Some(TABLE_TYPE);
        let mut table = descriptor.into_table();
        if counted {
            table.row_count = Some(
                get_row_count(runner, config, &dataset.dataset_id, &table.table_id).await,
            );
        }
        dataset.tables.push(table);
    }
    log::debug!(
        "dataset {} has {} tables",
        dataset.dataset_id,
        dataset.tables.len()
    );
    dataset
}

async fn get_row_count<R>(
    runner: &R,
    config: &AuditConfig,
    dataset_id: &str,
    table_id: &str,
) -> RowCount
where
    R: CommandRunner + ?Sized,
{
    let cmd = row_count_cmd(&config.project_id, dataset_id, table_id);
    match runner.run(&cmd, config.row_count_timeout).await {
        Ok(output) => parse_row_count(&output),
        Err(e) => {
            log::warn!("row count failed for {dataset_id}.{table_id}: {e}");
            RowCount::Unknown
        }
    }
}

/// Parse `[{"cnt": "42"}]`. Anything else is [`RowCount::Unknown`].
fn parse_row_count(output: &str) -> RowCount {
    let rows: Vec<CountRow> = match decode(output, "row count") {
        Ok(rows) => rows,
        Err(_) => return RowCount::Unknown,
    };
    rows.first()
        .and_then(|row| match &row.cnt {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
        .map(RowCount::Count)
        .unwrap_or(RowCount::Unknown)
}
