//! BigQuery dataset and table records.

use serde::{Serialize, Serializer};

/// Row count of a table, or `"unknown"` when the count query failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowCount {
    Count(u64),
    Unknown,
}

impl Serialize for RowCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RowCount::Count(n) => serializer.serialize_u64(*n),
            RowCount::Unknown => serializer.serialize_str("unknown"),
        }
    }
}

/// One table or view within a dataset.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Table {
    pub table_id: String,
    /// Type tag reported by `bq`, e.g. `TABLE` or `VIEW`.
    #[serde(rename = "type")]
    pub table_type: String,
    /// Creation time in epoch milliseconds, as reported. A non-string JSON
    /// value is kept as its JSON text, e.g. `1700000000000`.
    pub creation_time: Option<String>,
    /// Only set for `TABLE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_count: Option<RowCount>,
}

/// Type tag of a regular table.
pub const TABLE_TYPE: &str = "TABLE";

/// A dataset with its tables.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Dataset {
    pub dataset_id: String,
    pub tables: Vec<Table>,
    /// Set when the table listing failed. `tables` is then empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tables_error: Option<String>,
}

impl Dataset {
    pub fn new(dataset_id: impl Into<String>) -> Self {
        Dataset {
            dataset_id: dataset_id.into(),
            tables: vec![],
            tables_error: None,
        }
    }
}
