//! Simplified IAM service account record.

use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ServiceAccount {
    pub email: String,
    pub display_name: String,
    pub disabled: bool,
}
