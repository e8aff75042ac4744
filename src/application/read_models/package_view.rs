//! Package list views for `list --json` and `export --format json`

use crate::inspection::domain::PackageRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// View representation of an installed package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageView {
    pub name: String,
    pub version: String,
    /// Keys of required packages; omitted when none were loaded
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

impl From<&PackageRecord> for PackageView {
    fn from(record: &PackageRecord) -> Self {
        Self {
            name: record.name().to_string(),
            version: record.version().to_string(),
            dependencies: record
                .dependency_keys()
                .iter()
                .map(|key| key.to_string())
                .collect(),
        }
    }
}

/// Tool information embedded in exported documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolView {
    pub name: String,
    pub version: String,
}

impl Default for ToolView {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Top-level JSON export document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub tool: ToolView,
    pub generated_at: DateTime<Utc>,
    pub packages: Vec<PackageView>,
}
