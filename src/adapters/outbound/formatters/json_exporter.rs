use crate::application::read_models::{ExportDocument, PackageView, ToolView};
use crate::inspection::domain::PackageRecord;
use crate::ports::outbound::PackageExporter;
use crate::shared::Result;
use chrono::{DateTime, Utc};

/// JsonExporter adapter for the JSON export document
///
/// Produces `{ tool, generatedAt, packages }` with packages in index order.
pub struct JsonExporter {
    generated_at: Option<DateTime<Utc>>,
}

impl JsonExporter {
    pub fn new() -> Self {
        Self { generated_at: None }
    }

    /// Creates an exporter with a fixed timestamp instead of the current time
    pub fn with_timestamp(generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at: Some(generated_at),
        }
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageExporter for JsonExporter {
    fn export(&self, packages: &[&PackageRecord]) -> Result<String> {
        let document = ExportDocument {
            tool: ToolView::default(),
            generated_at: self.generated_at.unwrap_or_else(Utc::now),
            packages: packages.iter().map(|p| PackageView::from(*p)).collect(),
        };

        let mut json = serde_json::to_string_pretty(&document)
            .map_err(|e| anyhow::anyhow!("Failed to serialize export document: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
