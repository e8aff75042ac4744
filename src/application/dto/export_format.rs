/// Export format enumeration for the `export` command
///
/// This enum belongs in the application layer because both the CLI
/// (inbound adapter) and the exporters (outbound adapters) need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// JSON document with tool metadata and the package list
    Json,
    /// pip requirements file (`name==version` per line)
    Requirements,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "requirements" | "txt" => Ok(ExportFormat::Requirements),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json' or 'requirements'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Requirements => write!(f, "requirements"),
        }
    }
}
