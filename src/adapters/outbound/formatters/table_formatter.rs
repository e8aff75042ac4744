use crate::application::dto::RenderMode;
use crate::application::read_models::PackageView;
use crate::inspection::domain::{EnvironmentSnapshot, PackageRecord};
use crate::shared::Result;

/// Renders rows as left-aligned columns under a dashed header rule
fn render_columns(headers: [&str; 2], rows: &[[String; 2]]) -> String {
    let mut widths = headers.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    let mut push_row = |cells: [&str; 2]| {
        let line = format!("{:<w$}  {}", cells[0], cells[1], w = widths[0]);
        output.push_str(line.trim_end());
        output.push('\n');
    };

    push_row(headers);
    let rule = widths.map(|w| "-".repeat(w));
    push_row([rule[0].as_str(), rule[1].as_str()]);
    for row in rows {
        push_row([row[0].as_str(), row[1].as_str()]);
    }
    output
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)
        .map_err(|e| anyhow::anyhow!("Failed to serialize output: {}", e))?;
    json.push('\n');
    Ok(json)
}

/// PackageTableFormatter for `list` and `search` results
pub struct PackageTableFormatter;

impl PackageTableFormatter {
    pub fn render(packages: &[&PackageRecord], mode: RenderMode) -> Result<String> {
        match mode {
            RenderMode::Human => {
                let rows: Vec<[String; 2]> = packages
                    .iter()
                    .map(|p| [p.name().to_string(), p.version().to_string()])
                    .collect();
                Ok(render_columns(["Package", "Version"], &rows))
            }
            RenderMode::Structured => {
                let views: Vec<PackageView> = packages.iter().map(|p| PackageView::from(*p)).collect();
                to_json(&views)
            }
        }
    }
}

/// EnvironmentTableFormatter for `info`
pub struct EnvironmentTableFormatter;

impl EnvironmentTableFormatter {
    pub fn render(snapshot: &EnvironmentSnapshot, mode: RenderMode) -> Result<String> {
        match mode {
            RenderMode::Human => {
                let rows: Vec<[String; 2]> = snapshot
                    .rows()
                    .into_iter()
                    .map(|(property, value)| [property.to_string(), value])
                    .collect();
                Ok(render_columns(["Property", "Value"], &rows))
            }
            RenderMode::Structured => to_json(snapshot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(name: &str, version: &str) -> PackageRecord {
        PackageRecord::new(name.to_string(), version.to_string(), &[] as &[&str]).unwrap()
    }

    #[test]
    fn test_package_table_aligns_columns() {
        let packages = [record("requests", "2.31.0"), record("six", "1.16.0")];
        let refs: Vec<&PackageRecord> = packages.iter().collect();

        let output = PackageTableFormatter::render(&refs, RenderMode::Human).unwrap();

        let expected = "\
Package   Version
--------  -------
requests  2.31.0
six       1.16.0
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_package_table_empty_has_header_only() {
        let output = PackageTableFormatter::render(&[], RenderMode::Human).unwrap();
        assert_eq!(output, "Package  Version\n-------  -------\n");
    }

    #[test]
    fn test_package_json() {
        let packages = [record("requests", "2.31.0")];
        let refs: Vec<&PackageRecord> = packages.iter().collect();

        let output = PackageTableFormatter::render(&refs, RenderMode::Structured).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            value,
            serde_json::json!([{"name": "requests", "version": "2.31.0"}])
        );
    }

    fn snapshot() -> EnvironmentSnapshot {
        EnvironmentSnapshot::new(
            "/usr/bin/python3".to_string(),
            "3.12.1".to_string(),
            "Linux".to_string(),
            Some("/home/user/.venv".to_string()),
            Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
        )
    }

    #[test]
    fn test_environment_table() {
        let output = EnvironmentTableFormatter::render(&snapshot(), RenderMode::Human).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Property           Value");
        assert_eq!(lines[2], "Python Executable  /usr/bin/python3");
        assert_eq!(lines[3], "Python Version     3.12.1");
        assert_eq!(lines[5], "Virtual Env        /home/user/.venv");
    }

    #[test]
    fn test_environment_json() {
        let output =
            EnvironmentTableFormatter::render(&snapshot(), RenderMode::Structured).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["pythonVersion"], "3.12.1");
        assert_eq!(value["virtualEnv"], "/home/user/.venv");
        assert_eq!(value["capturedAt"], "2024-01-15T10:30:00Z");
    }
}
