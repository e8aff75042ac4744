use crate::inspection::domain::PackageRecord;
use crate::ports::outbound::PackageExporter;
use crate::shared::Result;

/// RequirementsExporter adapter for pip requirements files
///
/// One pinned `name==version` line per package, in index order.
pub struct RequirementsExporter;

impl RequirementsExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RequirementsExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageExporter for RequirementsExporter {
    fn export(&self, packages: &[&PackageRecord]) -> Result<String> {
        Ok(packages
            .iter()
            .map(|p| format!("{}=={}\n", p.name(), p.version()))
            .collect())
    }
}
