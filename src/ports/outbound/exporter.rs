use crate::inspection::domain::PackageRecord;
use crate::shared::Result;

/// PackageExporter port for serializing the package list
///
/// This port abstracts the export file formats (JSON document,
/// requirements file, etc.).
pub trait PackageExporter {
    /// Serializes `packages` in the order given
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn export(&self, packages: &[&PackageRecord]) -> Result<String>;
}
