use crate::adapters::outbound::formatters::{JsonExporter, RequirementsExporter};
use crate::application::dto::ExportFormat;
use crate::ports::outbound::PackageExporter;

/// Factory for creating package exporters
///
/// This factory encapsulates the creation logic for different exporter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct ExporterFactory;

impl ExporterFactory {
    /// Creates an exporter instance for the specified format
    ///
    /// # Examples
    /// ```
    /// use pyenv_inspector::application::dto::ExportFormat;
    /// use pyenv_inspector::application::factories::ExporterFactory;
    ///
    /// let exporter = ExporterFactory::create(ExportFormat::Requirements);
    /// ```
    pub fn create(format: ExportFormat) -> Box<dyn PackageExporter> {
        match format {
            ExportFormat::Json => Box::new(JsonExporter::new()),
            ExportFormat::Requirements => Box::new(RequirementsExporter::new()),
        }
    }

    /// Returns the progress message for the specified format
    ///
    /// # Examples
    /// ```
    /// use pyenv_inspector::application::dto::ExportFormat;
    /// use pyenv_inspector::application::factories::ExporterFactory;
    ///
    /// let message = ExporterFactory::progress_message(ExportFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON export...");
    /// ```
    pub fn progress_message(format: ExportFormat) -> &'static str {
        match format {
            ExportFormat::Json => "📝 Generating JSON export...",
            ExportFormat::Requirements => "📝 Generating requirements export...",
        }
    }
}
