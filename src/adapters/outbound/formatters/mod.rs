/// Formatter adapters for tree rendering, tables and export formats
mod json_exporter;
mod requirements_exporter;
mod table_formatter;
mod tree_renderer;

pub use json_exporter::JsonExporter;
pub use requirements_exporter::RequirementsExporter;
pub use table_formatter::{EnvironmentTableFormatter, PackageTableFormatter};
pub use tree_renderer::TreeRenderer;
