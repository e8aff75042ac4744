/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod export_format;
mod render_mode;

pub use export_format::ExportFormat;
pub use render_mode::{IndexScope, RenderMode};
