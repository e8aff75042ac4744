//! Read models for rendering
//!
//! Serializable, view-optimized structs that formatters and exporters
//! produce from domain objects.

pub mod package_view;
pub mod tree_view;

pub use package_view::{ExportDocument, PackageView, ToolView};
pub use tree_view::TreeNodeView;
