//! pyenv-inspector - inspect a Python interpreter's installed packages
//!
//! This library reports interpreter metadata, lists installed packages and
//! renders their declared dependencies as a forest, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`inspection`): Package index, forest builder and search
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): pip subprocess client, formatters, presenters
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pyenv_inspector::prelude::*;
//! use std::time::Duration;
//!
//! # fn main() -> Result<()> {
//! let pip = PipClient::new("python3", Duration::from_secs(60));
//! let use_case = InspectEnvironmentUseCase::new(
//!     pip.clone(),
//!     pip.clone(),
//!     pip,
//!     StderrProgressReporter::new(),
//! );
//!
//! let forest = use_case.dependency_forest(RootSelection::Uncovered)?;
//! let output = TreeRenderer::new(false).render(&forest, RenderMode::Human)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod inspection;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{
        EnvironmentTableFormatter, JsonExporter, PackageTableFormatter, RequirementsExporter,
        TreeRenderer,
    };
    pub use crate::adapters::outbound::pip::PipClient;
    pub use crate::application::dto::{ExportFormat, IndexScope, RenderMode};
    pub use crate::application::factories::{ExporterFactory, PresenterFactory, PresenterType};
    pub use crate::application::read_models::{ExportDocument, PackageView, TreeNodeView};
    pub use crate::application::use_cases::InspectEnvironmentUseCase;
    pub use crate::inspection::domain::{
        EnvironmentSnapshot, NodeKind, PackageIndex, PackageKey, PackageRecord, TreeNode,
    };
    pub use crate::inspection::services::{ForestBuilder, PackageSearch, RootSelection};
    pub use crate::ports::outbound::{
        DependencyEdge, DependencyProvider, EnvironmentProbe, ListedPackage, OutputPresenter,
        PackageExporter, PackageListingProvider, ProgressReporter,
    };
    pub use crate::shared::error::{ExitCode, InspectorError};
    pub use crate::shared::Result;
}
