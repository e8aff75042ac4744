/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (interpreter, file system, console).
pub mod dependency_provider;
pub mod environment_probe;
pub mod exporter;
pub mod output_presenter;
pub mod package_listing;
pub mod progress_reporter;

pub use dependency_provider::{DependencyEdge, DependencyProvider};
pub use environment_probe::EnvironmentProbe;
pub use exporter::PackageExporter;
pub use output_presenter::OutputPresenter;
pub use package_listing::{ListedPackage, PackageListingProvider};
pub use progress_reporter::ProgressReporter;
