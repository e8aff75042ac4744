/// Mock implementations for testing
mod mock_dependency_provider;
mod mock_environment_probe;
mod mock_package_listing;
mod mock_progress_reporter;

pub use mock_dependency_provider::MockDependencyProvider;
pub use mock_environment_probe::MockEnvironmentProbe;
pub use mock_package_listing::MockPackageListing;
pub use mock_progress_reporter::MockProgressReporter;
