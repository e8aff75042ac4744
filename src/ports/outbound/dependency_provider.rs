use crate::inspection::domain::PackageKey;
use crate::shared::Result;

/// Declared requirements of one installed distribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    pub name: String,
    /// Names of required distributions, in declared order
    pub dependencies: Vec<String>,
}

impl DependencyEdge {
    pub fn new(name: impl Into<String>, dependencies: Vec<String>) -> Self {
        Self {
            name: name.into(),
            dependencies,
        }
    }

    pub fn key(&self) -> PackageKey {
        PackageKey::normalize(&self.name)
    }
}

/// DependencyProvider port for dependency introspection
///
/// This port abstracts the query that reports, for each installed package,
/// which other packages it requires (e.g., `python -m pip inspect`).
pub trait DependencyProvider {
    /// Returns the dependency edges for the installed package universe
    ///
    /// # Errors
    /// Returns `CollaboratorUnavailable` if the query cannot be run, fails,
    /// or returns malformed data
    fn dependency_edges(&self) -> Result<Vec<DependencyEdge>>;
}
