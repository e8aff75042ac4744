use crate::shared::Result;

/// One installed distribution as reported by the package manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedPackage {
    pub name: String,
    pub version: String,
}

impl ListedPackage {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// PackageListingProvider port for enumerating installed packages
///
/// This port abstracts the package-manager "list" query
/// (e.g., `python -m pip list --format=json`).
pub trait PackageListingProvider {
    /// Lists every installed package
    ///
    /// # Errors
    /// Returns `CollaboratorUnavailable` if the query cannot be run, fails,
    /// or returns data that does not match the expected shape. Callers must
    /// not proceed with a partial listing.
    fn list_packages(&self) -> Result<Vec<ListedPackage>>;
}
