use pyenv_inspector::prelude::*;

/// Mock PackageListingProvider returning a fixed listing
pub struct MockPackageListing {
    packages: Vec<ListedPackage>,
    failure: Option<String>,
}

impl MockPackageListing {
    pub fn new(packages: &[(&str, &str)]) -> Self {
        Self {
            packages: packages
                .iter()
                .map(|(name, version)| ListedPackage::new(*name, *version))
                .collect(),
            failure: None,
        }
    }

    /// A listing whose query fails like a missing pip would
    pub fn failing(details: &str) -> Self {
        Self {
            packages: Vec::new(),
            failure: Some(details.to_string()),
        }
    }
}

impl PackageListingProvider for MockPackageListing {
    fn list_packages(&self) -> Result<Vec<ListedPackage>> {
        match &self.failure {
            Some(details) => Err(InspectorError::collaborator("pip list", details.clone()).into()),
            None => Ok(self.packages.clone()),
        }
    }
}
