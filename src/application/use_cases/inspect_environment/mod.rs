use crate::application::dto::IndexScope;
use crate::inspection::domain::{
    EnvironmentSnapshot, PackageIndex, PackageKey, PackageRecord, TreeNode,
};
use crate::inspection::services::{ForestBuilder, PackageSearch, RootSelection};
use crate::ports::outbound::{
    DependencyEdge, DependencyProvider, EnvironmentProbe, ListedPackage, PackageListingProvider,
    ProgressReporter,
};
use crate::shared::error::InspectorError;
use crate::shared::Result;
use std::collections::HashMap;

/// InspectEnvironmentUseCase - Core use case for environment inspection
///
/// Orchestrates the collaborator queries and hands their results to the
/// domain services. Every command builds a fresh index; nothing is cached
/// between calls.
///
/// # Type Parameters
/// * `LP` - PackageListingProvider implementation
/// * `DP` - DependencyProvider implementation
/// * `EP` - EnvironmentProbe implementation
/// * `PR` - ProgressReporter implementation
pub struct InspectEnvironmentUseCase<LP, DP, EP, PR> {
    listing_provider: LP,
    dependency_provider: DP,
    environment_probe: EP,
    progress_reporter: PR,
}

impl<LP, DP, EP, PR> InspectEnvironmentUseCase<LP, DP, EP, PR>
where
    LP: PackageListingProvider,
    DP: DependencyProvider,
    EP: EnvironmentProbe,
    PR: ProgressReporter,
{
    /// Creates a new InspectEnvironmentUseCase with injected dependencies
    pub fn new(
        listing_provider: LP,
        dependency_provider: DP,
        environment_probe: EP,
        progress_reporter: PR,
    ) -> Self {
        Self {
            listing_provider,
            dependency_provider,
            environment_probe,
            progress_reporter,
        }
    }

    /// Captures interpreter metadata
    pub fn environment_info(&self) -> Result<EnvironmentSnapshot> {
        self.run_task("🐍 Inspecting Python interpreter...", "Interpreter probe", || {
            self.environment_probe.probe()
        })
    }

    /// Loads the installed packages into a fresh PackageIndex
    ///
    /// With `IndexScope::WithDependencies` the dependency edges are merged
    /// in by key. A failure of either query aborts the whole load.
    pub fn load_index(&self, scope: IndexScope) -> Result<PackageIndex> {
        let listed = self.run_task("📦 Listing installed packages...", "Package listing", || {
            self.listing_provider.list_packages()
        })?;

        let edges = match scope {
            IndexScope::PackagesOnly => Vec::new(),
            IndexScope::WithDependencies => self.run_task(
                "🔗 Reading package dependencies...",
                "Dependency query",
                || self.dependency_provider.dependency_edges(),
            )?,
        };

        let index = Self::assemble_index(listed, edges)?;
        self.progress_reporter
            .report(&format!("✅ Detected {} package(s)", index.len()));
        Ok(index)
    }

    /// Builds the dependency forest for the installed packages
    pub fn dependency_forest(&self, selection: RootSelection) -> Result<Vec<TreeNode>> {
        let index = self.load_index(IndexScope::WithDependencies)?;
        Ok(Self::forest_for(&index, selection))
    }

    /// Builds the forest from an index the caller already loaded
    ///
    /// Lets one listing serve both the package table and the tree.
    pub fn forest_for(index: &PackageIndex, selection: RootSelection) -> Vec<TreeNode> {
        let unresolved = index.unresolved_dependency_count();
        if unresolved > 0 {
            tracing::debug!(unresolved, "declared dependencies are not installed");
        }

        ForestBuilder::build(index, selection)
    }

    /// Packages whose name contains `query`, ignoring case
    ///
    /// The query is validated before any collaborator is called.
    pub fn search(&self, query: &str) -> Result<Vec<PackageRecord>> {
        let search = PackageSearch::new(query)?;
        let index = self.load_index(IndexScope::PackagesOnly)?;
        Ok(search.run(&index).into_iter().cloned().collect())
    }

    /// Runs one collaborator query between `begin_task` and `end_task`,
    /// or `report_error` if it fails
    fn run_task<T>(&self, message: &str, name: &str, task: impl FnOnce() -> Result<T>) -> Result<T> {
        self.progress_reporter.begin_task(message);
        let outcome = task();
        match &outcome {
            Ok(_) => self.progress_reporter.end_task(),
            Err(_) => self.progress_reporter.report_error(&format!("❌ {} failed", name)),
        }
        outcome
    }

    /// Merges the listing with dependency edges into PackageRecords
    ///
    /// The listing decides which packages exist and in which order; edges
    /// for packages missing from the listing are dropped.
    fn assemble_index(listed: Vec<ListedPackage>, edges: Vec<DependencyEdge>) -> Result<PackageIndex> {
        let edges_by_key: HashMap<PackageKey, Vec<String>> = edges
            .into_iter()
            .map(|edge| (edge.key(), edge.dependencies))
            .collect();

        let mut records = Vec::with_capacity(listed.len());
        for package in listed {
            let key = PackageKey::normalize(&package.name);
            let dependencies = edges_by_key.get(&key).cloned().unwrap_or_default();
            let record = PackageRecord::new(package.name, package.version, &dependencies)
                .map_err(|e| InspectorError::collaborator("package listing", e.to_string()))?;
            records.push(record);
        }

        let index = PackageIndex::build(records);
        let orphaned = edges_by_key
            .keys()
            .filter(|key| !index.contains(key.as_str()))
            .count();
        if orphaned > 0 {
            tracing::debug!(
                orphaned,
                "ignoring dependency data for packages missing from the listing"
            );
        }

        Ok(index)
    }
}

#[cfg(test)]
mod tests;
