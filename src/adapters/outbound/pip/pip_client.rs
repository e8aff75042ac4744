use super::CommandRunner;
use crate::inspection::domain::{EnvironmentSnapshot, PackageKey};
use crate::ports::outbound::{
    DependencyEdge, DependencyProvider, EnvironmentProbe, ListedPackage, PackageListingProvider,
};
use crate::shared::error::InspectorError;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

const LIST_ARGS: &[&str] = &["-m", "pip", "list", "--format=json", "--disable-pip-version-check"];

const INSPECT_ARGS: &[&str] = &["-m", "pip", "inspect", "--disable-pip-version-check"];

const PROBE_SCRIPT: &str = "import json, platform, sys; print(json.dumps({\
'executable': sys.executable, \
'python_version': platform.python_version(), \
'platform': platform.platform()}))";

#[derive(Debug, Deserialize)]
struct PipListEntry {
    name: String,
    version: String,
}

#[derive(Debug, Deserialize)]
struct PipInspectReport {
    installed: Vec<InspectedDistribution>,
}

#[derive(Debug, Deserialize)]
struct InspectedDistribution {
    metadata: DistributionMetadata,
}

#[derive(Debug, Deserialize)]
struct DistributionMetadata {
    name: String,
    #[serde(default)]
    requires_dist: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ProbeReport {
    executable: String,
    python_version: String,
    platform: String,
}

/// PipClient adapter querying an interpreter through `python -m pip`
///
/// Implements the listing, dependency and environment ports against the
/// same interpreter, so all three describe one package universe.
#[derive(Debug, Clone)]
pub struct PipClient {
    python: PathBuf,
    runner: CommandRunner,
}

impl PipClient {
    pub fn new(python: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            python: python.into(),
            runner: CommandRunner::new(timeout),
        }
    }
}

impl PackageListingProvider for PipClient {
    fn list_packages(&self) -> Result<Vec<ListedPackage>> {
        let stdout = self.runner.run(&self.python, LIST_ARGS, "pip list")?;
        parse_pip_list(&stdout)
    }
}

impl DependencyProvider for PipClient {
    fn dependency_edges(&self) -> Result<Vec<DependencyEdge>> {
        let stdout = self.runner.run(&self.python, INSPECT_ARGS, "pip inspect")?;
        parse_pip_inspect(&stdout)
    }
}

impl EnvironmentProbe for PipClient {
    fn probe(&self) -> Result<EnvironmentSnapshot> {
        let stdout = self
            .runner
            .run(&self.python, &["-c", PROBE_SCRIPT], "interpreter probe")?;
        parse_probe(&stdout, std::env::var("VIRTUAL_ENV").ok(), Utc::now())
    }
}

/// Parses `pip list --format=json` output
fn parse_pip_list(stdout: &str) -> Result<Vec<ListedPackage>> {
    let entries: Vec<PipListEntry> = serde_json::from_str(stdout).map_err(|e| {
        InspectorError::collaborator("pip list", format!("Unexpected output format: {}", e))
    })?;

    Ok(entries
        .into_iter()
        .map(|entry| ListedPackage::new(entry.name, entry.version))
        .collect())
}

/// Parses `pip inspect` output into dependency edges
///
/// Requirements guarded by an `extra` marker are dropped. Requirements
/// guarded by any other environment marker are kept only when the required
/// package is installed, since markers are not evaluated here.
fn parse_pip_inspect(stdout: &str) -> Result<Vec<DependencyEdge>> {
    let report: PipInspectReport = serde_json::from_str(stdout).map_err(|e| {
        InspectorError::collaborator("pip inspect", format!("Unexpected output format: {}", e))
    })?;

    let installed: HashSet<PackageKey> = report
        .installed
        .iter()
        .map(|dist| PackageKey::normalize(&dist.metadata.name))
        .collect();

    let edges = report
        .installed
        .into_iter()
        .map(|dist| {
            let mut seen = HashSet::new();
            let dependencies = dist
                .metadata
                .requires_dist
                .iter()
                .filter_map(|requirement| parse_requirement(requirement))
                .filter(|req| {
                    !req.conditional || installed.contains(&PackageKey::normalize(req.name))
                })
                .filter(|req| seen.insert(PackageKey::normalize(req.name)))
                .map(|req| req.name.to_string())
                .collect();
            DependencyEdge::new(dist.metadata.name, dependencies)
        })
        .collect();

    Ok(edges)
}

/// Distribution name of a `Requires-Dist` entry
#[derive(Debug, PartialEq, Eq)]
struct Requirement<'a> {
    name: &'a str,
    /// Guarded by an environment marker
    conditional: bool,
}

/// Extracts the distribution name from a `Requires-Dist` value
///
/// Returns `None` for requirements that only apply to an extra, and for
/// entries with no recognizable name.
fn parse_requirement(requirement: &str) -> Option<Requirement<'_>> {
    let (specifier, marker) = match requirement.split_once(';') {
        Some((specifier, marker)) => (specifier, Some(marker)),
        None => (requirement, None),
    };

    if let Some(marker) = marker {
        let mentions_extra = marker
            .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .any(|token| token == "extra");
        if mentions_extra {
            return None;
        }
    }

    let specifier = specifier.trim_start();
    let end = specifier
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        .unwrap_or(specifier.len());
    let name = &specifier[..end];

    if name.is_empty() {
        return None;
    }

    Some(Requirement {
        name,
        conditional: marker.is_some_and(|m| !m.trim().is_empty()),
    })
}

/// Parses the interpreter probe output
fn parse_probe(
    stdout: &str,
    virtual_env: Option<String>,
    captured_at: DateTime<Utc>,
) -> Result<EnvironmentSnapshot> {
    let report: ProbeReport = serde_json::from_str(stdout.trim()).map_err(|e| {
        InspectorError::collaborator(
            "interpreter probe",
            format!("Unexpected output format: {}", e),
        )
    })?;

    Ok(EnvironmentSnapshot::new(
        report.executable,
        report.python_version,
        report.platform,
        virtual_env,
        captured_at,
    ))
}
