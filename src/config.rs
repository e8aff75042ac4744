//! Configuration file support for pyenv-inspector.
//!
//! Provides YAML-based configuration through `pyenv-inspector.config.yml`
//! files, including data structures, file loading, validation and merging
//! with command-line options.

use pyenv_inspector::inspection::services::RootSelection;
use pyenv_inspector::shared::error::InspectorError;
use pyenv_inspector::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "pyenv-inspector.config.yml";

const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[cfg(windows)]
const DEFAULT_PYTHON: &str = "python";
#[cfg(not(windows))]
const DEFAULT_PYTHON: &str = "python3";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub python: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub all_roots: Option<bool>,
    pub color: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

fn config_error(path: &Path, details: impl Into<String>) -> anyhow::Error {
    InspectorError::ConfigError {
        path: path.to_path_buf(),
        details: details.into(),
    }
    .into()
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| config_error(path, format!("Failed to read config file: {}", e)))?;

    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content)
            .map_err(|e| config_error(path, format!("Failed to parse config file: {}", e)))?
    };

    validate_config(path, &config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(path: &Path, config: &ConfigFile) -> Result<()> {
    if config.timeout_secs == Some(0) {
        return Err(config_error(path, "timeout_secs must be greater than 0"));
    }
    if let Some(python) = &config.python {
        if python.as_os_str().is_empty() {
            return Err(config_error(path, "python must not be empty"));
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Options given on the command line that override the config file
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub python: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub all_roots: bool,
    pub no_color: bool,
}

/// Effective settings after merging CLI > config file > defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub python: PathBuf,
    pub timeout: Duration,
    pub root_selection: RootSelection,
    pub colored: bool,
}

impl Settings {
    /// `color_by_default` applies when neither the CLI nor the config decide
    pub fn merge(cli: CliOverrides, config: ConfigFile, color_by_default: bool) -> Self {
        let python = cli
            .python
            .or(config.python)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PYTHON));
        let timeout_secs = cli
            .timeout_secs
            .or(config.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let root_selection = if cli.all_roots || config.all_roots.unwrap_or(false) {
            RootSelection::All
        } else {
            RootSelection::Uncovered
        };
        let colored = !cli.no_color && config.color.unwrap_or(color_by_default);

        Self {
            python,
            timeout: Duration::from_secs(timeout_secs),
            root_selection,
            colored,
        }
    }
}
