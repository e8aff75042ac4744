use chrono::{DateTime, Utc};
use serde::Serialize;

/// Read-only snapshot of the inspected interpreter, captured once per run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentSnapshot {
    executable: String,
    python_version: String,
    platform: String,
    virtual_env: Option<String>,
    captured_at: DateTime<Utc>,
}

impl EnvironmentSnapshot {
    pub fn new(
        executable: String,
        python_version: String,
        platform: String,
        virtual_env: Option<String>,
        captured_at: DateTime<Utc>,
    ) -> Self {
        Self {
            executable,
            python_version,
            platform,
            virtual_env: virtual_env.filter(|value| !value.trim().is_empty()),
            captured_at,
        }
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    pub fn python_version(&self) -> &str {
        &self.python_version
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn virtual_env(&self) -> Option<&str> {
        self.virtual_env.as_deref()
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// Property/value rows in display order
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Python Executable", self.executable.clone()),
            ("Python Version", self.python_version.clone()),
            ("Platform", self.platform.clone()),
            (
                "Virtual Env",
                self.virtual_env
                    .clone()
                    .unwrap_or_else(|| "Not in a virtual environment".to_string()),
            ),
            ("Captured At", self.captured_at.to_rfc3339()),
        ]
    }
}
