use chrono::{TimeZone, Utc};
use pyenv_inspector::prelude::*;

/// Mock EnvironmentProbe with a fixed snapshot
pub struct MockEnvironmentProbe {
    virtual_env: Option<String>,
}

impl MockEnvironmentProbe {
    pub fn new() -> Self {
        Self { virtual_env: None }
    }

    pub fn in_virtual_env(path: &str) -> Self {
        Self {
            virtual_env: Some(path.to_string()),
        }
    }
}

impl EnvironmentProbe for MockEnvironmentProbe {
    fn probe(&self) -> Result<EnvironmentSnapshot> {
        Ok(EnvironmentSnapshot::new(
            "/usr/bin/python3".to_string(),
            "3.12.1".to_string(),
            "Linux-6.1-x86_64".to_string(),
            self.virtual_env.clone(),
            Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
        ))
    }
}
