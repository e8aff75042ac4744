use crate::inspection::domain::EnvironmentSnapshot;
use crate::shared::Result;

/// EnvironmentProbe port for interpreter metadata
pub trait EnvironmentProbe {
    /// Captures executable path, version, platform and active virtualenv
    ///
    /// # Errors
    /// Returns `CollaboratorUnavailable` if the interpreter cannot be queried
    fn probe(&self) -> Result<EnvironmentSnapshot>;
}
