use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between bad input and
/// failures of the inspected environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Application error (pip query failed, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors, bad values)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error returned from the application.
    ///
    /// `InvalidArgument` and `ConfigError` map to `InvalidArguments`;
    /// everything else is an application error.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<InspectorError>() {
            Some(InspectorError::InvalidArgument { .. }) | Some(InspectorError::ConfigError { .. }) => {
                ExitCode::InvalidArguments
            }
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for environment inspection.
///
/// Malformed data inside a successful pip response (a dependency that is
/// not installed, a dependency cycle) is not an error; the forest builder
/// marks such nodes instead.
#[derive(Debug, Error)]
pub enum InspectorError {
    #[error("Failed to query {collaborator}\nDetails: {details}\n\n💡 Hint: Check that the Python interpreter exists and that pip is installed (python -m pip --version)")]
    CollaboratorUnavailable {
        collaborator: String,
        details: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    OutputWriteFailure { path: PathBuf, details: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Invalid config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid YAML and only supported values")]
    ConfigError { path: PathBuf, details: String },
}

impl InspectorError {
    pub fn collaborator(collaborator: impl Into<String>, details: impl Into<String>) -> Self {
        InspectorError::CollaboratorUnavailable {
            collaborator: collaborator.into(),
            details: details.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        InspectorError::InvalidArgument {
            message: message.into(),
        }
    }
}
