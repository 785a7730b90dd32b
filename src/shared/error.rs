use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish caller mistakes from
/// failures that happened while reading the project or writing the BOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the BOM was written
    Success = 0,
    /// Application error (lockfile missing or malformed, file I/O error, etc.)
    ApplicationError = 1,
    /// Invalid arguments (clap parsing errors or rejected argument values)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code matching an error raised while generating the BOM.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<SbomError>() {
            Some(SbomError::InvalidArgument { .. }) => ExitCode::InvalidArguments,
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

/// Application-specific errors for SBOM generation.
///
/// Uses thiserror to derive Display and Error traits automatically.
#[derive(Debug, Error)]
pub enum SbomError {
    /// A value supplied to a constructor or to the renderer was rejected.
    #[error("Invalid {argument}: {value}\nReason: {reason}")]
    InvalidArgument {
        argument: String,
        value: String,
        reason: String,
    },

    #[error("Podfile.lock file not found: {path}\n\n💡 Hint: {suggestion}")]
    LockfileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse Podfile.lock file: {path}\nDetails: {details}\n\n💡 Hint: Please run 'pod install' and verify that the Podfile.lock file is in the correct format")]
    LockfileParseError { path: PathBuf, details: String },

    #[error("Failed to generate {format} output\nDetails: {details}")]
    OutputGenerationError { format: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have write permissions for the output location")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid CocoaPods project directory with --path")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl SbomError {
    /// Shorthand for building an [`SbomError::InvalidArgument`].
    pub fn invalid_argument(
        argument: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SbomError::InvalidArgument {
            argument: argument.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Returns true when the error (or anything it wraps) is an argument error.
pub fn is_invalid_argument(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<SbomError>(),
        Some(SbomError::InvalidArgument { .. })
    )
}
