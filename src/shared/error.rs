use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Rejections (validation failures, id conflicts) are an expected outcome of
/// an edit command and get their own code so scripts can tell them apart
/// from real failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// The submitted record was rejected; nothing was written
    Rejected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (store I/O, configuration, rendering service, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Rejected => write!(f, "Rejected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Infrastructure-facing errors.
///
/// Uses thiserror to derive Display and Error; every variant carries a hint
/// line for the terminal.
#[derive(Debug, Error)]
pub enum ArchVizError {
    #[error("Failed to read stored value '{key}' from {path}\nDetails: {details}\n\n💡 Hint: Please verify that the data directory is readable")]
    StoreReadError {
        key: String,
        path: PathBuf,
        details: String,
    },

    #[error("Stored value '{key}' is not valid JSON: {path}\nDetails: {details}\n\n💡 Hint: Delete the file to fall back to the built-in dataset")]
    StoreParseError {
        key: String,
        path: PathBuf,
        details: String,
    },

    #[error("Failed to write stored value '{key}' to {path}\nDetails: {details}\n\n💡 Hint: Please verify that the data directory exists and you have write permissions")]
    StoreWriteError {
        key: String,
        path: PathBuf,
        details: String,
    },

    #[error("Failed to write output file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    OutputWriteError { path: PathBuf, details: String },

    #[error("Invalid data directory: {path}\nReason: {reason}\n\n💡 Hint: Pass an existing directory with --data-dir")]
    InvalidDataDir { path: PathBuf, reason: String },

    #[error("Diagram rendering service failed: {url}\nDetails: {details}\n\n💡 Hint: The diagram text is still available with the 'diagram' command")]
    RenderServiceError { url: String, details: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

/// Rejections raised by inventory mutations.
///
/// These are expected outcomes of an edit: the store is left untouched and
/// the CLI exits with [`ExitCode::Rejected`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("An entity with ID '{id}' already exists")]
    DuplicateId { id: String },

    #[error("No component or related application with ID '{id}'")]
    UnknownEntity { id: String },

    #[error("Unknown application '{id}'")]
    UnknownApplication { id: String },

    #[error("No application selected\n\n💡 Hint: Pick one with --app before adding records")]
    NoApplicationSelected,

    #[error("Entity '{id}' is a {actual}, not a {expected}")]
    KindMismatch {
        id: String,
        expected: String,
        actual: String,
    },

    #[error("{0}")]
    Invalid(#[from] crate::inventory::services::ValidationErrors),
}
