//! Error handling for template emission.
//!
//! This module defines [`EmitError`], the typed failure half of an emission
//! result, along with a convenient `Result` type alias. Every failure is
//! terminal for the call that produced it; nothing is retried internally.
//!
//! # Examples
//!
//! ```
//! use templet::core::error::EmitError;
//!
//! let error = EmitError::missing_variable("title");
//! assert_eq!(error.to_string(), "Missing variable: title");
//! assert_eq!(error.exit_code(), 4);
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type for emission operations
pub type Result<T> = std::result::Result<T, EmitError>;

/// Why an emission failed
#[derive(Debug, Error)]
pub enum EmitError {
    /// The template id is not present in the registry
    #[error("Unknown template: {id}")]
    UnknownTemplate { id: String },

    /// The template references a placeholder with no substitution entry
    #[error("Missing variable: {name}")]
    MissingVariable { name: String },

    /// The destination path was empty
    #[error("Invalid destination: path must not be empty")]
    InvalidDestination,

    /// A parent directory of the destination could not be created
    #[error("Failed to create directory {}: {cause}", path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },

    /// The rendered text could not be written to the destination
    #[error("Failed to write {}: {cause}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },
}

/// Stable, machine-readable name of an [`EmitError`] variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnknownTemplate,
    MissingVariable,
    InvalidDestination,
    DirectoryCreationFailed,
    WriteFailed,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UnknownTemplate => "unknown_template",
            ErrorKind::MissingVariable => "missing_variable",
            ErrorKind::InvalidDestination => "invalid_destination",
            ErrorKind::DirectoryCreationFailed => "directory_creation_failed",
            ErrorKind::WriteFailed => "write_failed",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EmitError {
    /// Create an unknown template error
    pub fn unknown_template<S: Into<String>>(id: S) -> Self {
        Self::UnknownTemplate { id: id.into() }
    }

    /// Create a missing variable error
    pub fn missing_variable<S: Into<String>>(name: S) -> Self {
        Self::MissingVariable { name: name.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            EmitError::UnknownTemplate { .. } => ErrorKind::UnknownTemplate,
            EmitError::MissingVariable { .. } => ErrorKind::MissingVariable,
            EmitError::InvalidDestination => ErrorKind::InvalidDestination,
            EmitError::DirectoryCreationFailed { .. } => ErrorKind::DirectoryCreationFailed,
            EmitError::WriteFailed { .. } => ErrorKind::WriteFailed,
        }
    }

    /// Process exit code the CLI reports for this failure.
    ///
    /// `0` is success, `1` is reserved for errors outside emission and `2`
    /// for usage errors, so emission failures start at `3`.
    pub fn exit_code(&self) -> u8 {
        match self.kind() {
            ErrorKind::UnknownTemplate => 3,
            ErrorKind::MissingVariable => 4,
            ErrorKind::DirectoryCreationFailed => 5,
            ErrorKind::WriteFailed => 6,
            ErrorKind::InvalidDestination => 7,
        }
    }
}
