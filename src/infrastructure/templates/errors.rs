//! Error types for loading templates into the registry

use thiserror::Error;

/// Errors that can occur while loading template sources
#[derive(Error, Debug)]
pub enum TemplateError {
    /// A template file or directory named by a manifest does not exist
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Invalid manifest file or format
    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    /// Two manifest entries share one id
    #[error("Duplicate template id: {0}")]
    DuplicateId(String),

    /// Template body is not UTF-8 text
    #[error("Template {0} is not valid UTF-8")]
    InvalidEncoding(String),

    /// IO error during template operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl TemplateError {
    /// Create a new template not found error with path
    pub fn not_found<S: Into<String>>(path: S) -> Self {
        Self::TemplateNotFound(path.into())
    }

    /// Create a new invalid manifest error
    pub fn invalid_manifest<S: Into<String>>(message: S) -> Self {
        Self::InvalidManifest(message.into())
    }
}
