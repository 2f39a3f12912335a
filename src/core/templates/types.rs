//! Core template types

use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Placeholder name to replacement value
pub type Substitutions = HashMap<String, String>;

/// Where a template body came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "path")]
pub enum TemplateSource {
    Embedded,
    FileSystem(PathBuf),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::Embedded => write!(f, "embedded"),
            TemplateSource::FileSystem(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A named template body. Never mutated once loaded.
#[derive(Debug, Clone)]
pub struct Template {
    pub id: String,
    pub description: Option<String>,
    pub body: String,
    pub source: TemplateSource,
}

impl Template {
    pub fn new<I: Into<String>, B: Into<String>>(id: I, body: B, source: TemplateSource) -> Self {
        Self {
            id: id.into(),
            description: None,
            body: body.into(),
            source,
        }
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Placeholder names the body requires, in order of first appearance
    pub fn placeholders(&self) -> Vec<String> {
        super::placeholder::placeholders(&self.body)
    }

    pub fn metadata(&self) -> TemplateMetadata {
        TemplateMetadata {
            id: self.id.clone(),
            description: self.description.clone(),
            source: self.source.clone(),
            placeholders: self.placeholders(),
        }
    }
}

/// Metadata describing a template without its body.
/// Used for listing and displaying templates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateMetadata {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub source: TemplateSource,
    pub placeholders: Vec<String>,
}

/// A successful emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emission {
    /// Path the rendered text was written to
    pub path: PathBuf,
}

/// Outcome of a single emission
pub type EmissionResult = crate::core::error::Result<Emission>;
