//! Common manifest parsing for all template sources
//!
//! Both the embedded bundle and user template directories describe their
//! contents with the same `manifest.yml`:
//!
//! ```yaml
//! templates:
//!   - id: swarm/report-modal
//!     source: swarm/report_modal.tsx.tmpl
//!     description: Modal component for reporting a bee swarm sighting
//! ```

use crate::infrastructure::templates::TemplateError;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Component, Path};

/// File names probed for a manifest, in order
pub const MANIFEST_FILE_NAMES: [&str; 2] = ["manifest.yml", "manifest.yaml"];

#[derive(Debug, Clone, Deserialize)]
struct ManifestData {
    #[serde(default)]
    templates: Vec<ManifestEntry>,
}

/// One template declared by a manifest
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestEntry {
    /// Registry id, e.g. `swarm/report-modal`
    pub id: String,
    /// Body file, relative to the manifest's directory
    pub source: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Parse manifest YAML content and validate its entries
pub fn parse_manifest_yaml(content: &str) -> Result<Vec<ManifestEntry>, TemplateError> {
    let data: ManifestData = serde_yaml::from_str(content).map_err(|e| {
        TemplateError::invalid_manifest(format!("Failed to parse manifest YAML: {e}"))
    })?;

    let mut seen = HashSet::new();
    for entry in &data.templates {
        if entry.id.trim().is_empty() {
            return Err(TemplateError::invalid_manifest("template id must not be empty"));
        }
        if entry.source.trim().is_empty() {
            return Err(TemplateError::invalid_manifest(format!(
                "template '{}' has an empty source",
                entry.id
            )));
        }
        if !is_contained(Path::new(&entry.source)) {
            return Err(TemplateError::invalid_manifest(format!(
                "template '{}' source '{}' must be a relative path inside the template directory",
                entry.id, entry.source
            )));
        }
        if !seen.insert(entry.id.as_str()) {
            return Err(TemplateError::DuplicateId(entry.id.clone()));
        }
    }

    Ok(data.templates)
}

fn is_contained(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
