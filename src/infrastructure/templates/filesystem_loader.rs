//! Filesystem-based template loader
//!
//! Loads a template directory from disk, typically specified via the
//! `--template-dir` CLI flag. The directory uses the same manifest format as
//! the embedded bundle.

use std::fs;
use std::path::{Path, PathBuf};

use super::manifest::{MANIFEST_FILE_NAMES, parse_manifest_yaml};
use crate::core::templates::{Template, TemplateSource};
use crate::infrastructure::templates::TemplateError;
use tracing::debug;

/// Load every template declared by `dir/manifest.yml`
pub fn load_directory_templates(dir: &Path) -> Result<Vec<Template>, TemplateError> {
    if !dir.is_dir() {
        return Err(TemplateError::not_found(dir.to_string_lossy()));
    }

    let manifest_path = find_manifest(dir)?;
    let content = fs::read_to_string(&manifest_path)?;

    let mut templates = Vec::new();
    for entry in parse_manifest_yaml(&content)? {
        let file_path = dir.join(&entry.source);
        if !file_path.is_file() {
            return Err(TemplateError::not_found(file_path.to_string_lossy()));
        }

        let bytes = fs::read(&file_path)?;
        let body =
            String::from_utf8(bytes).map_err(|_| TemplateError::InvalidEncoding(entry.id.clone()))?;

        let mut template = Template::new(entry.id, body, TemplateSource::FileSystem(file_path));
        template.description = entry.description;
        templates.push(template);
    }

    debug!(
        dir = %dir.display(),
        count = templates.len(),
        "Loaded templates from directory"
    );
    Ok(templates)
}

fn find_manifest(dir: &Path) -> Result<PathBuf, TemplateError> {
    MANIFEST_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
        .ok_or_else(|| {
            TemplateError::invalid_manifest(format!(
                "No manifest.yml or manifest.yaml found in {}",
                dir.display()
            ))
        })
}
