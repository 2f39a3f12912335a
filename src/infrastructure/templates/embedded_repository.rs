//! Templates embedded in the binary at compile time.
//!
//! Everything under `templates/` is compiled in with `rust-embed`, so the
//! bundled templates are available right after `cargo install` with no
//! separate files to ship. The bundle is indexed by `templates/manifest.yml`.

use super::manifest::{MANIFEST_FILE_NAMES, parse_manifest_yaml};
use crate::core::templates::{Template, TemplateSource};
use crate::infrastructure::templates::TemplateError;
use rust_embed::RustEmbed;
use tracing::debug;

/// Container for all templates embedded at compile time
#[derive(RustEmbed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

/// Load every template the embedded manifest declares
pub fn load_embedded_templates() -> Result<Vec<Template>, TemplateError> {
    let manifest_file = MANIFEST_FILE_NAMES
        .iter()
        .find_map(|name| EmbeddedTemplates::get(name))
        .ok_or_else(|| TemplateError::invalid_manifest("No embedded manifest.yml found"))?;

    let content = std::str::from_utf8(manifest_file.data.as_ref())
        .map_err(|_| TemplateError::InvalidEncoding("manifest.yml".to_string()))?;

    let mut templates = Vec::new();
    for entry in parse_manifest_yaml(content)? {
        let file = EmbeddedTemplates::get(&entry.source)
            .ok_or_else(|| TemplateError::not_found(&entry.source))?;
        let body = String::from_utf8(file.data.into_owned())
            .map_err(|_| TemplateError::InvalidEncoding(entry.id.clone()))?;

        let mut template = Template::new(entry.id, body, TemplateSource::Embedded);
        template.description = entry.description;
        templates.push(template);
    }

    debug!(count = templates.len(), "Loaded embedded templates");
    Ok(templates)
}
