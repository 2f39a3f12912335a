//! Read-only template registry
//!
//! The registry is assembled once at startup from one or more sources and is
//! immutable afterwards. There is no way to add or replace a template on a
//! built registry, so lookups never depend on earlier calls.

use std::collections::BTreeMap;
use std::path::Path;

use super::{TemplateError, load_directory_templates, load_embedded_templates};
use crate::core::templates::{Template, TemplateMetadata};
use tracing::{debug, warn};

/// Immutable map from template id to template
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, Template>,
}

impl TemplateRegistry {
    pub fn builder() -> TemplateRegistryBuilder {
        TemplateRegistryBuilder::default()
    }

    /// Registry holding only the templates bundled in the binary
    pub fn embedded() -> Result<Self, TemplateError> {
        Ok(Self::builder().with_embedded()?.build())
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// Metadata for every template, sorted by id
    pub fn list(&self) -> Vec<TemplateMetadata> {
        self.templates.values().map(Template::metadata).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Collects templates from sources in order; later sources win on id collision
#[derive(Debug, Default)]
pub struct TemplateRegistryBuilder {
    templates: BTreeMap<String, Template>,
}

impl TemplateRegistryBuilder {
    pub fn with_embedded(mut self) -> Result<Self, TemplateError> {
        for template in load_embedded_templates()? {
            self.insert(template);
        }
        Ok(self)
    }

    pub fn with_directory(mut self, dir: &Path) -> Result<Self, TemplateError> {
        for template in load_directory_templates(dir)? {
            self.insert(template);
        }
        Ok(self)
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.insert(template);
        self
    }

    fn insert(&mut self, template: Template) {
        if let Some(previous) = self.templates.get(&template.id) {
            warn!(
                template = %template.id,
                previous = %previous.source,
                replacement = %template.source,
                "Template overridden by a later source"
            );
        }
        self.templates.insert(template.id.clone(), template);
    }

    pub fn build(self) -> TemplateRegistry {
        debug!(count = self.templates.len(), "Template registry ready");
        TemplateRegistry {
            templates: self.templates,
        }
    }
}
