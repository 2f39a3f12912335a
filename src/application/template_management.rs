//! Template listing and inspection use cases

use crate::core::error::EmitError;
use crate::infrastructure::TemplateRegistry;

/// Use case for listing all available templates
pub struct ListTemplatesUseCase<'r> {
    registry: &'r TemplateRegistry,
}

impl<'r> ListTemplatesUseCase<'r> {
    pub fn new(registry: &'r TemplateRegistry) -> Self {
        Self { registry }
    }

    pub fn execute(&self) -> String {
        if self.registry.is_empty() {
            return "No templates available.\n".to_string();
        }

        let mut output = String::from("Available templates:\n");
        for metadata in self.registry.list() {
            output.push_str(&format!("  {}\n", metadata.id));
            if let Some(desc) = &metadata.description {
                output.push_str(&format!("    {desc}\n"));
            }
        }
        output
    }

    /// Machine-readable listing
    pub fn execute_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.registry.list())
    }
}

/// Use case for showing details about one template
pub struct TemplateInfoUseCase<'r> {
    registry: &'r TemplateRegistry,
}

impl<'r> TemplateInfoUseCase<'r> {
    pub fn new(registry: &'r TemplateRegistry) -> Self {
        Self { registry }
    }

    pub fn execute(&self, template_id: &str) -> Result<String, EmitError> {
        let metadata = self
            .registry
            .get(template_id)
            .map(|t| t.metadata())
            .ok_or_else(|| EmitError::unknown_template(template_id))?;

        let mut output = format!("Template: {}\n", metadata.id);
        output.push_str(&format!("Source: {}\n", metadata.source));
        if let Some(desc) = &metadata.description {
            output.push_str(&format!("Description: {desc}\n"));
        }

        if metadata.placeholders.is_empty() {
            output.push_str("Variables: none\n");
        } else {
            output.push_str("Variables:\n");
            for name in &metadata.placeholders {
                output.push_str(&format!("  - {name}\n"));
            }
        }
        Ok(output)
    }
}
