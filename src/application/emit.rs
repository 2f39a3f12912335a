//! Template emission use case
//!
//! [`Emitter::emit`] resolves a template from the registry, renders it
//! against the caller's substitutions and writes the result through an
//! [`OutputSink`]. Rendering finishes before the sink is touched, so a
//! missing variable never leaves a partial file behind.

use std::path::{Path, PathBuf};

use crate::application::OutputSink;
use crate::core::error::{EmitError, Result};
use crate::core::templates::{Emission, EmissionResult, Substitutions, render};
use crate::infrastructure::{FileSystemOutput, TemplateRegistry};
use tracing::debug;

/// Renders registry templates and writes them to disk
pub struct Emitter<'r, O: OutputSink = FileSystemOutput> {
    registry: &'r TemplateRegistry,
    output: O,
    root: Option<PathBuf>,
}

impl<'r> Emitter<'r, FileSystemOutput> {
    pub fn new(registry: &'r TemplateRegistry) -> Self {
        Self::with_output(registry, FileSystemOutput::new())
    }
}

impl<'r, O: OutputSink> Emitter<'r, O> {
    pub fn with_output(registry: &'r TemplateRegistry, output: O) -> Self {
        Self {
            registry,
            output,
            root: None,
        }
    }

    /// Resolve relative destinations against `root` instead of the process
    /// working directory
    pub fn with_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Final path a destination refers to
    pub fn resolve_destination(&self, destination: &Path) -> Result<PathBuf> {
        if destination.as_os_str().is_empty() {
            return Err(EmitError::InvalidDestination);
        }
        Ok(match &self.root {
            Some(root) if destination.is_relative() => root.join(destination),
            _ => destination.to_path_buf(),
        })
    }

    /// Render a template without writing anything
    pub fn render(&self, template_id: &str, substitutions: &Substitutions) -> Result<String> {
        let template = self
            .registry
            .get(template_id)
            .ok_or_else(|| EmitError::unknown_template(template_id))?;
        render(&template.body, substitutions)
    }

    /// Render `template_id` and write it to `destination`, replacing any
    /// existing file. Repeating a call with the same inputs yields the same
    /// file.
    pub fn emit<P: AsRef<Path>>(
        &self,
        template_id: &str,
        destination: P,
        substitutions: &Substitutions,
    ) -> EmissionResult {
        let path = self.resolve_destination(destination.as_ref())?;
        let contents = self.render(template_id, substitutions)?;

        self.output
            .ensure_parent(&path)
            .map_err(|cause| EmitError::DirectoryCreationFailed {
                path: path.parent().map(Path::to_path_buf).unwrap_or_default(),
                cause,
            })?;

        self.output
            .write(&path, &contents)
            .map_err(|cause| EmitError::WriteFailed {
                path: path.clone(),
                cause,
            })?;

        debug!(
            template = %template_id,
            path = %path.display(),
            bytes = contents.len(),
            "Template emitted"
        );

        Ok(Emission { path })
    }
}
