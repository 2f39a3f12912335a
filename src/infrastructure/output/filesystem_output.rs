//! Filesystem-based output sink implementation

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::application::OutputSink;

/// Output sink that writes to the local filesystem
pub struct FileSystemOutput;

impl FileSystemOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for FileSystemOutput {
    fn ensure_parent(&self, path: &Path) -> io::Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
            _ => Ok(()),
        }
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        // Truncates any existing file; last write wins
        let mut file = fs::File::create(path)?;
        file.write_all(contents.as_bytes())?;
        file.flush()
    }
}
