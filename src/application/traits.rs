//! Port interfaces for the application layer

use std::io;
use std::path::Path;

/// Destination the emitter writes rendered text to.
///
/// Implementations return the raw I/O cause; the emitter decides which
/// failure kind it maps to.
pub trait OutputSink {
    /// Ensure every parent directory of `path` exists
    fn ensure_parent(&self, path: &Path) -> io::Result<()>;

    /// Write `contents` to `path`, replacing anything already there
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

impl<T: OutputSink + ?Sized> OutputSink for &T {
    fn ensure_parent(&self, path: &Path) -> io::Result<()> {
        (**self).ensure_parent(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        (**self).write(path, contents)
    }
}
