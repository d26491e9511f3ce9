//! Append-only diagnostics for rejected source content.
//!
//! The session writes one entry per malformed line through the [`ErrorLog`]
//! port. Recording is best-effort: a failing log never interrupts analysis.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::warn;

/// Destination for malformed-input diagnostics.
pub trait ErrorLog {
    /// Records one diagnostic line. Failures are swallowed by implementors.
    fn record(&mut self, message: &str);
}

impl<L: ErrorLog + ?Sized> ErrorLog for &mut L {
    fn record(&mut self, message: &str) {
        (**self).record(message);
    }
}

/// Formats the entry written for a rejected source line.
pub fn invalid_content_message(source: &Path, line: &str) -> String {
    format!("Invalid content in {}: {}", source.display(), line)
}

/// Appends each entry as a line to a file on disk.
#[derive(Debug, Clone)]
pub struct FileErrorLog {
    path: PathBuf,
}

impl FileErrorLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, message: &str) -> Result<(), io::Error> {
        // Ensure the log directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Open in append mode so earlier entries survive
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", message)
    }
}

impl ErrorLog for FileErrorLog {
    fn record(&mut self, message: &str) {
        if let Err(e) = self.append(message) {
            warn!("Could not write to error log {}: {}", self.path.display(), e);
        }
    }
}

/// Keeps entries in memory so tests can inspect what was logged.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryErrorLog {
    pub entries: Vec<String>,
}

#[cfg(test)]
impl ErrorLog for MemoryErrorLog {
    fn record(&mut self, message: &str) {
        self.entries.push(message.to_string());
    }
}
