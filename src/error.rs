//! Error types for the data analyzer.
//!
//! Source and export failures are recoverable: the session reports them and
//! asks the user again. Only [`AnalyzerError`] ends a session.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a source file was not accepted into the dataset.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("unable to read source `{path}`: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid content in `{path}`: [{line}]")]
    InvalidContent { path: PathBuf, line: String },
    #[error("source `{0}` contains no values")]
    Empty(PathBuf),
}

/// Why the statistics table could not be written.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unable to create `{path}`: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed writing statistics table: {0}")]
    Write(#[from] csv::Error),
    #[error("failed flushing statistics table: {0}")]
    Flush(#[from] io::Error),
}

/// Errors that end an analysis session.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("standard input closed before the session finished")]
    InputClosed,
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
