//! Source ingestion.
//!
//! Reads numeric text files line by line, validates every trimmed line and
//! accumulates accepted sources into one [`Dataset`]. A source is accepted
//! whole or not at all.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::error::SourceError;
use crate::error_log::{invalid_content_message, ErrorLog};
use crate::statistics::Dataset;
use crate::validation::{parse_number, trim_line};

/// Reads every line of `path` as a number.
///
/// The first malformed line rejects the whole source and is recorded in
/// `error_log`. Missing files and empty sources are rejected without a log
/// entry.
///
/// # Arguments
///
/// * `path` - Source file to read
/// * `error_log` - Receives one entry for a malformed line
///
/// # Returns
///
/// * `Result<Vec<f64>, SourceError>` - The values in file order, or why the
///   source was rejected
pub fn read_source(path: &Path, error_log: &mut dyn ErrorLog) -> Result<Vec<f64>, SourceError> {
    let unreadable = |source| SourceError::Unreadable {
        path: path.to_path_buf(),
        source,
    };

    // Open the source with buffered reading
    let file = File::open(path).map_err(unreadable)?;
    let reader = BufReader::new(file);

    let mut values = Vec::new();

    // Split on raw bytes so a line that is not UTF-8 counts as malformed content
    for line_result in reader.split(b'\n') {
        let bytes = line_result.map_err(unreadable)?;
        let line = String::from_utf8_lossy(&bytes);
        let token = trim_line(&line);

        match parse_number(token) {
            Some(value) => values.push(value),
            None => {
                // First bad line rejects the whole source
                error_log.record(&invalid_content_message(path, token));
                return Err(SourceError::InvalidContent {
                    path: path.to_path_buf(),
                    line: token.to_string(),
                });
            }
        }
    }

    // A well-formed source with no values is still rejected
    if values.is_empty() {
        return Err(SourceError::Empty(path.to_path_buf()));
    }
    Ok(values)
}

/// Builds the session dataset from accepted sources.
pub struct Collector<L: ErrorLog> {
    error_log: L,
    dataset: Dataset,
    accepted: usize,
    rejected: usize,
}

impl<L: ErrorLog> Collector<L> {
    pub fn new(error_log: L) -> Self {
        Self {
            error_log,
            dataset: Dataset::new(),
            accepted: 0,
            rejected: 0,
        }
    }

    /// Reads one source and appends its values to the dataset.
    ///
    /// # Returns
    ///
    /// * `Result<Vec<f64>, SourceError>` - The values just appended, or the
    ///   rejection reason. Rejections are counted.
    pub fn ingest(&mut self, path: &Path) -> Result<Vec<f64>, SourceError> {
        match read_source(path, &mut self.error_log) {
            Ok(values) => {
                debug!("Accepted {} values from {}", values.len(), path.display());
                self.dataset.extend_from_slice(&values);
                self.accepted += 1;
                Ok(values)
            }
            Err(e) => {
                info!("Rejected source: {}", e);
                self.rejected += 1;
                Err(e)
            }
        }
    }

    pub fn accepted_sources(&self) -> usize {
        self.accepted
    }

    pub fn rejected_sources(&self) -> usize {
        self.rejected
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn error_log(&self) -> &L {
        &self.error_log
    }

    /// Hands over the consolidated dataset, ending collection.
    pub fn into_dataset(self) -> Dataset {
        self.dataset
    }
}
