//! CSV export of a session [`Summary`].
//!
//! The table has a `Statistic,Value` header, one row each for the mean,
//! median and mode, and a final `Sorted values` row listing every value.
//! The final row is wider than the header, so the writer runs in flexible
//! mode.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::error::ExportError;
use crate::report::format_value;
use crate::statistics::Summary;

/// Destination for the finished statistics table.
pub trait Exporter {
    fn export(&mut self, destination: &Path, summary: &Summary) -> Result<(), ExportError>;
}

/// Writes the table as a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvFileExporter {
    precision: usize,
}

impl CsvFileExporter {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }
}

impl Exporter for CsvFileExporter {
    fn export(&mut self, destination: &Path, summary: &Summary) -> Result<(), ExportError> {
        // An unwritable destination is reported so the caller can ask again
        let file = File::create(destination).map_err(|source| ExportError::Create {
            path: destination.to_path_buf(),
            source,
        })?;
        debug!("Writing statistics table to {}", destination.display());
        write_table(file, summary, self.precision)
    }
}

/// Writes the statistics table to any writer.
///
/// # Arguments
///
/// * `writer` - Destination of the CSV text
/// * `summary` - Statistics to export
/// * `precision` - Digits after the decimal point for every number
pub fn write_table<W: Write>(
    writer: W,
    summary: &Summary,
    precision: usize,
) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    // Header and one row per statistic
    csv_writer.write_record(["Statistic", "Value"])?;
    csv_writer.write_record(["Mean", format_value(summary.mean, precision).as_str()])?;
    csv_writer.write_record(["Median", format_value(summary.median, precision).as_str()])?;
    csv_writer.write_record(["Mode", format_value(summary.mode, precision).as_str()])?;

    // Values after the first are written as ", v" to keep the listing readable
    let mut sorted_row = vec!["Sorted values".to_string()];
    for (index, &value) in summary.sorted_values.iter().enumerate() {
        let formatted = format_value(value, precision);
        if index == 0 {
            sorted_row.push(formatted);
        } else {
            sorted_row.push(format!(" {}", formatted));
        }
    }
    // Keep the trailing separator when there is nothing to list
    if summary.sorted_values.is_empty() {
        sorted_row.push(String::new());
    }
    csv_writer.write_record(&sorted_row)?;

    csv_writer.flush()?;
    Ok(())
}
