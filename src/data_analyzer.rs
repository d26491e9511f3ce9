//! # Data Analyzer
//!
//! An interactive session that consolidates numeric values from one or more
//! text files and reports descriptive statistics.
//!
//! ## Features
//!
//! - Line-by-line validation of every source file
//! - Whole-source rejection with re-prompting on malformed, missing or empty files
//! - Append-only error log of malformed lines
//! - Merge-sorted listing with mean, median and mode
//! - CSV export of the results
//!
//! ## Usage
//!
//! ```bash
//! $ cargo run --release
//! *** Welcome to the Data Analyzer ***
//! Enter the number of files to read: 2
//! Select input type:
//! 1. Normal input (input)
//! 2. Error input (input_error)
//! Choice: 1
//! Enter filename for file 1: a.txt
//! ...
//! ```
//!
//! Source files are resolved against `input/` (normal mode) or
//! `input_error/` (error-injection mode). Malformed lines are appended to
//! `output/error.log`. Set `RUST_LOG=debug` for diagnostic output on stderr.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use log::{debug, error};

use crate::collector::Collector;
use crate::config::{AnalyzerConfig, InputMode};
use crate::console::Console;
use crate::error::{Result, SourceError};
use crate::error_log::{ErrorLog, FileErrorLog};
use crate::export::{CsvFileExporter, Exporter};
use crate::report::{render_report, render_source_listing};
use crate::statistics::Summary;

/// What a completed session produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    pub summary: Summary,
    /// Where the statistics table was saved
    pub export_path: PathBuf,
    /// Sources rejected before a replacement was accepted
    pub rejected_sources: usize,
}

/// Runs one analysis session from the welcome banner to the goodbye line.
///
/// # Workflow
///
/// 1. Ask how many sources to read and which input directory to use
/// 2. Collect each source, re-prompting until one is accepted
/// 3. Print the summarized statistics
/// 4. Ask for an export destination until the table is saved
///
/// # Arguments
///
/// * `config` - Input directories and display precision
/// * `console` - Interactive input and output
/// * `error_log` - Receives malformed-line entries
/// * `exporter` - Writes the statistics table
///
/// # Returns
///
/// * `Result<SessionOutcome>` - The session results, or an error if the
///   console failed or input closed early
pub fn run_session<R, W, L, E>(
    config: &AnalyzerConfig,
    console: &mut Console<R, W>,
    error_log: L,
    exporter: &mut E,
) -> Result<SessionOutcome>
where
    R: BufRead,
    W: Write,
    L: ErrorLog,
    E: Exporter,
{
    console.say_line("*** Welcome to the Data Analyzer ***")?;

    // Ask how many sources to read and where they live
    let source_count = console.prompt_positive(
        "Enter the number of files to read: ",
        "Invalid input. Enter a positive integer: ",
    )?;
    let mode = select_input_mode(config, console)?;
    let source_dir = config.source_dir(mode);

    // Collect every source, re-prompting until each one is accepted
    let mut collector = Collector::new(error_log);
    for index in 1..=source_count {
        collect_source(console, &mut collector, source_dir, index)?;
    }
    let rejected_sources = collector.rejected_sources();

    // Sort once and compute all statistics from the sorted data
    let mut dataset = collector.into_dataset();
    let summary = dataset.summarize();
    console.say(&render_report(&summary, config.precision))?;

    // Save the same statistics that were just displayed
    let export_path = export_results(console, exporter, &summary)?;
    console.say_line("*** Goodbye. ***")?;

    Ok(SessionOutcome {
        summary,
        export_path,
        rejected_sources,
    })
}

fn select_input_mode<R: BufRead, W: Write>(
    config: &AnalyzerConfig,
    console: &mut Console<R, W>,
) -> Result<InputMode> {
    console.say_line("Select input type:")?;
    console.say_line(&format!("1. Normal input ({})", config.input_dir.display()))?;
    console.say_line(&format!(
        "2. Error input ({})",
        config.error_input_dir.display()
    ))?;
    // Anything other than 1 selects the error-injection directory
    let choice = console.prompt("Choice: ")?;
    Ok(InputMode::from_choice(&choice))
}

/// Prompts for the `index`-th source until one is accepted.
fn collect_source<R, W, L>(
    console: &mut Console<R, W>,
    collector: &mut Collector<L>,
    source_dir: &Path,
    index: usize,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    L: ErrorLog,
{
    loop {
        // Resolve the entered name against the selected input directory
        let name = console.prompt(&format!("Enter filename for file {}: ", index))?;
        let path = source_dir.join(&name);

        match collector.ingest(&path) {
            Ok(values) => {
                // Echo the accepted values back to the user
                console.say(&render_source_listing(&path.display().to_string(), &values))?;
                return Ok(());
            }
            Err(SourceError::Unreadable { .. }) => {
                console.say_line("File not found. Try again.")?;
            }
            Err(SourceError::InvalidContent { path, line }) => {
                // The error log entry was already written by the collector
                console.say_line(&format!("Invalid content in {}: [{}]", path.display(), line))?;
            }
            Err(SourceError::Empty(_)) => {
                console.say_line("Empty file. Try again.")?;
            }
        }
    }
}

/// Prompts for a destination until the table is written there.
fn export_results<R, W, E>(
    console: &mut Console<R, W>,
    exporter: &mut E,
    summary: &Summary,
) -> Result<PathBuf>
where
    R: BufRead,
    W: Write,
    E: Exporter,
{
    loop {
        let destination = PathBuf::from(console.prompt("Enter output filename: ")?);

        // Retry with the same summary until a destination accepts it
        match exporter.export(&destination, summary) {
            Ok(()) => {
                console.say_line(&format!("*** File {} saved ***", destination.display()))?;
                return Ok(destination);
            }
            Err(e) => {
                debug!("Export failed: {}", e);
                console.say_line("Invalid path. Try again.")?;
            }
        }
    }
}

/// Main entry point for the data analyzer application.
///
/// Initialises logging, loads configuration and runs a session on standard
/// input and output. A session that cannot finish ends the process with
/// status 1.
pub fn data_analyzer_main() {
    // Diagnostics go to stderr; RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Defaults, with environment overrides
    let config = AnalyzerConfig::from_env();
    debug!("Loaded configuration: {:?}", config);

    // Wire the session to the terminal and the on-disk collaborators
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let error_log = FileErrorLog::new(&config.error_log_path);
    let mut exporter = CsvFileExporter::new(config.precision);

    if let Err(e) = run_session(&config, &mut console, error_log, &mut exporter) {
        error!("Session aborted: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
