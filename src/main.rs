//! Data Analyzer - Main Application
//!
//! Entry point for the interactive numeric data analyzer. All prompting,
//! collection and reporting lives in the `data_analyzer` module.
//!
//! # Usage
//!
//! ```bash
//! # Reads source files from ./input or ./input_error, logs to ./output/error.log
//! $ cargo run --release
//!
//! # Show diagnostic logging on stderr
//! $ RUST_LOG=debug cargo run --release
//! ```

use data_analyzer_rust::data_analyzer::data_analyzer_main;

/// call into the library
fn main() {
    data_analyzer_main();
}
