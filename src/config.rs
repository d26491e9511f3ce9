//! Session configuration.
//!
//! Defaults are compiled in; each path can be overridden through an
//! environment variable.

use std::env;
use std::path::PathBuf;

// Default locations, relative to the working directory
pub const DEFAULT_INPUT_DIR: &str = "input";
pub const DEFAULT_ERROR_INPUT_DIR: &str = "input_error";
pub const DEFAULT_ERROR_LOG: &str = "output/error.log";

/// Digits printed after the decimal point in reports and exports
pub const DISPLAY_PRECISION: usize = 4;

pub const INPUT_DIR_VAR: &str = "DATA_ANALYZER_INPUT_DIR";
pub const ERROR_INPUT_DIR_VAR: &str = "DATA_ANALYZER_ERROR_INPUT_DIR";
pub const ERROR_LOG_VAR: &str = "DATA_ANALYZER_ERROR_LOG";

/// Which directory source filenames are resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Regular data files
    Normal,
    /// Files seeded with malformed content for exercising error handling
    ErrorInjection,
}

impl InputMode {
    /// Maps the menu choice to a mode. Only `1` selects normal input.
    pub fn from_choice(choice: &str) -> Self {
        if choice.trim() == "1" {
            InputMode::Normal
        } else {
            InputMode::ErrorInjection
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    pub input_dir: PathBuf,
    pub error_input_dir: PathBuf,
    pub error_log_path: PathBuf,
    pub precision: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            error_input_dir: PathBuf::from(DEFAULT_ERROR_INPUT_DIR),
            error_log_path: PathBuf::from(DEFAULT_ERROR_LOG),
            precision: DISPLAY_PRECISION,
        }
    }
}

impl AnalyzerConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config, taking each override from `lookup` when it yields a
    /// non-empty value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(dir) = read(INPUT_DIR_VAR) {
            config.input_dir = PathBuf::from(dir);
        }
        if let Some(dir) = read(ERROR_INPUT_DIR_VAR) {
            config.error_input_dir = PathBuf::from(dir);
        }
        if let Some(path) = read(ERROR_LOG_VAR) {
            config.error_log_path = PathBuf::from(path);
        }
        config
    }

    pub fn source_dir(&self, mode: InputMode) -> &PathBuf {
        match mode {
            InputMode::Normal => &self.input_dir,
            InputMode::ErrorInjection => &self.error_input_dir,
        }
    }
}
