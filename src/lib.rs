//! Consolidates numeric values from text files and reports their mean,
//! median and mode, with an interactive console front end and CSV export.

pub mod collector;
pub mod config;
pub mod console;
pub mod data_analyzer;
pub mod error;
pub mod error_log;
pub mod export;
pub mod report;
pub mod statistics;
pub mod validation;
