// src/output/mod.rs
//! Output handling for fetched issuances
//!
//! Each handler writes to stdout or a file in one of the supported formats.

use crate::api::Issuance;
use crate::cli::OutputFormat;
use std::fs::File;

pub mod csv;
pub mod human;
pub mod json;

use self::csv::CsvOutput;
use self::human::HumanOutput;
use self::json::JsonOutput;

/// Trait for output handlers that render issuances
pub trait OutputHandler {
    /// Emit a single issuance
    fn emit(&mut self, issuance: &Issuance) -> anyhow::Result<()>;

    /// Flush any buffered output
    fn flush(&mut self) -> anyhow::Result<()>;

    /// Emit a whole batch, preserving server order
    fn emit_all(&mut self, issuances: &[Issuance]) -> anyhow::Result<()> {
        for issuance in issuances {
            self.emit(issuance)?;
        }
        self.flush()
    }
}

/// Build the handler for `format`, writing to `file` when given
pub fn create_handler(format: OutputFormat, file: Option<File>) -> Box<dyn OutputHandler> {
    match (format, file) {
        (OutputFormat::Human, None) => Box::new(HumanOutput::new()),
        (OutputFormat::Human, Some(f)) => Box::new(HumanOutput::to_file(f)),
        (OutputFormat::Json, None) => Box::new(JsonOutput::new()),
        (OutputFormat::Json, Some(f)) => Box::new(JsonOutput::to_file(f)),
        (OutputFormat::Csv, None) => Box::new(CsvOutput::new()),
        (OutputFormat::Csv, Some(f)) => Box::new(CsvOutput::to_file(f)),
    }
}
