// src/output/json.rs
//! JSON Lines (JSONL) output handler

use crate::api::Issuance;
use crate::output::OutputHandler;
use std::io::{self, Write};

/// JSON Lines output handler
///
/// Outputs one issuance per line, using the same field names as the API
pub struct JsonOutput<W: Write = Box<dyn Write>> {
    writer: W,
}

impl JsonOutput {
    /// Create a new JsonOutput that writes to stdout
    pub fn new() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    /// Create a new JsonOutput that writes to a file
    pub fn to_file(file: std::fs::File) -> Self {
        Self::with_writer(Box::new(file))
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> JsonOutput<W> {
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputHandler for JsonOutput<W> {
    fn emit(&mut self, issuance: &Issuance) -> anyhow::Result<()> {
        let json = serde_json::to_string(issuance)?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
