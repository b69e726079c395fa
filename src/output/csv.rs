// src/output/csv.rs
//! CSV output handler

use crate::api::Issuance;
use crate::output::OutputHandler;
use std::io::{self, Write};

const HEADER: [&str; 9] = [
    "id",
    "dns_names",
    "issuer",
    "not_before",
    "not_after",
    "pubkey_type",
    "cert_sha256",
    "revoked",
    "revocation_time",
];

/// CSV output handler, one row per issuance
pub struct CsvOutput<W: Write = Box<dyn Write>> {
    writer: csv::Writer<W>,
    header_written: bool,
}

impl CsvOutput {
    /// Create a new CsvOutput that writes to stdout
    pub fn new() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    /// Create a new CsvOutput that writes to a file
    pub fn to_file(file: std::fs::File) -> Self {
        Self::with_writer(Box::new(file))
    }
}

impl Default for CsvOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> CsvOutput<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
            header_written: false,
        }
    }

    pub fn into_inner(self) -> anyhow::Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))
    }
}

impl<W: Write> OutputHandler for CsvOutput<W> {
    fn emit(&mut self, issuance: &Issuance) -> anyhow::Result<()> {
        if !self.header_written {
            self.writer.write_record(HEADER)?;
            self.header_written = true;
        }

        // Semicolons keep the name list inside one column
        let dns_names = issuance.dns_names.join(";");

        self.writer.write_record([
            issuance.id.to_string().as_str(),
            dns_names.as_str(),
            issuance.issuer.friendly_name.as_str(),
            issuance.not_before.as_str(),
            issuance.not_after.as_str(),
            issuance.pubkey.key_type.as_str(),
            issuance.cert_sha256.as_str(),
            if issuance.revoked { "true" } else { "false" },
            issuance.revocation.time.as_deref().unwrap_or_default(),
        ])?;

        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
