// src/output/human.rs
//! Human-readable colored terminal output

use crate::api::Issuance;
use crate::output::OutputHandler;
use chrono::DateTime;
use colored::Colorize;
use std::io::{self, Write};

/// Human-readable output handler with colored terminal output
pub struct HumanOutput<W: Write = Box<dyn Write>> {
    writer: W,
    use_colors: bool,
}

impl HumanOutput {
    /// Create a new HumanOutput that writes to stdout
    pub fn new() -> Self {
        Self {
            writer: Box::new(io::stdout()),
            use_colors: is_terminal::is_terminal(std::io::stdout()),
        }
    }

    /// Create a new HumanOutput that writes to a file
    pub fn to_file(file: std::fs::File) -> Self {
        Self {
            writer: Box::new(file),
            use_colors: false, // No colors when writing to file
        }
    }
}

impl Default for HumanOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> HumanOutput<W> {
    /// Plain (uncolored) output to an arbitrary writer
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            use_colors: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Shorten an RFC 3339 timestamp to its date, leaving anything else untouched
    fn format_date(ts: &str) -> String {
        match DateTime::parse_from_rfc3339(ts) {
            Ok(datetime) => datetime.format("%Y-%m-%d").to_string(),
            Err(_) => ts.to_string(),
        }
    }

    fn issuer_display(issuance: &Issuance) -> &str {
        if issuance.issuer.friendly_name.is_empty() {
            &issuance.issuer.name
        } else {
            &issuance.issuer.friendly_name
        }
    }
}

impl<W: Write> OutputHandler for HumanOutput<W> {
    fn emit(&mut self, issuance: &Issuance) -> anyhow::Result<()> {
        let validity = format!(
            "{} -> {}",
            Self::format_date(&issuance.not_before),
            Self::format_date(&issuance.not_after)
        );
        let issuer = Self::issuer_display(issuance);
        let names = issuance.dns_names.join(", ");

        if self.use_colors {
            writeln!(
                self.writer,
                "{} {}",
                format!("[{}]", issuance.id).dimmed(),
                names.cyan().bold()
            )?;
            writeln!(self.writer, "    {} {}", "Issuer:".dimmed(), issuer.yellow())?;
            writeln!(self.writer, "    {} {}", "Valid:".dimmed(), validity)?;

            if issuance.revoked {
                writeln!(self.writer, "    {}", "REVOKED".red().bold())?;
            }
        } else {
            writeln!(self.writer, "[{}] {}", issuance.id, names)?;
            writeln!(self.writer, "    Issuer: {}", issuer)?;
            writeln!(self.writer, "    Valid: {}", validity)?;

            if issuance.revoked {
                writeln!(self.writer, "    REVOKED")?;
            }
        }

        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
