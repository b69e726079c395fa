// src/cli.rs
use clap::Parser;

/// certspotter: query the Cert Spotter issuances API
///
/// Fetches one page of certificate issuances for a domain. Use --after or
/// --state to continue from a previously seen issuance id.
#[derive(Parser, Debug, Clone)]
#[command(name = "certspotter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Domain to search issuances for
    pub domain: String,

    // ===== Configuration =====
    /// Path to TOML config file
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Override API endpoint from config
    #[arg(long = "endpoint")]
    pub endpoint: Option<String>,

    /// Override API token from config
    #[arg(long = "token")]
    pub token: Option<String>,

    // ===== Query =====
    /// Also match certificates for wildcard forms of the domain
    #[arg(short = 'w', long = "match-wildcards")]
    pub match_wildcards: bool,

    /// Also match certificates for subdomains of the domain
    #[arg(short = 's', long = "include-subdomains")]
    pub include_subdomains: bool,

    /// Only return issuances with an id greater than this
    #[arg(short = 'a', long = "after")]
    pub after: Option<u64>,

    /// Resume from, and update, the cursor stored in the state file
    #[arg(long = "state")]
    pub state: bool,

    // ===== Output =====
    /// Output issuances in JSONL format
    #[arg(short = 'j', long = "json")]
    pub json: bool,

    /// Output issuances in CSV format
    #[arg(long = "csv")]
    pub csv: bool,

    /// Write output to file instead of stdout
    #[arg(short = 'o', long = "output")]
    pub output: Option<String>,

    // ===== Logging =====
    /// Verbose logging (set log level to debug)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Quiet logging (set log level to warn)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Cli {
    /// Validate flag combinations and return errors for invalid usage
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.json && self.csv {
            anyhow::bail!("Cannot specify multiple output formats. Choose one of: --json or --csv");
        }

        if self.verbose && self.quiet {
            anyhow::bail!("Cannot specify both --verbose and --quiet");
        }

        if self.after.is_some() && self.state {
            anyhow::bail!("Cannot use --after with --state: the state file already provides the cursor");
        }

        Ok(())
    }

    /// Determine the output format based on flags
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.csv {
            OutputFormat::Csv
        } else {
            OutputFormat::Human
        }
    }

    /// Log level from verbose/quiet flags, falling back to `configured`
    pub fn log_level<'a>(&self, configured: &'a str) -> &'a str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            configured
        }
    }
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable colored text output (default)
    Human,
    /// JSON Lines format (one issuance per line)
    Json,
    /// CSV format
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_invocation() {
        let cli = Cli::parse_from(["certspotter", "example.com"]);
        assert_eq!(cli.domain, "example.com");
        assert_eq!(cli.config, None);
        assert!(!cli.match_wildcards);
        assert!(!cli.include_subdomains);
        assert_eq!(cli.after, None);
        assert_eq!(cli.output_format(), OutputFormat::Human);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_query_flags() {
        let cli = Cli::parse_from(["certspotter", "-w", "-s", "--after", "1234567", "sslmate.com"]);
        assert!(cli.match_wildcards);
        assert!(cli.include_subdomains);
        assert_eq!(cli.after, Some(1234567));
    }

    #[test]
    fn test_json_output_format() {
        let cli = Cli::parse_from(["certspotter", "--json", "example.com"]);
        assert_eq!(cli.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_csv_output_format() {
        let cli = Cli::parse_from(["certspotter", "--csv", "example.com"]);
        assert_eq!(cli.output_format(), OutputFormat::Csv);
    }

    #[test]
    fn test_multiple_formats_rejected() {
        let cli = Cli::parse_from(["certspotter", "--json", "--csv", "example.com"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_verbose_and_quiet_rejected() {
        let cli = Cli::parse_from(["certspotter", "-v", "-q", "example.com"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_after_conflicts_with_state() {
        let cli = Cli::parse_from(["certspotter", "--after", "5", "--state", "example.com"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let cli = Cli::parse_from(["certspotter", "example.com"]);
        assert_eq!(cli.log_level("info"), "info");

        let cli = Cli::parse_from(["certspotter", "-v", "example.com"]);
        assert_eq!(cli.log_level("info"), "debug");

        let cli = Cli::parse_from(["certspotter", "-q", "example.com"]);
        assert_eq!(cli.log_level("info"), "warn");
    }

    #[test]
    fn test_non_numeric_after_rejected() {
        let result = Cli::try_parse_from(["certspotter", "--after", "abc", "example.com"]);
        assert!(result.is_err());
    }
}
