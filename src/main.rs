// src/main.rs
use anyhow::Context;
use certspotter_client::api::{CertspotterClient, ReqwestTransport, next_position};
use certspotter_client::cli::Cli;
use certspotter_client::config::Config;
use certspotter_client::error::CertspotterError;
use certspotter_client::output;
use certspotter_client::state::StateManager;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Validate arguments
    cli.validate()?;

    // Load config file if one was given, otherwise run on defaults
    let mut config = match cli.config {
        Some(ref path) => Config::from_file(Path::new(path))
            .with_context(|| format!("Failed to load config file {}", path))?,
        None => Config::default(),
    };

    // Apply CLI overrides
    if let Some(ref endpoint) = cli.endpoint {
        config.api.endpoint = endpoint.clone();
    }

    if let Some(ref token) = cli.token {
        config.api.token = Some(token.clone());
    }

    // Initialize logging on stderr so stdout only carries results
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level(&config.logging.level)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let transport = ReqwestTransport::new(Duration::from_secs(config.api.timeout_secs))?;
    let mut client = CertspotterClient::new(config.api.endpoint.clone(), Arc::new(transport))?;
    if let Some(ref token) = config.api.token {
        client = client.with_token(token.clone());
    }

    if !client.has_token() {
        tracing::debug!("No API token configured, using anonymous access");
    }

    let mut state = if cli.state {
        Some(StateManager::load(PathBuf::from(&config.state.file)).await?)
    } else {
        None
    };

    let position = match (&state, cli.after) {
        (Some(state), _) => state.position(&cli.domain),
        (None, Some(after)) => after,
        (None, None) => 0,
    };

    tracing::info!(
        "Querying issuances for {} (after={}, match_wildcards={}, include_subdomains={})",
        cli.domain,
        position,
        cli.match_wildcards,
        cli.include_subdomains
    );

    let issuances = match client
        .get_issuances(
            &cli.domain,
            cli.match_wildcards,
            cli.include_subdomains,
            position,
        )
        .await
    {
        Ok(issuances) => issuances,
        Err(CertspotterError::RateLimited { retry_after }) => {
            if retry_after.is_empty() {
                anyhow::bail!("Rate limited by Cert Spotter API, try again later");
            }
            anyhow::bail!(
                "Rate limited by Cert Spotter API, try again later (Retry-After: {})",
                retry_after
            );
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!("Fetched {} issuances", issuances.len());

    let file = match cli.output {
        Some(ref path) => Some(
            std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file {}", path))?,
        ),
        None => None,
    };

    let mut handler = output::create_handler(cli.output_format(), file);
    handler.emit_all(&issuances)?;

    if let Some(ref mut state) = state {
        if let Some(next) = next_position(&issuances) {
            state.update_position(&cli.domain, next);
            state.save().await?;
            tracing::info!("Saved cursor {} for {}", next, cli.domain);
        } else {
            tracing::debug!("No new issuances, cursor unchanged");
        }
    }

    Ok(())
}
