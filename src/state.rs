// src/state.rs
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info};

/// Last-seen issuance id per domain, persisted to a TOML file so the next run
/// only asks for newer issuances. Only cursors are stored, never issuances.
pub struct StateManager {
    state_file_path: PathBuf,
    positions: BTreeMap<String, u64>,
}

impl StateManager {
    /// Load state from `state_file`, starting empty if it does not exist
    pub async fn load(state_file: PathBuf) -> Result<Self> {
        let positions = if state_file.exists() {
            info!("Loading state from {:?}", state_file);

            let contents = fs::read_to_string(&state_file)
                .await
                .context("Failed to read state file")?;

            toml::from_str(&contents).context("Failed to parse state file")?
        } else {
            info!("State file {:?} does not exist, starting fresh", state_file);
            BTreeMap::new()
        };

        Ok(Self {
            state_file_path: state_file,
            positions,
        })
    }

    /// Cursor for `domain`, or 0 when the domain has never been queried
    pub fn position(&self, domain: &str) -> u64 {
        self.positions.get(domain).copied().unwrap_or(0)
    }

    /// Record a new cursor. Never moves a cursor backwards.
    pub fn update_position(&mut self, domain: &str, position: u64) {
        let entry = self.positions.entry(domain.to_string()).or_insert(0);
        if position > *entry {
            *entry = position;
        }
    }

    /// Save state, writing a temporary file first and renaming it into place
    pub async fn save(&self) -> Result<()> {
        debug!(
            "Saving {} cursors to {:?}",
            self.positions.len(),
            self.state_file_path
        );

        let toml_string =
            toml::to_string(&self.positions).context("Failed to serialize state to TOML")?;

        let temp_path = self.state_file_path.with_extension("tmp");

        fs::write(&temp_path, toml_string)
            .await
            .context("Failed to write state to temporary file")?;

        fs::rename(&temp_path, &self.state_file_path)
            .await
            .context("Failed to rename temporary state file")?;

        Ok(())
    }

    pub fn count(&self) -> usize {
        self.positions.len()
    }
}
