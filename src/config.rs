// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use crate::storage::LocalStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

fn default_true() -> bool {
    true
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    /// Save the task list after every mutating command.
    #[serde(default = "default_true")]
    pub autosave: bool,
    /// Name used in the greeting, if set.
    #[serde(default)]
    pub user_name: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            autosave: true,
            user_name: None,
        }
    }
}

impl Config {
    /// Load the configuration from disk. A missing file is an error so
    /// callers can fall back to defaults explicitly (`unwrap_or_default`).
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Writes the configuration as pretty TOML. The interactive session
    /// never changes configuration; `config.toml` is normally edited by
    /// hand, and this exists for programmatic setup (tests included).
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        LocalStorage::with_lock(&path, || {
            let toml_str = toml::to_string_pretty(self)?;
            LocalStorage::atomic_write(&path, toml_str)?;
            Ok(())
        })?;
        Ok(())
    }
}
