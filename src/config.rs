use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{RantError, Result};
use crate::rager::{EmojiPool, DEFAULT_EMOJIS};

/// Main configuration for the rant binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Emojis to rage with
    #[serde(default = "default_emojis")]
    pub emojis: Vec<String>,
    /// Fixed seed for emoji selection (None = seeded from the clock)
    #[serde(default)]
    pub seed: Option<u64>,
    /// Treat input lines as JSON requests
    #[serde(default)]
    pub json: bool,
    /// Attribute rants to this user
    #[serde(default)]
    pub announce_as: Option<String>,
}

fn default_emojis() -> Vec<String> {
    DEFAULT_EMOJIS.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            emojis: default_emojis(),
            seed: None,
            json: false,
            announce_as: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| RantError::ConfigError(e.to_string()))?;
        toml::from_str(&content).map_err(|e| RantError::ConfigError(e.to_string()))
    }

    /// Where the config file lives when `--config` is not given
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rant").join("config.toml"))
    }

    /// Load the config at [`Config::default_path`] if it exists, else defaults
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Merge CLI arguments into this configuration
    /// CLI arguments take precedence over config file values
    pub fn merge_cli_args(
        &mut self,
        emojis: Option<Vec<String>>,
        seed: Option<u64>,
        json: bool,
        announce_as: Option<String>,
    ) {
        if let Some(e) = emojis {
            self.emojis = e;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if json {
            self.json = true;
        }
        if let Some(user) = announce_as {
            self.announce_as = Some(user);
        }
    }

    /// The configured emoji pool, validated
    pub fn pool(&self) -> Result<EmojiPool> {
        EmojiPool::new(self.emojis.iter().cloned())
    }
}
