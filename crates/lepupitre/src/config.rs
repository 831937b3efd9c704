// Reading-desk configuration
//
// *La Configuration* (The Configuration) - Display settings for LeGlossaire

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default configuration file name, relative to the base directory
pub const DEFAULT_CONFIG_FILE: &str = ".leglossaire/config.toml";

/// Reading-desk configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlossaireConfig {
    /// Number of highlight color slots. A matched span's palette slot is
    /// `color_index % palette_len`.
    pub palette_len: usize,

    /// Maximum number of search results to print; 0 means unlimited
    pub top_k: usize,

    /// Whether to print compiled/edited dates
    pub show_dates: bool,
}

impl Default for GlossaireConfig {
    fn default() -> Self {
        Self {
            palette_len: 5,
            top_k: 0,
            show_dates: true,
        }
    }
}

impl GlossaireConfig {
    /// Load configuration from a base directory.
    ///
    /// Looks for `.leglossaire/config.toml`; a missing file yields the
    /// default configuration.
    pub fn load<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join(DEFAULT_CONFIG_FILE);

        if !config_path.exists() {
            return Ok(GlossaireConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: GlossaireConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        Ok(config)
    }

    /// Save configuration under a base directory, creating `.leglossaire`
    /// if needed.
    pub fn save<P: AsRef<Path>>(&self, base_dir: P) -> Result<()> {
        let config_dir = base_dir.as_ref().join(".leglossaire");
        fs::create_dir_all(&config_dir)
            .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;

        let config_path = config_dir.join("config.toml");
        let content =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }
}
