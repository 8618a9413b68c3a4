//! Configuration management

use crate::domain::DateFormat;
use crate::error::{DayfoldError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Vault settings, persisted as `.dayfold/config.toml`
///
/// Missing fields fall back to their defaults when loading, so configs
/// written by older versions keep working.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixed-width date pattern for entry names (e.g. `YYYYMMDD`)
    pub format: String,
    /// Whether new entries may carry a description slug
    pub description: bool,
    /// Vault-relative folder that holds the entry folders; empty for the
    /// vault root
    pub root: String,
    /// Whether new entries are filled from the template file
    pub use_template: bool,
    /// Vault-relative path of the template file
    pub template: String,
    /// Default pattern for `{{date}}` tokens; empty falls back to `format`
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: "YYYYMMDD".to_string(),
            description: true,
            root: String::new(),
            use_template: false,
            template: String::new(),
            date_format: String::new(),
        }
    }
}

impl Config {
    /// Create a config with the given entry format and root folder
    pub fn new(format: &str, root: &str) -> Self {
        Config {
            format: format.to_string(),
            root: root.trim_end_matches('/').to_string(),
            ..Config::default()
        }
    }

    /// Load config from .dayfold/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".dayfold").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DayfoldError::NotVaultDirectory(path.to_path_buf())
            } else {
                DayfoldError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| DayfoldError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .dayfold/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let dayfold_dir = path.join(".dayfold");
        let config_path = dayfold_dir.join("config.toml");

        if !dayfold_dir.exists() {
            fs::create_dir(&dayfold_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| DayfoldError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Compile the entry-name pattern into a fixed-width matcher
    pub fn entry_format(&self) -> Result<DateFormat> {
        DateFormat::compile(&self.format)
    }

    /// Pattern used for `{{date}}` tokens without an override
    pub fn template_date_format(&self) -> &str {
        if self.date_format.is_empty() {
            &self.format
        } else {
            &self.date_format
        }
    }
}
