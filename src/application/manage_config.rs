//! Config management use case

use crate::domain::DateFormat;
use crate::error::{DayfoldError, Result};
use crate::infrastructure::{Config, FileSystemVault, VaultRepository};

/// Service for managing vault configuration
pub struct ConfigService {
    vault: FileSystemVault,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(vault: FileSystemVault) -> Self {
        ConfigService { vault }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.vault.load_config()?;

        match key {
            "format" => Ok(config.format),
            "description" => Ok(config.description.to_string()),
            "root" => Ok(config.root),
            "use_template" => Ok(config.use_template.to_string()),
            "template" => Ok(config.template),
            "date_format" => Ok(config.date_format),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.vault.load_config()?;

        match key {
            "format" => {
                // Entry names need a fixed-width pattern.
                DateFormat::compile(value)?;
                config.format = value.to_string();
            }
            "description" => {
                config.description = parse_bool(value)?;
            }
            "root" => {
                config.root = value.trim_end_matches('/').to_string();
            }
            "use_template" => {
                config.use_template = parse_bool(value)?;
            }
            "template" => {
                if !value.ends_with(".md") {
                    return Err(DayfoldError::Config(format!(
                        "Template file must end with .md: '{}'",
                        value
                    )));
                }
                config.template = value.to_string();
            }
            "date_format" => {
                // Output-only pattern; variable-width tokens are fine.
                config.date_format = value.to_string();
            }
            _ => return Err(unknown_key(key)),
        }

        self.vault.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.vault.load_config()
    }
}

fn unknown_key(key: &str) -> DayfoldError {
    DayfoldError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: format, description, root, \
        use_template, template, date_format",
        key
    ))
}

fn parse_bool(value: &str) -> Result<bool> {
    value.parse::<bool>().map_err(|_| {
        DayfoldError::Config(format!(
            "Invalid boolean value: '{}'. Expected true or false",
            value
        ))
    })
}
