//! Error types for dayfold

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the dayfold application
#[derive(Debug, Error)]
pub enum DayfoldError {
    #[error("Not a dayfold vault: {0}")]
    NotVaultDirectory(PathBuf),

    #[error("Invalid date format pattern: {0}")]
    InvalidDateFormat(String),

    #[error("Not a dated entry: {0}")]
    NotDatedEntry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DayfoldError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DayfoldError::NotVaultDirectory(_) => 2,
            DayfoldError::InvalidDateFormat(_) => 3,
            DayfoldError::NotDatedEntry(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DayfoldError::NotVaultDirectory(path) => {
                format!(
                    "Not a dayfold vault: {}\n\n\
                    Suggestions:\n\
                    • Run 'dayfold init' in this directory to create a new vault\n\
                    • Navigate to an existing dayfold vault\n\
                    • Set DAYFOLD_ROOT environment variable to your vault path",
                    path.display()
                )
            }
            DayfoldError::InvalidDateFormat(pattern) => {
                format!(
                    "Invalid date format pattern: '{}'\n\n\
                    Entry name patterns must be fixed-width. Supported tokens:\n\
                    • YYYY (4-digit year), YY (2-digit year)\n\
                    • MM (2-digit month), DD (2-digit day)\n\
                    • any other character is a literal separator\n\n\
                    Variable-width tokens (M, D, MMM, MMMM, dddd) are only\n\
                    allowed in template output formats, not entry names.\n\n\
                    Examples:\n\
                    dayfold config format YYYYMMDD\n\
                    dayfold config format YYYY-MM-DD",
                    pattern
                )
            }
            DayfoldError::NotDatedEntry(name) => {
                format!(
                    "Not a dated entry: '{}'\n\n\
                    Suggestions:\n\
                    • Pass the name of an existing entry, e.g. 20250117_team_sync\n\
                    • Use 'dayfold list' to see the entries in this vault\n\
                    • Entry names must start with a date matching the configured format",
                    name
                )
            }
            DayfoldError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)",
                    msg
                )
            }
            DayfoldError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Valid keys: format, description, root, use_template, template, date_format\n\
                        Example: dayfold config root dailies",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DayfoldError
pub type Result<T> = std::result::Result<T, DayfoldError>;
