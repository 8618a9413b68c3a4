//! Next/previous entry navigation use case

use crate::domain::{date_of, locate_adjacent, Direction};
use crate::error::{DayfoldError, Result};
use crate::infrastructure::{FileSystemVault, VaultRepository};
use std::path::PathBuf;

/// Service for moving between dated entries
pub struct NavigateService {
    vault: FileSystemVault,
}

impl NavigateService {
    /// Create a new navigation service
    pub fn new(vault: FileSystemVault) -> Self {
        NavigateService { vault }
    }

    /// Find the entry adjacent to `current` in the given direction
    ///
    /// `current` is an entry name (or any string starting with a formatted
    /// date); its date prefix supplies the reference point. Returns the
    /// neighbor's note path, or `None` when no entry lies in that
    /// direction.
    pub fn execute(&self, current: &str, direction: Direction) -> Result<Option<PathBuf>> {
        let config = self.vault.load_config()?;
        let format = config.entry_format()?;

        let reference = date_of(current, &format)
            .ok_or_else(|| DayfoldError::NotDatedEntry(current.to_string()))?;

        let entries = self.vault.list_entries(&config, &format)?;

        Ok(locate_adjacent(&entries, reference, direction)
            .map(|entry| self.vault.note_path(&config, &entry.name)))
    }
}
