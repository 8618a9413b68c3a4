//! List entries use case

use crate::domain::DatedEntry;
use crate::error::Result;
use crate::infrastructure::{FileSystemVault, VaultRepository};

/// Service for listing the vault's dated entries
pub struct ListEntriesService {
    vault: FileSystemVault,
}

impl ListEntriesService {
    /// Create a new list service
    pub fn new(vault: FileSystemVault) -> Self {
        ListEntriesService { vault }
    }

    /// All valid dated entries, newest first
    pub fn execute(&self) -> Result<Vec<DatedEntry>> {
        let config = self.vault.load_config()?;
        let format = config.entry_format()?;

        let mut entries = self.vault.list_entries(&config, &format)?;

        entries.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.name.cmp(&b.name)));

        Ok(entries)
    }
}
