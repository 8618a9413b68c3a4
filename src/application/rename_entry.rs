//! Rename entry use case

use crate::domain::build_slug;
use crate::error::{DayfoldError, Result};
use crate::infrastructure::{FileSystemVault, VaultRepository};
use std::path::PathBuf;

/// Service for renaming an entry's description while keeping its date
pub struct RenameEntryService {
    vault: FileSystemVault,
}

impl RenameEntryService {
    /// Create a new rename service
    pub fn new(vault: FileSystemVault) -> Self {
        RenameEntryService { vault }
    }

    /// Rename `current` to carry `new_description`
    ///
    /// The date part of the name is preserved; only the slug changes. The
    /// note file is renamed first, then its folder. Returns the renamed
    /// note path.
    pub fn execute(&self, current: &str, new_description: &str) -> Result<PathBuf> {
        let config = self.vault.load_config()?;
        let format = config.entry_format()?;

        let entries = self.vault.list_entries(&config, &format)?;
        let entry = entries
            .iter()
            .find(|entry| entry.name == current)
            .ok_or_else(|| DayfoldError::NotDatedEntry(current.to_string()))?;

        let new_name = format!(
            "{}{}",
            format.format(entry.date),
            build_slug(new_description)
        );

        self.vault.rename_entry(&config, &entry.name, &new_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Config;
    use std::fs;
    use tempfile::TempDir;

    fn setup_vault_with_entry(name: &str) -> (TempDir, FileSystemVault) {
        let temp = TempDir::new().unwrap();
        let vault = FileSystemVault::new(temp.path().to_path_buf());
        vault.initialize().unwrap();
        vault.save_config(&Config::new("YYYYMMDD", "dailies")).unwrap();

        let folder = temp.path().join("dailies").join(name);
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join(format!("{}.md", name)), "content").unwrap();

        (temp, vault)
    }

    #[test]
    fn test_rename_replaces_description() {
        let (temp, vault) = setup_vault_with_entry("20230105_team_sync");
        let service = RenameEntryService::new(vault);

        let note_path = service.execute("20230105_team_sync", "retro").unwrap();

        assert_eq!(
            note_path,
            temp.path().join("dailies/20230105_retro/20230105_retro.md")
        );
        assert!(!temp.path().join("dailies/20230105_team_sync").exists());
        assert_eq!(fs::read_to_string(&note_path).unwrap(), "content");
    }

    #[test]
    fn test_rename_to_empty_description_drops_slug() {
        let (temp, vault) = setup_vault_with_entry("20230105_team_sync");
        let service = RenameEntryService::new(vault);

        let note_path = service.execute("20230105_team_sync", "").unwrap();

        assert_eq!(
            note_path,
            temp.path().join("dailies/20230105/20230105.md")
        );
    }

    #[test]
    fn test_rename_adds_description_to_bare_entry() {
        let (temp, vault) = setup_vault_with_entry("20230105");
        let service = RenameEntryService::new(vault);

        let note_path = service.execute("20230105", "q1 planning").unwrap();

        assert_eq!(
            note_path,
            temp.path()
                .join("dailies/20230105_q1_planning/20230105_q1_planning.md")
        );
    }

    #[test]
    fn test_rename_unknown_entry_fails() {
        let (_temp, vault) = setup_vault_with_entry("20230105");
        let service = RenameEntryService::new(vault);

        let result = service.execute("20230106", "anything");
        match result.unwrap_err() {
            DayfoldError::NotDatedEntry(name) => assert_eq!(name, "20230106"),
            _ => panic!("Expected NotDatedEntry error"),
        }
    }

    #[test]
    fn test_rename_undated_name_fails() {
        let (_temp, vault) = setup_vault_with_entry("20230105");
        let service = RenameEntryService::new(vault);

        assert!(service.execute("scratch", "anything").is_err());
    }
}
