//! File system vault access

use crate::domain::{DateFormat, DatedEntry, EntryPath};
use crate::error::{DayfoldError, Result};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Abstract store for vault-level operations
pub trait VaultRepository {
    /// Get the vault root directory
    fn root(&self) -> &Path;

    /// Load configuration from .dayfold/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .dayfold/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if the .dayfold directory exists
    fn is_initialized(&self) -> bool;

    /// Create the .dayfold directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of VaultRepository
#[derive(Debug, Clone)]
pub struct FileSystemVault {
    pub root: PathBuf,
}

impl FileSystemVault {
    /// Create a vault handle for the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemVault { root }
    }

    /// Discover the vault root, preferring the DAYFOLD_ROOT environment
    /// variable and falling back to walking up from the current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("DAYFOLD_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_vault_dir(&path) {
                return Ok(FileSystemVault::new(path));
            } else {
                return Err(DayfoldError::Config(format!(
                    "DAYFOLD_ROOT is set to '{}' but no .dayfold directory found. \
                    Run 'dayfold init' in that directory or unset DAYFOLD_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the vault root by walking up from a starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_vault_dir(&current) {
                return Ok(FileSystemVault::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(DayfoldError::NotVaultDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .dayfold directory
    fn has_vault_dir(path: &Path) -> bool {
        path.join(".dayfold").is_dir()
    }
}

impl VaultRepository for FileSystemVault {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_vault_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let dayfold_dir = self.root.join(".dayfold");

        if dayfold_dir.exists() {
            return Err(DayfoldError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&dayfold_dir)?;
        Ok(())
    }
}

// Entry operations (not part of trait - filesystem-specific)
impl FileSystemVault {
    /// Directory holding the entry folders for this config
    fn entries_dir(&self, config: &Config) -> PathBuf {
        if config.root.is_empty() {
            self.root.clone()
        } else {
            self.root.join(&config.root)
        }
    }

    /// Absolute path of an entry's note file
    pub fn note_path(&self, config: &Config, entry_name: &str) -> PathBuf {
        self.entries_dir(config)
            .join(entry_name)
            .join(format!("{}.md", entry_name))
    }

    fn relative_dir_string(&self, dir: &Path) -> Option<String> {
        let rel = dir.strip_prefix(&self.root).ok()?;
        let parts: Vec<&str> = rel
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }

    /// Snapshot listing of all valid dated entries in the vault
    ///
    /// Walks the tree collecting `<folder>/<name>.md` candidates (hidden
    /// directories skipped) and keeps those the domain predicate accepts:
    /// the name strict-parses, matches its folder, and the folder sits in
    /// the configured root.
    pub fn list_entries(&self, config: &Config, format: &DateFormat) -> Result<Vec<DatedEntry>> {
        let mut entries = Vec::new();

        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        for candidate in walker {
            let Ok(candidate) = candidate else {
                continue;
            };
            if !candidate.file_type().is_file() {
                continue;
            }
            let path = candidate.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
                continue;
            }

            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let Some(folder) = path.parent() else {
                continue;
            };
            let Some(parent) = folder.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(grandparent) = folder
                .parent()
                .and_then(|g| self.relative_dir_string(g))
            else {
                continue;
            };

            if let Some(entry) =
                DatedEntry::classify(name, parent, &grandparent, format, &config.root)
            {
                entries.push(entry);
            }
        }

        Ok(entries)
    }

    /// Create an entry folder and its note file, filled with `content`
    ///
    /// Fails when the folder already exists. Returns the note path.
    pub fn create_entry(&self, path: &EntryPath, content: &str) -> Result<PathBuf> {
        // The core composes folder paths verbatim; an empty root leaves a
        // leading slash to trim here.
        let folder = self.root.join(path.folder.trim_start_matches('/'));

        if folder.exists() {
            return Err(DayfoldError::Config(format!(
                "Entry already exists: {}",
                folder.display()
            )));
        }

        fs::create_dir_all(&folder)?;

        let note_path = folder.join(format!("{}.md", path.file_base));
        fs::write(&note_path, content)?;

        Ok(note_path)
    }

    /// Rename an entry, note file first, then its folder
    ///
    /// Returns the renamed note path.
    pub fn rename_entry(
        &self,
        config: &Config,
        old_name: &str,
        new_name: &str,
    ) -> Result<PathBuf> {
        let entries_dir = self.entries_dir(config);
        let old_folder = entries_dir.join(old_name);
        let new_folder = entries_dir.join(new_name);

        if old_name != new_name && new_folder.exists() {
            return Err(DayfoldError::Config(format!(
                "Entry already exists: {}",
                new_folder.display()
            )));
        }

        fs::rename(
            old_folder.join(format!("{}.md", old_name)),
            old_folder.join(format!("{}.md", new_name)),
        )?;
        fs::rename(&old_folder, &new_folder)?;

        Ok(new_folder.join(format!("{}.md", new_name)))
    }

    /// Read the configured template body
    ///
    /// Returns an empty body when templates are disabled; a configured but
    /// missing template file is an error, matching the behavior of entry
    /// creation aborting rather than writing an unexpected empty note.
    pub fn read_template(&self, config: &Config) -> Result<String> {
        if !config.use_template {
            return Ok(String::new());
        }

        if config.template.is_empty() {
            return Err(DayfoldError::Template(
                "use_template is on but no template file is configured".to_string(),
            ));
        }

        let path = self.root.join(&config.template);
        fs::read_to_string(&path).map_err(|e| {
            DayfoldError::Template(format!(
                "Failed to read template file {}: {}",
                path.display(),
                e
            ))
        })
    }
}
