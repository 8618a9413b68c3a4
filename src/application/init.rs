//! Initialize vault use case

use crate::domain::DateFormat;
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemVault, VaultRepository};
use std::fs;
use std::path::Path;

/// Initialize a new vault at the specified path.
pub fn init(path: &Path, format: &str, root: &str) -> Result<()> {
    // Reject broken entry-name patterns before touching the filesystem
    DateFormat::compile(format)?;

    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let vault = FileSystemVault::new(path.to_path_buf());

    vault.initialize()?;

    let config = Config::new(format, root);
    vault.save_config(&config)?;

    // Pre-create the folder that will hold the entries
    if !config.root.is_empty() {
        fs::create_dir_all(path.join(&config.root))?;
    }

    println!("Initialized dayfold vault at {}", path.display());
    println!("Entry format: {}", config.format);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_vault() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("vault");

        init(&target, "YYYYMMDD", "dailies").unwrap();

        assert!(target.join(".dayfold/config.toml").exists());
        assert!(target.join("dailies").is_dir());

        let config = Config::load_from_dir(&target).unwrap();
        assert_eq!(config.format, "YYYYMMDD");
        assert_eq!(config.root, "dailies");
    }

    #[test]
    fn test_init_empty_root_skips_folder() {
        let temp = TempDir::new().unwrap();

        init(temp.path(), "YYYY-MM-DD", "").unwrap();

        let config = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(config.root, "");
    }

    #[test]
    fn test_init_rejects_variable_width_format() {
        let temp = TempDir::new().unwrap();

        let result = init(temp.path(), "MMMM DD", "");
        assert!(result.is_err());
        // Nothing should have been created.
        assert!(!temp.path().join(".dayfold").exists());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();

        init(temp.path(), "YYYYMMDD", "").unwrap();
        assert!(init(temp.path(), "YYYYMMDD", "").is_err());
    }
}
