//! Slug and entry path construction

use crate::domain::DateFormat;
use chrono::NaiveDate;

/// Folder path and file base name for one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPath {
    /// Vault-relative folder path: `root` + `/` + date + slug
    pub folder: String,
    /// Entry name without extension: date + slug
    pub file_base: String,
}

/// Build a filesystem-safe slug from a free-text description
///
/// Empty input maps to the empty string; anything else gets a leading
/// underscore and spaces replaced by underscores.
pub fn build_slug(description: &str) -> String {
    if description.is_empty() {
        String::new()
    } else {
        format!("_{}", description.split(' ').collect::<Vec<_>>().join("_"))
    }
}

/// Compose the folder path and file base name for an entry
///
/// `root` is used verbatim; trimming its leading/trailing slashes is the
/// configuration layer's job.
pub fn build_entry_path(root: &str, date_string: &str, slug: &str) -> EntryPath {
    EntryPath {
        folder: format!("{}/{}{}", root, date_string, slug),
        file_base: format!("{}{}", date_string, slug),
    }
}

/// Resolve the target path for a new entry dated `today`
pub fn resolve_path_for_today(
    root: &str,
    format: &DateFormat,
    today: NaiveDate,
    description: &str,
) -> EntryPath {
    let slug = build_slug(description);
    build_entry_path(root, &format.format(today), &slug)
}
