//! Dated entry model and recognition

use crate::domain::DateFormat;
use chrono::NaiveDate;

/// One date-named folder entry: a folder and its identically named note
///
/// Constructed transiently from a vault listing; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedEntry {
    /// Entry name: the formatted date plus an optional description slug
    pub name: String,
    /// Date parsed from the name's fixed-width prefix
    pub date: NaiveDate,
}

impl DatedEntry {
    /// Classify a listing candidate as a dated entry
    ///
    /// A candidate qualifies when all three hold:
    /// 1. the leading `format.width()` bytes of `name` strict-parse as a date,
    /// 2. `name` equals `parent` (the note is named after its folder),
    /// 3. `grandparent` (the folder's container, relative to the vault)
    ///    equals the configured `root`.
    pub fn classify(
        name: &str,
        parent: &str,
        grandparent: &str,
        format: &DateFormat,
        root: &str,
    ) -> Option<DatedEntry> {
        let date = format.parse_strict(name)?;

        if name != parent || grandparent != root {
            return None;
        }

        Some(DatedEntry {
            name: name.to_string(),
            date,
        })
    }
}

/// Whether a listing candidate is a valid dated entry
pub fn is_daily_entry(
    name: &str,
    parent: &str,
    grandparent: &str,
    format: &DateFormat,
    root: &str,
) -> bool {
    DatedEntry::classify(name, parent, grandparent, format, root).is_some()
}

/// Date encoded in an entry name, if its prefix matches the format
pub fn date_of(name: &str, format: &DateFormat) -> Option<NaiveDate> {
    format.parse_strict(name)
}
