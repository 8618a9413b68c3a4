//! Open or create today's entry use case

use crate::domain::{resolve_path_for_today, template, TemplateIssue};
use crate::error::Result;
use crate::infrastructure::{FileSystemVault, VaultRepository};
use chrono::NaiveDate;
use std::path::PathBuf;

/// Result of resolving today's entry
#[derive(Debug)]
pub struct OpenOutcome {
    /// Absolute path of the entry's note file
    pub note_path: PathBuf,
    /// Whether the entry was created by this call
    pub created: bool,
    /// Malformed template tokens encountered during expansion
    pub issues: Vec<TemplateIssue>,
}

/// Service for opening today's entry, creating it when missing
pub struct OpenEntryService {
    vault: FileSystemVault,
}

impl OpenEntryService {
    /// Create a new open entry service
    pub fn new(vault: FileSystemVault) -> Self {
        OpenEntryService { vault }
    }

    /// Find today's entry, or create it from the configured template
    ///
    /// The search matches on the entry's date, so an entry created earlier
    /// today is found regardless of its description suffix. `description`
    /// is ignored when the `description` setting is off.
    pub fn execute(&self, today: NaiveDate, description: Option<&str>) -> Result<OpenOutcome> {
        let config = self.vault.load_config()?;
        let format = config.entry_format()?;

        let entries = self.vault.list_entries(&config, &format)?;
        if let Some(existing) = entries.iter().find(|entry| entry.date == today) {
            return Ok(OpenOutcome {
                note_path: self.vault.note_path(&config, &existing.name),
                created: false,
                issues: Vec::new(),
            });
        }

        let body = self.vault.read_template(&config)?;
        let expansion = template::expand(&body, today, config.template_date_format());

        let description = if config.description {
            description.unwrap_or("")
        } else {
            ""
        };
        let entry_path = resolve_path_for_today(&config.root, &format, today, description);

        let note_path = self.vault.create_entry(&entry_path, &expansion.text)?;

        Ok(OpenOutcome {
            note_path,
            created: true,
            issues: expansion.issues,
        })
    }
}
