//! Output formatting utilities

use crate::domain::{DatedEntry, TemplateIssue};

/// Format a list of dated entries for display
pub fn format_entry_list(entries: &[DatedEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {}\n",
            entry.date.format("%Y-%m-%d"),
            entry.name
        ));
    }
    output
}

/// Format template issues as warning lines
pub fn format_template_warnings(issues: &[TemplateIssue]) -> String {
    let mut output = String::new();
    for issue in issues {
        output.push_str(&format!("warning: {}\n", issue));
    }
    output
}
