//! Domain layer - Business logic and domain models

pub mod date_format;
pub mod entry;
pub mod locate;
pub mod path;
pub mod template;

pub use date_format::{format_with_pattern, DateFormat};
pub use entry::{date_of, is_daily_entry, DatedEntry};
pub use locate::{locate_adjacent, Direction};
pub use path::{build_entry_path, build_slug, resolve_path_for_today, EntryPath};
pub use template::{expand, Expansion, TemplateIssue};
