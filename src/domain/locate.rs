//! Nearest-neighbor search over dated entries

use crate::domain::DatedEntry;
use chrono::NaiveDate;

/// Search direction relative to the reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Entries strictly after the reference
    Forward,
    /// Entries strictly before the reference
    Backward,
}

/// Find the entry closest to `reference` in the given direction
///
/// Filters to entries strictly after (Forward) or strictly before
/// (Backward) the reference, then picks the one with the smallest
/// absolute day distance. Returns `None` when no entry lies in that
/// direction. Single pass, no sorting.
///
/// Entries sharing a date (same date prefix, different descriptions) are
/// equidistant; the first one in input order wins. Listing order is not
/// guaranteed stable, so callers must not rely on which of the tied
/// entries they get.
pub fn locate_adjacent<'a>(
    entries: &'a [DatedEntry],
    reference: NaiveDate,
    direction: Direction,
) -> Option<&'a DatedEntry> {
    entries
        .iter()
        .filter(|entry| match direction {
            Direction::Forward => entry.date > reference,
            Direction::Backward => entry.date < reference,
        })
        .min_by_key(|entry| (entry.date - reference).num_days().abs())
}
