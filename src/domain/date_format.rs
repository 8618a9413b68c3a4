//! Fixed-width date format matching and formatting
//!
//! Entry names are recognized by strict-parsing their leading characters
//! against a user-configured pattern such as `YYYYMMDD`. Only fixed-width
//! patterns are accepted for matching, so a candidate either matches
//! exactly or is not a dated entry. Output-only formats (templates) may
//! use the wider variable-width token set via [`format_with_pattern`].

use crate::error::{DayfoldError, Result};
use chrono::{Datelike, NaiveDate};

/// A single token of a date pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatternToken {
    /// `YYYY` - 4-digit year
    Year4,
    /// `YY` - 2-digit year
    Year2,
    /// `MMMM` - full month name (variable width)
    MonthName,
    /// `MMM` - abbreviated month name (variable width)
    MonthAbbr,
    /// `MM` - 2-digit month
    Month2,
    /// `M` - month without padding (variable width)
    Month1,
    /// `DD` - 2-digit day
    Day2,
    /// `D` - day without padding (variable width)
    Day1,
    /// `dddd` - full weekday name (variable width)
    WeekdayName,
    /// `ddd` - abbreviated weekday name (variable width)
    WeekdayAbbr,
    /// Any other character, matched/emitted verbatim
    Literal(char),
}

impl PatternToken {
    /// Byte width of this token's output, or None when variable-width
    fn fixed_width(&self) -> Option<usize> {
        match self {
            PatternToken::Year4 => Some(4),
            PatternToken::Year2 | PatternToken::Month2 | PatternToken::Day2 => Some(2),
            PatternToken::Literal(c) => Some(c.len_utf8()),
            _ => None,
        }
    }
}

/// Split a moment-style pattern into tokens, longest token first
fn tokenize(pattern: &str) -> Vec<PatternToken> {
    const NAMED: &[(&str, PatternToken)] = &[
        ("YYYY", PatternToken::Year4),
        ("YY", PatternToken::Year2),
        ("MMMM", PatternToken::MonthName),
        ("MMM", PatternToken::MonthAbbr),
        ("MM", PatternToken::Month2),
        ("M", PatternToken::Month1),
        ("DD", PatternToken::Day2),
        ("D", PatternToken::Day1),
        ("dddd", PatternToken::WeekdayName),
        ("ddd", PatternToken::WeekdayAbbr),
    ];

    let mut tokens = Vec::new();
    let mut rest = pattern;

    'outer: while !rest.is_empty() {
        for (text, token) in NAMED {
            if let Some(tail) = rest.strip_prefix(text) {
                tokens.push(*token);
                rest = tail;
                continue 'outer;
            }
        }
        let c = rest.chars().next().unwrap();
        tokens.push(PatternToken::Literal(c));
        rest = &rest[c.len_utf8()..];
    }

    tokens
}

/// A compiled fixed-width date format
///
/// Compilation rejects patterns containing variable-width tokens, so a
/// `DateFormat` always produces strings of exactly [`width`](Self::width)
/// bytes and can match entry-name prefixes unambiguously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
    chrono_fmt: String,
    width: usize,
}

impl DateFormat {
    /// Compile a moment-style pattern into a fixed-width matcher
    pub fn compile(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(DayfoldError::InvalidDateFormat("(empty)".to_string()));
        }

        let mut chrono_fmt = String::new();
        let mut width = 0;

        for token in tokenize(pattern) {
            let Some(token_width) = token.fixed_width() else {
                return Err(DayfoldError::InvalidDateFormat(pattern.to_string()));
            };
            width += token_width;

            match token {
                PatternToken::Year4 => chrono_fmt.push_str("%Y"),
                PatternToken::Year2 => chrono_fmt.push_str("%y"),
                PatternToken::Month2 => chrono_fmt.push_str("%m"),
                PatternToken::Day2 => chrono_fmt.push_str("%d"),
                PatternToken::Literal('%') => chrono_fmt.push_str("%%"),
                PatternToken::Literal(c) => chrono_fmt.push(c),
                _ => unreachable!("variable-width tokens rejected above"),
            }
        }

        Ok(DateFormat {
            pattern: pattern.to_string(),
            chrono_fmt,
            width,
        })
    }

    /// The original pattern this format was compiled from
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Byte length of every string this format produces
    pub fn width(&self) -> usize {
        self.width
    }

    /// Strictly parse the leading `width` bytes of a candidate string
    ///
    /// The candidate is truncated to the pattern width, parsed, then
    /// re-formatted and compared against the truncated prefix. Anything
    /// short of an exact round-trip (wrong separators, unpadded numbers,
    /// a too-short candidate, a truncation point that falls inside a
    /// multi-byte character) yields `None`.
    pub fn parse_strict(&self, candidate: &str) -> Option<NaiveDate> {
        let prefix = candidate.get(..self.width)?;
        let date = NaiveDate::parse_from_str(prefix, &self.chrono_fmt).ok()?;
        (self.format(date) == prefix).then_some(date)
    }

    /// Format a date with this pattern
    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.chrono_fmt).to_string()
    }
}

/// Format a date with a moment-style pattern, fixed-width or not
///
/// Total function used for template output, where variable-width tokens
/// like `MMMM` or `D` are allowed. Unrecognized characters pass through
/// verbatim.
pub fn format_with_pattern(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();

    for token in tokenize(pattern) {
        match token {
            PatternToken::Year4 => out.push_str(&format!("{:04}", date.year())),
            PatternToken::Year2 => out.push_str(&format!("{:02}", date.year().rem_euclid(100))),
            PatternToken::MonthName => out.push_str(&date.format("%B").to_string()),
            PatternToken::MonthAbbr => out.push_str(&date.format("%b").to_string()),
            PatternToken::Month2 => out.push_str(&format!("{:02}", date.month())),
            PatternToken::Month1 => out.push_str(&date.month().to_string()),
            PatternToken::Day2 => out.push_str(&format!("{:02}", date.day())),
            PatternToken::Day1 => out.push_str(&date.day().to_string()),
            PatternToken::WeekdayName => out.push_str(&date.format("%A").to_string()),
            PatternToken::WeekdayAbbr => out.push_str(&date.format("%a").to_string()),
            PatternToken::Literal(c) => out.push(c),
        }
    }

    out
}
