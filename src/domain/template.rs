//! Template token substitution
//!
//! Templates may contain `{{ selector [: format] }}` tokens. The selector
//! is `date`, `date+N` (N days ahead), or, for templates predating the
//! selector syntax, a raw date format pattern. Each token expands
//! independently; malformed tokens expand to nothing and are reported
//! back to the caller instead of aborting the rest of the template.

use crate::domain::date_format::format_with_pattern;
use chrono::{Duration, NaiveDate};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Regex for `{{...}}` spans; an empty body still counts as a token
fn token_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\{\{([^}]*)\}\}").unwrap())
}

/// A malformed token found during expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateIssue {
    /// Nothing before the `:` (or an entirely empty token)
    EmptySelector { token: String },
    /// `date+` followed by something other than a non-negative integer,
    /// or an offset that leaves the calendar range
    InvalidOffset { token: String },
}

impl fmt::Display for TemplateIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateIssue::EmptySelector { token } => {
                write!(f, "empty selector in template token '{}'", token)
            }
            TemplateIssue::InvalidOffset { token } => {
                write!(f, "invalid day offset in template token '{}'", token)
            }
        }
    }
}

/// Result of expanding a template body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// The body with every token replaced
    pub text: String,
    /// Malformed tokens encountered, in order of appearance
    pub issues: Vec<TemplateIssue>,
}

/// Expand every `{{...}}` token in `template` against `today`
///
/// `default_format` applies when a token carries no `:format` override.
/// Non-token text passes through unchanged. Malformed tokens substitute
/// the empty string and are collected in [`Expansion::issues`].
pub fn expand(template: &str, today: NaiveDate, default_format: &str) -> Expansion {
    let mut issues = Vec::new();

    let text = token_regex()
        .replace_all(template, |caps: &regex::Captures<'_>| {
            let token = &caps[0];
            let body = &caps[1];

            let (selector_raw, format_override) = match body.split_once(':') {
                Some((selector, format)) => (selector, Some(format)),
                None => (body, None),
            };

            let selector: String = selector_raw
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();

            if selector.is_empty() {
                issues.push(TemplateIssue::EmptySelector {
                    token: token.to_string(),
                });
                return String::new();
            }

            let format = format_override.unwrap_or(default_format);

            if selector == "date" {
                format_with_pattern(today, format)
            } else if let Some(offset) = selector.strip_prefix("date+") {
                let shifted = offset
                    .parse::<u32>()
                    .ok()
                    .and_then(|days| today.checked_add_signed(Duration::days(i64::from(days))));

                match shifted {
                    Some(date) => format_with_pattern(date, format),
                    None => {
                        issues.push(TemplateIssue::InvalidOffset {
                            token: token.to_string(),
                        });
                        String::new()
                    }
                }
            } else {
                // Legacy form: the selector is itself a format pattern.
                format_with_pattern(today, &selector)
            }
        })
        .into_owned();

    Expansion { text, issues }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()
    }

    #[test]
    fn test_plain_text_unchanged() {
        let result = expand("No tokens here.", today(), "YYYY-MM-DD");
        assert_eq!(result.text, "No tokens here.");
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_date_token_uses_default_format() {
        let result = expand("Today is {{date}}", today(), "YYYY-MM-DD");
        assert_eq!(result.text, "Today is 2023-06-01");
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_date_token_with_format_override() {
        let result = expand("{{date:DD/MM}}", today(), "YYYY-MM-DD");
        assert_eq!(result.text, "01/06");
    }

    #[test]
    fn test_offset_token() {
        let result = expand("{{date+3:YYYYMMDD}}", today(), "YYYY-MM-DD");
        assert_eq!(result.text, "20230604");
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_offset_crosses_month_boundary() {
        let result = expand("{{date+30:YYYY-MM-DD}}", today(), "YYYYMMDD");
        assert_eq!(result.text, "2023-07-01");
    }

    #[test]
    fn test_legacy_raw_format_token() {
        let result = expand("{{DD/MM}}", today(), "YYYY-MM-DD");
        assert_eq!(result.text, "01/06");
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_selector_whitespace_is_stripped() {
        let result = expand("{{ date }} and {{ date + 3 :YYYYMMDD}}", today(), "YYYYMMDD");
        assert_eq!(result.text, "20230601 and 20230604");
    }

    #[test]
    fn test_empty_token_reports_and_continues() {
        let result = expand("A{{}}B{{date}}", today(), "YYYYMMDD");
        assert_eq!(result.text, "AB20230601");
        assert_eq!(
            result.issues,
            vec![TemplateIssue::EmptySelector {
                token: "{{}}".to_string()
            }]
        );
    }

    #[test]
    fn test_empty_selector_before_colon() {
        let result = expand("{{:DD/MM}}", today(), "YYYYMMDD");
        assert_eq!(result.text, "");
        assert_eq!(
            result.issues,
            vec![TemplateIssue::EmptySelector {
                token: "{{:DD/MM}}".to_string()
            }]
        );
    }

    #[test]
    fn test_bad_offset_reports_and_continues() {
        let result = expand("{{date+x}} then {{date:DD/MM}}", today(), "YYYYMMDD");
        assert_eq!(result.text, " then 01/06");
        assert_eq!(
            result.issues,
            vec![TemplateIssue::InvalidOffset {
                token: "{{date+x}}".to_string()
            }]
        );
    }

    #[test]
    fn test_negative_offset_is_invalid() {
        let result = expand("{{date+-3}}", today(), "YYYYMMDD");
        assert_eq!(result.text, "");
        assert_eq!(result.issues.len(), 1);
    }

    #[test]
    fn test_offset_overflowing_calendar_is_invalid() {
        let result = expand("{{date+4294967295}}", today(), "YYYYMMDD");
        assert_eq!(result.text, "");
        assert_eq!(
            result.issues,
            vec![TemplateIssue::InvalidOffset {
                token: "{{date+4294967295}}".to_string()
            }]
        );
    }

    #[test]
    fn test_tokens_expand_independently() {
        let result = expand(
            "# {{date:MMMM D, YYYY}}\n\nDue {{date+7:YYYY-MM-DD}}\n",
            today(),
            "YYYYMMDD",
        );
        assert_eq!(result.text, "# June 1, 2023\n\nDue 2023-06-08\n");
    }

    #[test]
    fn test_format_override_keeps_later_colons() {
        // Split happens on the first colon only.
        let result = expand("{{date:HH:MM}}", today(), "YYYYMMDD");
        // 'H' is not a date token, so it passes through as a literal.
        assert_eq!(result.text, "HH:06");
    }

    #[test]
    fn test_issue_display() {
        let issue = TemplateIssue::EmptySelector {
            token: "{{}}".to_string(),
        };
        assert!(issue.to_string().contains("empty selector"));

        let issue = TemplateIssue::InvalidOffset {
            token: "{{date+x}}".to_string(),
        };
        assert!(issue.to_string().contains("invalid day offset"));
    }
}
