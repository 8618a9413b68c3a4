//! dayfold - Date-named folder journal
//!
//! A command-line tool that manages daily journal entries as date-named
//! folders, each holding an identically named markdown note. Entry names
//! are recognized by strict fixed-width date matching, new notes can be
//! filled from a template with `{{date}}` substitution tokens, and
//! next/previous navigation walks the vault by date.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DayfoldError;
