//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dayfold")]
#[command(about = "Date-named folder journal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new vault
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Fixed-width date pattern for entry names
        #[arg(short, long, default_value = "YYYYMMDD")]
        format: String,

        /// Vault-relative folder to hold the entries
        #[arg(short, long, default_value = "")]
        root: String,
    },

    /// Open today's entry, creating it if needed
    Open {
        /// Description appended to the entry name as a slug
        #[arg(short, long)]
        description: Option<String>,

        /// Open the note in $EDITOR
        #[arg(short, long)]
        edit: bool,
    },

    /// Show the entry after the given one
    Next {
        /// Current entry name (or a date in the configured format)
        entry: String,

        /// Open the note in $EDITOR
        #[arg(short, long)]
        edit: bool,
    },

    /// Show the entry before the given one
    Prev {
        /// Current entry name (or a date in the configured format)
        entry: String,

        /// Open the note in $EDITOR
        #[arg(short, long)]
        edit: bool,
    },

    /// Change an entry's description, keeping its date
    Rename {
        /// Entry to rename
        entry: String,

        /// New description (empty to drop the slug)
        description: String,
    },

    /// List all dated entries, newest first
    List,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
