//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mindtrack")]
#[command(about = "Terminal learning journal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Add an entry
    Add {
        /// Entry text; inline #tags are picked up
        content: String,

        #[arg(short, long)]
        title: Option<String>,

        /// Date of the entry (today, yesterday, monday, 2025-01-17, ...)
        #[arg(short, long, default_value = "today")]
        date: String,

        /// Tag to attach (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Productivity rating from 1 to 5
        #[arg(short, long)]
        rating: Option<String>,
    },

    /// Edit fields of an entry
    Edit {
        id: u64,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        content: Option<String>,

        #[arg(short, long)]
        date: Option<String>,

        /// Replace the tags (repeatable)
        #[arg(long = "tag", conflicts_with = "clear_tags")]
        tags: Vec<String>,

        /// Remove all tags
        #[arg(long)]
        clear_tags: bool,

        #[arg(short, long, conflicts_with = "clear_rating")]
        rating: Option<String>,

        /// Remove the rating
        #[arg(long)]
        clear_rating: bool,
    },

    /// Delete an entry
    Delete { id: u64 },

    /// Delete all entries (a backup is made first)
    Clear {
        /// Confirm deleting every entry
        #[arg(long)]
        yes: bool,
    },

    /// List entries, newest first
    List {
        /// Start date (inclusive)
        #[arg(long)]
        from: Option<String>,

        /// End date (inclusive)
        #[arg(long)]
        to: Option<String>,

        /// Only entries with this tag
        #[arg(long)]
        tag: Option<String>,

        /// Maximum number of entries to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show one entry in full
    Show { id: u64 },

    /// Show the entries written on a date
    On {
        /// Date (today, yesterday, last friday, 2025-01-17, ...)
        date: String,
    },

    /// Search titles, content, tags and dates; `#tag` matches a tag exactly
    Search { query: String },

    /// Export all entries to CSV
    Export {
        /// Output file (default: mindtrack_export_<timestamp>.csv)
        path: Option<PathBuf>,
    },

    /// Import entries from CSV
    Import { path: PathBuf },

    /// Back up the data file, or manage backups
    Backup {
        #[command(subcommand)]
        action: Option<BackupAction>,
    },

    /// Dashboard: totals, average rating and recent entries
    Stats,

    /// Month view with days that have entries marked
    Calendar {
        /// Month as YYYY-MM (default: current month)
        month: Option<String>,

        /// Show the month before
        #[arg(long, conflicts_with = "next")]
        prev: bool,

        /// Show the month after
        #[arg(long)]
        next: bool,
    },

    /// List tags with entry counts
    Tags,

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

#[derive(Subcommand, Debug)]
pub enum BackupAction {
    /// List backups, newest first
    List,
    /// Replace the journal with a backup
    Restore {
        /// Backup file name as shown by `backup list`
        name: String,
    },
}
