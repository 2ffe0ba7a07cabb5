//! Error types for mindtrack

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mindtrack
#[derive(Debug, Error)]
pub enum MindtrackError {
    #[error("Not a mindtrack directory: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Entry not found: {0}")]
    EntryNotFound(u64),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid rating: {0}")]
    InvalidRating(String),

    #[error("{0}")]
    Validation(String),

    #[error("No entries to export")]
    EmptyJournal,

    #[error("Invalid journal data: {0}")]
    CorruptData(String),

    #[error("Backup not found: {0}")]
    BackupNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MindtrackError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MindtrackError::NotJournalDirectory(_) => 2,
            MindtrackError::InvalidDate(_) => 3,
            MindtrackError::EntryNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MindtrackError::NotJournalDirectory(path) => {
                format!(
                    "Not a mindtrack directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'mindtrack init' in this directory to create a new journal\n\
                    • Navigate to an existing journal directory\n\
                    • Set MINDTRACK_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MindtrackError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2025-01-17)",
                    input
                )
            }
            MindtrackError::EntryNotFound(id) => {
                format!(
                    "Entry not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'mindtrack list' to see entry ids\n\
                    • Use 'mindtrack search <text>' to find an entry",
                    id
                )
            }
            MindtrackError::InvalidRating(value) => {
                format!(
                    "Invalid rating: '{}'\n\n\
                    Please enter a rating between 1 and 5.",
                    value
                )
            }
            MindtrackError::BackupNotFound(name) => {
                format!(
                    "Backup not found: {}\n\n\
                    Use 'mindtrack backup list' to see available backups.",
                    name
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MindtrackError
pub type Result<T> = std::result::Result<T, MindtrackError>;
