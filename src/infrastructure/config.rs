//! Configuration management

use crate::error::{MindtrackError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the directory holding config, data and backups
pub const JOURNAL_DIR: &str = ".mindtrack";

const CONFIG_FILE: &str = "config.toml";
const DEFAULT_RECENT_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub created: DateTime<Utc>,
    /// Copy the data file into the backup folder before every change
    #[serde(default = "default_backup_on_write")]
    pub backup_on_write: bool,
    /// Keep at most this many backups; unset keeps all
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_backups: Option<usize>,
    /// Number of entries shown under "recent" on the dashboard
    #[serde(default = "default_recent_count")]
    pub recent_count: usize,
}

fn default_backup_on_write() -> bool {
    true
}

fn default_recent_count() -> usize {
    DEFAULT_RECENT_COUNT
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            created: Utc::now(),
            backup_on_write: default_backup_on_write(),
            max_backups: None,
            recent_count: DEFAULT_RECENT_COUNT,
        }
    }

    /// Load config from .mindtrack/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(JOURNAL_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MindtrackError::NotJournalDirectory(path.to_path_buf())
            } else {
                MindtrackError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| MindtrackError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .mindtrack/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let journal_dir = path.join(JOURNAL_DIR);

        if !journal_dir.exists() {
            fs::create_dir(&journal_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MindtrackError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(journal_dir.join(CONFIG_FILE), contents)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.recent_count == 0 {
            return Err(MindtrackError::Config(
                "recent_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
