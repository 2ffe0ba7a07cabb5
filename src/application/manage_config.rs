//! Config management use case

use crate::error::{MindtrackError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

const SETTABLE_KEYS: &str = "backup_on_write, max_backups, recent_count";

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "created" => Ok(config.created.to_rfc3339()),
            "backup_on_write" => Ok(config.backup_on_write.to_string()),
            "max_backups" => Ok(config
                .max_backups
                .map_or_else(|| "none".to_string(), |n| n.to_string())),
            "recent_count" => Ok(config.recent_count.to_string()),
            _ => Err(MindtrackError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: created, {}",
                key, SETTABLE_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;
        let value = value.trim();

        match key {
            "backup_on_write" => {
                config.backup_on_write = parse_bool(value)?;
            }
            "max_backups" => {
                config.max_backups = match value.to_lowercase().as_str() {
                    "none" | "0" | "" => None,
                    _ => Some(parse_count(key, value)?),
                };
            }
            "recent_count" => {
                let count = parse_count(key, value)?;
                if count == 0 {
                    return Err(MindtrackError::Config(
                        "recent_count must be at least 1".to_string(),
                    ));
                }
                config.recent_count = count;
            }
            "created" => {
                return Err(MindtrackError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MindtrackError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, SETTABLE_KEYS
                )));
            }
        }

        self.repository.save_config(&config)?;
        tracing::info!(key, value, "updated config");
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(MindtrackError::Config(format!(
            "Expected true or false, got '{}'",
            value
        ))),
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize> {
    value.parse().map_err(|_| {
        MindtrackError::Config(format!(
            "{} must be a non-negative integer, got '{}'",
            key, value
        ))
    })
}
