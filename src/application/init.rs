//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;

/// Service for creating a new journal
pub struct InitService;

impl InitService {
    /// Create `.mindtrack/` with a default config at `path`, creating the
    /// directory itself if needed.
    pub fn execute(path: &Path) -> Result<Config> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = FileSystemRepository::new(path.to_path_buf());
        repo.initialize()?;

        let config = Config::new();
        repo.save_config(&config)?;

        tracing::info!(root = %path.display(), "initialized journal");
        Ok(config)
    }
}
