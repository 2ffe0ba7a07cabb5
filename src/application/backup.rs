//! Backup use cases

use crate::domain::Journal;
use crate::error::Result;
use crate::infrastructure::{BackupInfo, FileSystemRepository, JournalRepository};
use std::path::PathBuf;

/// Service for creating, listing and restoring backups
pub struct BackupService {
    repository: FileSystemRepository,
}

impl BackupService {
    pub fn new(repository: FileSystemRepository) -> Self {
        BackupService { repository }
    }

    /// Copy the data file now. `None` when there is nothing to copy yet.
    pub fn backup(&self) -> Result<Option<PathBuf>> {
        let config = self.repository.load_config()?;
        self.repository.backup_manager(&config).backup()
    }

    pub fn list(&self) -> Result<Vec<BackupInfo>> {
        let config = self.repository.load_config()?;
        self.repository.backup_manager(&config).list()
    }

    /// Replace the journal with the named backup.
    pub fn restore(&self, name: &str) -> Result<Journal> {
        let config = self.repository.load_config()?;
        self.repository.backup_manager(&config).restore(name)
    }
}
