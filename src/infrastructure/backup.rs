//! Timestamped copies of the data file

use crate::domain::Journal;
use crate::error::{MindtrackError, Result};
use crate::infrastructure::repository::write_atomic;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

const PREFIX: &str = "backup_";
const EXTENSION: &str = ".toml";
const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// A backup file on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupInfo {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    pub modified: Option<DateTime<Local>>,
}

/// Copies the data file into the backup folder and restores from it
#[derive(Debug, Clone)]
pub struct BackupManager {
    data_file: PathBuf,
    backup_dir: PathBuf,
    max_backups: Option<usize>,
}

impl BackupManager {
    pub fn new(data_file: PathBuf, backup_dir: PathBuf) -> Self {
        BackupManager {
            data_file,
            backup_dir,
            max_backups: None,
        }
    }

    pub fn with_max_backups(mut self, max_backups: Option<usize>) -> Self {
        self.max_backups = max_backups;
        self
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Copy the data file to `backup_YYYYMMDD_HHMMSS.toml`.
    ///
    /// Returns `None` when there is no data file yet.
    pub fn backup(&self) -> Result<Option<PathBuf>> {
        if !self.data_file.exists() {
            tracing::debug!("no data file to back up");
            return Ok(None);
        }

        fs::create_dir_all(&self.backup_dir)?;
        let target = self.next_backup_path();
        fs::copy(&self.data_file, &target)?;
        tracing::info!(backup = %target.display(), "created backup");

        self.prune()?;
        Ok(Some(target))
    }

    fn next_backup_path(&self) -> PathBuf {
        let stamp = Local::now().format(STAMP_FORMAT).to_string();
        let mut candidate = self.backup_dir.join(format!("{PREFIX}{stamp}{EXTENSION}"));
        let mut n = 1;
        while candidate.exists() {
            candidate = self
                .backup_dir
                .join(format!("{PREFIX}{stamp}_{n}{EXTENSION}"));
            n += 1;
        }
        candidate
    }

    /// Backups newest first.
    pub fn list(&self) -> Result<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();
        for entry in fs::read_dir(&self.backup_dir)? {
            let Ok(entry) = entry else {
                continue;
            };
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if sort_key(&name).is_none() {
                continue;
            }
            let Ok(metadata) = entry.metadata() else {
                continue;
            };
            if !metadata.is_file() {
                continue;
            }
            backups.push(BackupInfo {
                name,
                path: entry.path(),
                size: metadata.len(),
                modified: metadata.modified().ok().map(DateTime::<Local>::from),
            });
        }

        backups.sort_by(|a, b| sort_key(&b.name).cmp(&sort_key(&a.name)));
        Ok(backups)
    }

    /// Delete the oldest backups beyond `max_backups`.
    pub fn prune(&self) -> Result<Vec<PathBuf>> {
        let Some(keep) = self.max_backups else {
            return Ok(Vec::new());
        };

        let mut removed = Vec::new();
        for stale in self.list()?.into_iter().skip(keep) {
            fs::remove_file(&stale.path)?;
            tracing::debug!(backup = %stale.name, "pruned backup");
            removed.push(stale.path);
        }
        Ok(removed)
    }

    /// Find a backup by file name, with or without the extension.
    pub fn find(&self, name: &str) -> Result<BackupInfo> {
        let wanted = if name.ends_with(EXTENSION) {
            name.to_string()
        } else {
            format!("{name}{EXTENSION}")
        };
        self.list()?
            .into_iter()
            .find(|b| b.name == wanted)
            .ok_or_else(|| MindtrackError::BackupNotFound(name.to_string()))
    }

    /// Replace the data file with a backup.
    ///
    /// The backup must parse as a journal. The current data file is backed up
    /// first so a restore can itself be undone. Returns the restored journal.
    pub fn restore(&self, name: &str) -> Result<Journal> {
        let backup = self.find(name)?;
        let contents = fs::read_to_string(&backup.path)?;
        let journal = Journal::from_toml(&contents)?;

        self.backup()?;
        write_atomic(&self.data_file, &contents)?;
        tracing::info!(backup = %backup.name, entries = journal.len(), "restored backup");
        Ok(journal)
    }
}

/// Orders backups by timestamp, then collision counter. `None` for files
/// that are not backups.
fn sort_key(name: &str) -> Option<(String, u32)> {
    let stem = name.strip_prefix(PREFIX)?.strip_suffix(EXTENSION)?;
    let stamp = stem.get(..15)?;
    if chrono::NaiveDateTime::parse_from_str(stamp, STAMP_FORMAT).is_err() {
        return None;
    }
    let counter = match &stem[15..] {
        "" => 0,
        rest => rest.strip_prefix('_')?.parse().ok()?,
    };
    Some((stamp.to_string(), counter))
}
