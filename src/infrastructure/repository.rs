//! File system repository

use crate::domain::Journal;
use crate::error::{MindtrackError, Result};
use crate::infrastructure::config::JOURNAL_DIR;
use crate::infrastructure::{BackupManager, Config};
use std::fs;
use std::path::{Path, PathBuf};

const DATA_FILE: &str = "journal.toml";
const BACKUP_DIR: &str = "backups";

/// Environment variable pointing at a journal root
pub const ROOT_ENV: &str = "MINDTRACK_ROOT";

/// Abstract repository for journal storage
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .mindtrack/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .mindtrack/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .mindtrack directory exists
    fn is_initialized(&self) -> bool;

    /// Create .mindtrack directory structure
    fn initialize(&self) -> Result<()>;

    /// Load all entries; a missing data file is an empty journal
    fn load_journal(&self) -> Result<Journal>;

    /// Persist all entries, replacing the data file
    fn save_journal(&self, journal: &Journal) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root: MINDTRACK_ROOT first, then walk up from the
    /// current directory
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_journal_dir(&path) {
                tracing::debug!(root = %path.display(), "journal root from {}", ROOT_ENV);
                return Ok(FileSystemRepository::new(path));
            }
            return Err(MindtrackError::Config(format!(
                "{} is set to '{}' but no {} directory found. \
                Run 'mindtrack init' in that directory or unset {}.",
                ROOT_ENV,
                path.display(),
                JOURNAL_DIR,
                ROOT_ENV
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let found = start
            .ancestors()
            .find(|dir| Self::has_journal_dir(dir))
            .ok_or_else(|| MindtrackError::NotJournalDirectory(start.to_path_buf()))?;

        tracing::debug!(root = %found.display(), "discovered journal root");
        Ok(FileSystemRepository::new(found.to_path_buf()))
    }

    fn has_journal_dir(path: &Path) -> bool {
        path.join(JOURNAL_DIR).is_dir()
    }

    /// Path of the TOML data file
    pub fn data_path(&self) -> PathBuf {
        self.root.join(JOURNAL_DIR).join(DATA_FILE)
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.root.join(JOURNAL_DIR).join(BACKUP_DIR)
    }

    /// Backup manager for this journal's data file
    pub fn backup_manager(&self, config: &Config) -> BackupManager {
        BackupManager::new(self.data_path(), self.backup_dir()).with_max_backups(config.max_backups)
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_journal_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(MindtrackError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(self.root.join(JOURNAL_DIR))?;
        Ok(())
    }

    fn load_journal(&self) -> Result<Journal> {
        let path = self.data_path();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no data file yet");
                return Ok(Journal::new());
            }
            Err(e) => return Err(MindtrackError::Io(e)),
        };

        let journal = Journal::from_toml(&contents)?;
        tracing::debug!(entries = journal.len(), "loaded journal");
        Ok(journal)
    }

    fn save_journal(&self, journal: &Journal) -> Result<()> {
        write_atomic(&self.data_path(), &journal.to_toml()?)?;
        tracing::debug!(entries = journal.len(), "saved journal");
        Ok(())
    }
}

/// Write through a temp file in the same directory, then rename into place,
/// so readers never observe a half-written file.
///
/// On Windows, `rename` does not overwrite existing files, so the destination
/// is removed first.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_name = format!(
        "{}.tmp-{}",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(DATA_FILE),
        std::process::id()
    );
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, contents)?;

    #[cfg(windows)]
    {
        if path.exists() {
            fs::remove_file(path)?;
        }
    }

    fs::rename(&tmp_path, path)?;
    Ok(())
}
