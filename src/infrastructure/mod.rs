//! Infrastructure layer - External I/O and persistence

pub mod backup;
pub mod config;
pub mod csv_io;
pub mod repository;

pub use backup::{BackupInfo, BackupManager};
pub use config::Config;
pub use repository::{FileSystemRepository, JournalRepository};
