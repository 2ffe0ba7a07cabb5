//! Application layer - Use cases and orchestration

pub mod backup;
pub mod dashboard;
pub mod entries;
pub mod init;
pub mod manage_config;
pub mod search_entries;
pub mod transfer;

pub use backup::BackupService;
pub use dashboard::DashboardService;
pub use entries::EntryService;
pub use init::InitService;
pub use manage_config::ConfigService;
pub use search_entries::SearchService;
pub use transfer::TransferService;
