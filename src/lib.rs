//! mindtrack - Terminal learning journal
//!
//! Dated journal entries with titles, tags and productivity ratings, stored
//! in a local TOML file. Supports search, CSV export and import, timestamped
//! backups, a statistics dashboard and a calendar month view.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::MindtrackError;
