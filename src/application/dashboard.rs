//! Dashboard and calendar use cases

use crate::domain::{MonthView, Statistics};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};

/// Service for read-only overviews of the journal
pub struct DashboardService {
    repository: FileSystemRepository,
}

impl DashboardService {
    pub fn new(repository: FileSystemRepository) -> Self {
        DashboardService { repository }
    }

    /// Totals, average rating and the most recent entries.
    pub fn statistics(&self) -> Result<Statistics> {
        let config = self.repository.load_config()?;
        let journal = self.repository.load_journal()?;
        Ok(Statistics::compute(&journal, config.recent_count))
    }

    /// Month grid with days that have entries marked.
    pub fn calendar(&self, year: i32, month: u32) -> Result<MonthView> {
        let journal = self.repository.load_journal()?;
        MonthView::build(year, month, &journal)
    }
}
