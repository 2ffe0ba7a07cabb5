//! Search use case

use crate::domain::search::search;
use crate::domain::{Entry, SearchQuery};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};

/// Service for searching entry text
pub struct SearchService {
    repository: FileSystemRepository,
}

impl SearchService {
    pub fn new(repository: FileSystemRepository) -> Self {
        SearchService { repository }
    }

    /// Entries matching `query`, newest first.
    pub fn execute(&self, query: &str) -> Result<Vec<Entry>> {
        let query = SearchQuery::parse(query)?;
        let journal = self.repository.load_journal()?;
        let matches: Vec<Entry> = search(&journal, &query).into_iter().cloned().collect();
        tracing::debug!(?query, matches = matches.len(), "search");
        Ok(matches)
    }
}
