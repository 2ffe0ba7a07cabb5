//! Substring search over journal entries

use crate::domain::entry::{normalize_tag, Entry};
use crate::domain::journal::Journal;
use crate::error::{MindtrackError, Result};

/// A parsed search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Case-insensitive substring over title, content, tags and date
    Text(String),
    /// `#tag`: exact tag match
    Tag(String),
}

impl SearchQuery {
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MindtrackError::Validation(
                "Please enter a keyword or date to search".to_string(),
            ));
        }

        if trimmed.starts_with('#') && !trimmed.contains(char::is_whitespace) {
            if let Some(tag) = normalize_tag(trimmed) {
                return Ok(SearchQuery::Tag(tag));
            }
        }

        Ok(SearchQuery::Text(trimmed.to_lowercase()))
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            SearchQuery::Tag(tag) => entry.has_tag(tag),
            SearchQuery::Text(needle) => {
                entry.title.to_lowercase().contains(needle)
                    || entry.content.to_lowercase().contains(needle)
                    || entry.tags.iter().any(|t| t.contains(needle.as_str()))
                    || entry.date.format("%Y-%m-%d").to_string().contains(needle)
            }
        }
    }
}

/// Entries matching `query`, newest first.
pub fn search<'a>(journal: &'a Journal, query: &SearchQuery) -> Vec<&'a Entry> {
    journal
        .list()
        .into_iter()
        .rev()
        .filter(|entry| query.matches(entry))
        .collect()
}
