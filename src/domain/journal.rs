//! Journal aggregate root: the in-memory entry store

use crate::domain::entry::{
    extract_hashtags, normalize_tag, normalize_tags, validate_content, Entry, EntryPatch,
    NewEntry,
};
use crate::error::{MindtrackError, Result};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Collection of entries plus the id counter.
///
/// Ids are handed out from `next_id` and never reused, even after
/// `delete` or `clear_all`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    #[serde(default = "first_id")]
    next_id: u64,
    #[serde(default)]
    entries: Vec<Entry>,
}

fn first_id() -> u64 {
    1
}

impl Default for Journal {
    fn default() -> Self {
        Journal {
            next_id: first_id(),
            entries: Vec::new(),
        }
    }
}

/// Filters for listing entries
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub tag: Option<String>,
    pub limit: Option<usize>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a journal from its TOML data file contents.
    pub fn from_toml(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Journal::new());
        }
        let mut journal: Journal = toml::from_str(contents)?;
        journal.check_integrity()?;
        Ok(journal)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn check_integrity(&mut self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.id) {
                return Err(MindtrackError::CorruptData(format!(
                    "duplicate entry id {}",
                    entry.id
                )));
            }
        }

        let max_id = self.entries.iter().map(|e| e.id).max().unwrap_or(0);
        if self.next_id <= max_id {
            tracing::warn!(
                next_id = self.next_id,
                max_id,
                "repairing entry id counter"
            );
            self.next_id = max_id + 1;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Store a new entry and return it with its assigned id. Inline
    /// `#hashtags` in the content join the tag set.
    pub fn add(&mut self, new_entry: NewEntry) -> Result<Entry> {
        let hashtags = extract_hashtags(&new_entry.content);
        self.insert(new_entry, hashtags)
    }

    /// Store an entry with exactly the tags it carries, as read back from an
    /// export. Content hashtags are not added.
    pub fn import(&mut self, new_entry: NewEntry) -> Result<Entry> {
        self.insert(new_entry, BTreeSet::new())
    }

    fn insert(&mut self, new_entry: NewEntry, extra_tags: BTreeSet<String>) -> Result<Entry> {
        validate_content(&new_entry.content)?;

        let mut tags = new_entry.tags;
        tags.extend(extra_tags);

        let entry = Entry {
            id: self.next_id,
            date: new_entry.date,
            created: new_entry.created.unwrap_or_else(Utc::now),
            updated: None,
            title: new_entry.title.trim().to_string(),
            content: new_entry.content.trim_end().to_string(),
            tags,
            rating: new_entry.rating,
        };

        self.next_id += 1;
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Apply the fields present in `patch`; id and creation time stay.
    pub fn edit(&mut self, id: u64, patch: EntryPatch) -> Result<Entry> {
        if patch.is_empty() {
            return Err(MindtrackError::Validation(
                "Nothing to change: provide at least one field to edit".to_string(),
            ));
        }
        if let Some(content) = &patch.content {
            validate_content(content)?;
        }

        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(MindtrackError::EntryNotFound(id))?;

        if let Some(title) = patch.title {
            entry.title = title.trim().to_string();
        }
        if let Some(date) = patch.date {
            entry.date = date;
        }
        // Content hashtags merge after any tag replacement
        if let Some(tags) = patch.tags {
            entry.tags = normalize_tags(tags);
        }
        if let Some(content) = patch.content {
            entry.tags.extend(extract_hashtags(&content));
            entry.content = content.trim_end().to_string();
        }
        if let Some(rating) = patch.rating {
            entry.rating = rating;
        }
        entry.updated = Some(Utc::now());

        Ok(entry.clone())
    }

    pub fn delete(&mut self, id: u64) -> Result<Entry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(MindtrackError::EntryNotFound(id))?;
        Ok(self.entries.remove(index))
    }

    /// Remove every entry, returning how many were removed.
    pub fn clear_all(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    pub fn get(&self, id: u64) -> Result<&Entry> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .ok_or(MindtrackError::EntryNotFound(id))
    }

    /// All entries in chronological order (date, creation time, id).
    pub fn list(&self) -> Vec<&Entry> {
        let mut entries: Vec<&Entry> = self.entries.iter().collect();
        entries.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then(a.created.cmp(&b.created))
                .then(a.id.cmp(&b.id))
        });
        entries
    }

    /// Entries written for `date`, chronological.
    pub fn get_by_date(&self, date: NaiveDate) -> Vec<&Entry> {
        self.list().into_iter().filter(|e| e.date == date).collect()
    }

    /// Entries matching the filter, newest first, truncated to the limit.
    ///
    /// A tag filter that is blank after normalization is rejected.
    pub fn list_filtered(&self, filter: &ListFilter) -> Result<Vec<&Entry>> {
        let tag = match filter.tag.as_deref() {
            Some(raw) => Some(normalize_tag(raw).ok_or_else(|| {
                MindtrackError::Validation(format!("Invalid tag filter: '{}'", raw))
            })?),
            None => None,
        };

        let mut entries: Vec<&Entry> = self
            .list()
            .into_iter()
            .rev()
            .filter(|e| filter.from.map_or(true, |from| e.date >= from))
            .filter(|e| filter.to.map_or(true, |to| e.date <= to))
            .filter(|e| tag.as_deref().map_or(true, |t| e.has_tag(t)))
            .collect();

        if let Some(n) = filter.limit {
            entries.truncate(n);
        }
        Ok(entries)
    }

    /// Tags in use with the number of entries carrying each, sorted by tag.
    pub fn tags(&self) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for entry in &self.entries {
            for tag in &entry.tags {
                *counts.entry(tag.as_str()).or_default() += 1;
            }
        }
        counts
            .into_iter()
            .map(|(tag, count)| (tag.to_string(), count))
            .collect()
    }
}
