//! Journal entry model

use crate::error::{MindtrackError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Productivity rating from 1 to 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(MindtrackError::InvalidRating(value.to_string()))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = MindtrackError;

    fn try_from(value: u8) -> Result<Self> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

impl FromStr for Rating {
    type Err = MindtrackError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        // "4/5" is how ratings were written out historically
        let digits = trimmed.strip_suffix("/5").unwrap_or(trimmed);
        digits
            .parse::<u8>()
            .map_err(|_| MindtrackError::InvalidRating(s.to_string()))
            .and_then(Rating::new)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

/// A single journal record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: u64,
    pub date: NaiveDate,
    pub created: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Entry {
    /// Title for display; falls back to the first line of content.
    pub fn display_title(&self) -> &str {
        if !self.title.trim().is_empty() {
            return self.title.trim();
        }
        self.content.lines().next().unwrap_or("").trim()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// Fields for an entry that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
    pub tags: BTreeSet<String>,
    pub rating: Option<Rating>,
    /// Creation time to keep (imports); `None` stamps the current time.
    pub created: Option<DateTime<Utc>>,
}

impl NewEntry {
    pub fn new(date: NaiveDate, content: impl Into<String>) -> Self {
        NewEntry {
            date,
            title: String::new(),
            content: content.into(),
            tags: BTreeSet::new(),
            rating: None,
            created: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = normalize_tags(tags);
        self
    }

    pub fn with_rating(mut self, rating: Option<Rating>) -> Self {
        self.rating = rating;
        self
    }
}

/// Partial update for an existing entry. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub date: Option<NaiveDate>,
    pub tags: Option<BTreeSet<String>>,
    /// `Some(None)` clears the rating.
    pub rating: Option<Option<Rating>>,
}

impl EntryPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.date.is_none()
            && self.tags.is_none()
            && self.rating.is_none()
    }
}

fn hashtag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?:^|\s)#([a-zA-Z0-9_-]+)").unwrap())
}

/// Collect `#tags` written inline in entry text, lowercased.
pub fn extract_hashtags(text: &str) -> BTreeSet<String> {
    hashtag_regex()
        .captures_iter(text)
        .map(|captures| captures[1].to_lowercase())
        .collect()
}

/// Normalize a tag: trim, drop a leading `#`, lowercase. Blank tags yield `None`.
pub fn normalize_tag(tag: &str) -> Option<String> {
    let tag = tag.trim();
    let tag = tag.strip_prefix('#').unwrap_or(tag).trim();
    if tag.is_empty() {
        None
    } else {
        Some(tag.to_lowercase())
    }
}

pub fn normalize_tags<I, S>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .filter_map(|t| normalize_tag(t.as_ref()))
        .collect()
}

/// Entry content must carry some text.
pub fn validate_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(MindtrackError::Validation(
            "Entry content cannot be empty".to_string(),
        ));
    }
    Ok(())
}
