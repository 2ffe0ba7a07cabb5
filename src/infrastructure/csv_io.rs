//! CSV export and import of entries

use crate::domain::entry::{extract_hashtags, validate_content, Entry, NewEntry, Rating};
use crate::error::{MindtrackError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use csv::StringRecord;
use serde::Serialize;
use std::path::Path;

const TAG_SEPARATOR: &str = ";";

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: u64,
    date: String,
    created: String,
    title: &'a str,
    content: &'a str,
    tags: String,
    rating: Option<u8>,
}

impl<'a> From<&'a Entry> for CsvRow<'a> {
    fn from(entry: &'a Entry) -> Self {
        CsvRow {
            id: entry.id,
            date: entry.date.format("%Y-%m-%d").to_string(),
            created: entry.created.to_rfc3339(),
            title: &entry.title,
            content: &entry.content,
            tags: entry
                .tags
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(TAG_SEPARATOR),
            rating: entry.rating.map(Rating::value),
        }
    }
}

/// Write entries with header `id,date,created,title,content,tags,rating`.
pub fn write_entries(path: &Path, entries: &[&Entry]) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)?;
    for entry in entries {
        wtr.serialize(CsvRow::from(*entry))?;
    }
    wtr.flush()?;
    Ok(entries.len())
}

/// Column positions resolved from the header row
#[derive(Debug)]
struct Columns {
    date: usize,
    content: usize,
    title: Option<usize>,
    tags: Option<usize>,
    rating: Option<usize>,
    created: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.contains(&h.trim().to_lowercase().as_str()))
        };

        let date = find(&["date", "timestamp"]).ok_or_else(|| {
            MindtrackError::Validation("CSV is missing a 'date' column".to_string())
        })?;
        let content = find(&["content", "entry"]).ok_or_else(|| {
            MindtrackError::Validation("CSV is missing a 'content' column".to_string())
        })?;

        Ok(Columns {
            date,
            content,
            title: find(&["title"]),
            tags: find(&["tags"]),
            rating: find(&["rating"]),
            created: find(&["created"]),
        })
    }
}

/// Read entries from a CSV file. Header names are matched
/// case-insensitively; `Timestamp`/`Entry` are accepted for `date`/`content`.
///
/// The first invalid row fails the whole read.
pub fn read_entries(path: &Path) -> Result<Vec<NewEntry>> {
    let mut reader = csv::Reader::from_path(path)?;
    let columns = Columns::from_headers(reader.headers()?)?;

    let mut entries = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        // Header is line 1
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 2);
        let entry = parse_row(&record, &columns)
            .map_err(|e| MindtrackError::Validation(format!("CSV line {}: {}", line, e)))?;
        entries.push(entry);
    }
    Ok(entries)
}

fn parse_row(record: &StringRecord, columns: &Columns) -> Result<NewEntry> {
    let field = |index: Option<usize>| {
        index
            .and_then(|i| record.get(i))
            .map(str::trim)
            .unwrap_or("")
    };

    let date = parse_date_prefix(field(Some(columns.date)))?;
    let content = record.get(columns.content).unwrap_or("").to_string();
    validate_content(&content)?;

    let rating = match field(columns.rating) {
        "" => None,
        value => Some(value.parse::<Rating>()?),
    };

    let created = match field(columns.created) {
        "" => None,
        value => DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
    };

    // Files without a tags column only carry inline hashtags
    let tags = match columns.tags {
        Some(_) => field(columns.tags)
            .split(TAG_SEPARATOR)
            .map(str::to_string)
            .collect(),
        None => extract_hashtags(&content).into_iter().collect::<Vec<_>>(),
    };

    let mut entry = NewEntry::new(date, content)
        .with_title(field(columns.title))
        .with_tags(tags)
        .with_rating(rating);
    entry.created = created;
    Ok(entry)
}

/// Dates may carry a time after the `YYYY-MM-DD` part.
fn parse_date_prefix(value: &str) -> Result<NaiveDate> {
    let prefix = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d")
        .map_err(|_| MindtrackError::InvalidDate(value.to_string()))
}
