//! CSV export and import use cases

use crate::application::EntryService;
use crate::domain::Entry;
use crate::error::{MindtrackError, Result};
use crate::infrastructure::{csv_io, FileSystemRepository, JournalRepository};
use chrono::{DateTime, Local};
use std::path::Path;

/// Service for moving entries in and out of CSV files
pub struct TransferService {
    repository: FileSystemRepository,
}

impl TransferService {
    pub fn new(repository: FileSystemRepository) -> Self {
        TransferService { repository }
    }

    /// Write every entry, chronologically, to `path`. Returns the row count.
    pub fn export_csv(&self, path: &Path) -> Result<usize> {
        let journal = self.repository.load_journal()?;
        if journal.is_empty() {
            return Err(MindtrackError::EmptyJournal);
        }

        let written = csv_io::write_entries(path, &journal.list())?;
        tracing::info!(path = %path.display(), rows = written, "exported csv");
        Ok(written)
    }

    /// Append the rows of `path` as new entries.
    pub fn import_csv(&self, path: &Path) -> Result<Vec<Entry>> {
        let new_entries = csv_io::read_entries(path)?;
        if new_entries.is_empty() {
            return Ok(Vec::new());
        }

        let added = EntryService::new(self.repository.clone()).import_many(new_entries)?;
        tracing::info!(path = %path.display(), rows = added.len(), "imported csv");
        Ok(added)
    }

    /// File name used when no export path is given.
    pub fn default_export_filename(now: DateTime<Local>) -> String {
        format!("mindtrack_export_{}.csv", now.format("%Y%m%d_%H%M%S"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::InitService;
    use crate::domain::{EntryPatch, ListFilter, NewEntry, Rating};
    use chrono::{NaiveDate, TimeZone};
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        InitService::execute(temp.path()).unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        (temp, repo)
    }

    #[test]
    fn test_export_empty_journal_fails() {
        let (temp, repo) = setup();
        let result = TransferService::new(repo).export_csv(&temp.path().join("out.csv"));
        assert!(matches!(result, Err(MindtrackError::EmptyJournal)));
        assert!(!temp.path().join("out.csv").exists());
    }

    #[test]
    fn test_export_then_import_round_trips_into_fresh_journal() {
        let (source_dir, source) = setup();
        let entries = EntryService::new(source.clone());
        entries
            .add(
                NewEntry::new(NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(), "Wrote tests")
                    .with_title("Testing")
                    .with_tags(["rust"])
                    .with_rating(Some(Rating::new(5).unwrap())),
            )
            .unwrap();
        entries
            .add(NewEntry::new(NaiveDate::from_ymd_opt(2025, 1, 18).unwrap(), "Rested"))
            .unwrap();

        let csv_path = source_dir.path().join("export.csv");
        assert_eq!(TransferService::new(source.clone()).export_csv(&csv_path).unwrap(), 2);

        let (_target_dir, target) = setup();
        let imported = TransferService::new(target.clone()).import_csv(&csv_path).unwrap();
        assert_eq!(imported.len(), 2);

        let before = entries.list(&ListFilter::default()).unwrap();
        let after = EntryService::new(target).list(&ListFilter::default()).unwrap();
        for (a, b) in before.iter().zip(&after) {
            assert_eq!(a.date, b.date);
            assert_eq!(a.title, b.title);
            assert_eq!(a.content, b.content);
            assert_eq!(a.tags, b.tags);
            assert_eq!(a.rating, b.rating);
        }
    }

    #[test]
    fn test_cleared_tags_stay_cleared_through_export_and_import() {
        let (source_dir, source) = setup();
        let entries = EntryService::new(source.clone());
        let entry = entries
            .add(NewEntry::new(NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(), "learned #rust"))
            .unwrap();
        let edited = entries
            .edit(
                entry.id,
                EntryPatch {
                    tags: Some(Default::default()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(edited.tags.is_empty());

        let csv_path = source_dir.path().join("export.csv");
        TransferService::new(source).export_csv(&csv_path).unwrap();

        let (_target_dir, target) = setup();
        let imported = TransferService::new(target).import_csv(&csv_path).unwrap();
        assert_eq!(imported[0].content, "learned #rust");
        assert!(imported[0].tags.is_empty());
    }

    #[test]
    fn test_import_assigns_fresh_ids() {
        let (temp, repo) = setup();
        let entries = EntryService::new(repo.clone());
        entries
            .add(NewEntry::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), "existing"))
            .unwrap();

        let csv_path = temp.path().join("in.csv");
        std::fs::write(&csv_path, "id,date,content\n1,2025-02-01,imported\n").unwrap();

        let imported = TransferService::new(repo).import_csv(&csv_path).unwrap();
        assert_eq!(imported[0].id, 2);
        assert_eq!(entries.list(&ListFilter::default()).unwrap().len(), 2);
    }

    #[test]
    fn test_default_export_filename() {
        let now = Local.with_ymd_and_hms(2025, 1, 17, 9, 5, 3).unwrap();
        assert_eq!(
            TransferService::default_export_filename(now),
            "mindtrack_export_20250117_090503.csv"
        );
    }
}
