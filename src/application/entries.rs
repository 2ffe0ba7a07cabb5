//! Entry CRUD use cases

use crate::domain::{Entry, EntryPatch, Journal, ListFilter, NewEntry};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::NaiveDate;

/// Service for adding, editing, deleting and reading entries
pub struct EntryService {
    repository: FileSystemRepository,
}

impl EntryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        EntryService { repository }
    }

    /// Load the journal, apply `change`, back up the previous data file when
    /// configured, then persist.
    ///
    /// Nothing is written when `change` fails.
    pub(crate) fn commit<T, F>(&self, action: &str, change: F) -> Result<T>
    where
        F: FnOnce(&mut Journal) -> Result<T>,
    {
        let config = self.repository.load_config()?;
        let mut journal = self.repository.load_journal()?;

        let outcome = change(&mut journal)?;

        if config.backup_on_write {
            self.repository.backup_manager(&config).backup()?;
        }
        self.repository.save_journal(&journal)?;
        tracing::info!(
            action,
            root = %self.repository.root().display(),
            entries = journal.len(),
            "committed change"
        );
        Ok(outcome)
    }

    pub fn add(&self, new_entry: NewEntry) -> Result<Entry> {
        self.commit("add", |journal| journal.add(new_entry))
    }

    /// Store imported entries with their tags as given; either all are
    /// stored or none.
    pub fn import_many(&self, new_entries: Vec<NewEntry>) -> Result<Vec<Entry>> {
        self.commit("import", |journal| {
            new_entries
                .into_iter()
                .map(|new_entry| journal.import(new_entry))
                .collect()
        })
    }

    pub fn edit(&self, id: u64, patch: EntryPatch) -> Result<Entry> {
        self.commit("edit", |journal| journal.edit(id, patch))
    }

    pub fn delete(&self, id: u64) -> Result<Entry> {
        self.commit("delete", |journal| journal.delete(id))
    }

    /// Remove every entry, returning how many were removed.
    pub fn clear_all(&self) -> Result<usize> {
        self.commit("clear", |journal| Ok(journal.clear_all()))
    }

    pub fn get(&self, id: u64) -> Result<Entry> {
        let journal = self.repository.load_journal()?;
        journal.get(id).cloned()
    }

    /// Entries matching `filter`, newest first.
    pub fn list(&self, filter: &ListFilter) -> Result<Vec<Entry>> {
        let journal = self.repository.load_journal()?;
        Ok(journal.list_filtered(filter)?.into_iter().cloned().collect())
    }

    pub fn on_date(&self, date: NaiveDate) -> Result<Vec<Entry>> {
        let journal = self.repository.load_journal()?;
        Ok(journal.get_by_date(date).into_iter().cloned().collect())
    }

    pub fn tags(&self) -> Result<Vec<(String, usize)>> {
        Ok(self.repository.load_journal()?.tags())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::InitService;
    use crate::domain::Rating;
    use crate::error::MindtrackError;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileSystemRepository, EntryService) {
        let temp = TempDir::new().unwrap();
        InitService::execute(temp.path()).unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        let service = EntryService::new(repo.clone());
        (temp, repo, service)
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn backup_count(repo: &FileSystemRepository) -> usize {
        let config = repo.load_config().unwrap();
        repo.backup_manager(&config).list().unwrap().len()
    }

    #[test]
    fn test_add_persists_entry() {
        let (_temp, repo, service) = setup();
        let entry = service.add(NewEntry::new(date(17), "Persisted")).unwrap();

        let journal = repo.load_journal().unwrap();
        assert_eq!(journal.get(entry.id).unwrap().content, "Persisted");
    }

    #[test]
    fn test_first_add_has_nothing_to_back_up() {
        let (_temp, repo, service) = setup();
        service.add(NewEntry::new(date(17), "first")).unwrap();
        assert_eq!(backup_count(&repo), 0);

        service.add(NewEntry::new(date(18), "second")).unwrap();
        assert_eq!(backup_count(&repo), 1);
    }

    #[test]
    fn test_backup_holds_previous_state() {
        let (_temp, repo, service) = setup();
        let entry = service.add(NewEntry::new(date(17), "keep me")).unwrap();
        service.delete(entry.id).unwrap();

        let config = repo.load_config().unwrap();
        let manager = repo.backup_manager(&config);
        let latest = &manager.list().unwrap()[0];
        let restored = Journal::from_toml(&std::fs::read_to_string(&latest.path).unwrap()).unwrap();
        assert_eq!(restored.get(entry.id).unwrap().content, "keep me");
    }

    #[test]
    fn test_backup_on_write_disabled() {
        let (_temp, repo, service) = setup();
        let mut config = repo.load_config().unwrap();
        config.backup_on_write = false;
        repo.save_config(&config).unwrap();

        service.add(NewEntry::new(date(17), "a")).unwrap();
        service.add(NewEntry::new(date(18), "b")).unwrap();
        assert_eq!(backup_count(&repo), 0);
    }

    #[test]
    fn test_failed_change_writes_nothing() {
        let (_temp, repo, service) = setup();
        service.add(NewEntry::new(date(17), "a")).unwrap();

        let result = service.delete(42);
        assert!(matches!(result, Err(MindtrackError::EntryNotFound(42))));
        assert_eq!(backup_count(&repo), 0);
    }

    #[test]
    fn test_import_many_is_all_or_nothing() {
        let (_temp, repo, service) = setup();
        let result = service.import_many(vec![
            NewEntry::new(date(1), "fine"),
            NewEntry::new(date(2), "  "),
        ]);
        assert!(result.is_err());
        assert!(repo.load_journal().unwrap().is_empty());
    }

    #[test]
    fn test_edit_and_get() {
        let (_temp, _repo, service) = setup();
        let entry = service
            .add(NewEntry::new(date(17), "draft").with_title("Title"))
            .unwrap();

        service
            .edit(
                entry.id,
                EntryPatch {
                    rating: Some(Some(Rating::new(3).unwrap())),
                    ..Default::default()
                },
            )
            .unwrap();

        let stored = service.get(entry.id).unwrap();
        assert_eq!(stored.title, "Title");
        assert_eq!(stored.content, "draft");
        assert_eq!(stored.rating.map(Rating::value), Some(3));
    }

    #[test]
    fn test_clear_all_then_list_is_empty() {
        let (_temp, _repo, service) = setup();
        service.add(NewEntry::new(date(1), "a")).unwrap();
        service.add(NewEntry::new(date(2), "b")).unwrap();

        assert_eq!(service.clear_all().unwrap(), 2);
        assert!(service.list(&ListFilter::default()).unwrap().is_empty());
    }

    #[test]
    fn test_on_date() {
        let (_temp, _repo, service) = setup();
        service.add(NewEntry::new(date(1), "a")).unwrap();
        service.add(NewEntry::new(date(2), "b")).unwrap();

        let entries = service.on_date(date(2)).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].content, "b");
    }
}
