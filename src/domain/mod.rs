//! Domain layer - Entries, the journal store and queries over it

pub mod calendar;
pub mod date_ref;
pub mod entry;
pub mod journal;
pub mod search;
pub mod stats;

pub use calendar::{CalendarDay, MonthView};
pub use date_ref::{resolve_date, DateRef};
pub use entry::{Entry, EntryPatch, NewEntry, Rating};
pub use journal::{Journal, ListFilter};
pub use search::SearchQuery;
pub use stats::Statistics;
