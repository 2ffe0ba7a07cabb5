//! Dashboard statistics

use crate::domain::entry::Entry;
use crate::domain::journal::Journal;

/// Summary shown on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total: usize,
    /// Mean over rated entries, rounded to two decimals
    pub average_rating: Option<f64>,
    /// Newest entries first
    pub recent: Vec<Entry>,
}

impl Statistics {
    pub fn compute(journal: &Journal, recent_count: usize) -> Self {
        let entries = journal.list();

        let ratings: Vec<f64> = entries
            .iter()
            .filter_map(|e| e.rating)
            .map(|r| f64::from(r.value()))
            .collect();
        let average_rating = if ratings.is_empty() {
            None
        } else {
            let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
            Some((mean * 100.0).round() / 100.0)
        };

        let recent = entries
            .iter()
            .rev()
            .take(recent_count)
            .map(|e| (*e).clone())
            .collect();

        Statistics {
            total: entries.len(),
            average_rating,
            recent,
        }
    }
}
