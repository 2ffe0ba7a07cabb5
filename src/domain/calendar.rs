//! Calendar month view

use crate::domain::journal::Journal;
use crate::error::{MindtrackError, Result};
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// A day cell in the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub entry_count: usize,
}

impl CalendarDay {
    pub fn has_entries(&self) -> bool {
        self.entry_count > 0
    }
}

/// One month laid out in Monday-first weeks. `None` cells pad the first
/// and last week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<[Option<CalendarDay>; 7]>,
}

impl MonthView {
    pub fn build(year: i32, month: u32, journal: &Journal) -> Result<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            MindtrackError::Validation(format!("Invalid month: {}-{:02}", year, month))
        })?;

        let mut counts: HashMap<NaiveDate, usize> = HashMap::new();
        for entry in journal.list() {
            if entry.date.year() == year && entry.date.month() == month {
                *counts.entry(entry.date).or_default() += 1;
            }
        }

        let mut weeks = Vec::new();
        let mut week: [Option<CalendarDay>; 7] = [None; 7];
        let mut slot = first.weekday().num_days_from_monday() as usize;

        for date in first.iter_days().take_while(|d| d.month() == month) {
            week[slot] = Some(CalendarDay {
                date,
                entry_count: counts.get(&date).copied().unwrap_or(0),
            });
            slot += 1;
            if slot == 7 {
                weeks.push(week);
                week = [None; 7];
                slot = 0;
            }
        }
        if slot > 0 {
            weeks.push(week);
        }

        Ok(MonthView { year, month, weeks })
    }

    /// Parse `YYYY-MM` into a year and month the calendar can show.
    pub fn parse_month(input: &str) -> Result<(i32, u32)> {
        let invalid = || {
            MindtrackError::Validation(format!("Invalid month '{}': expected YYYY-MM", input))
        };
        let (year, month) = input.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        Ok((year, month))
    }

    pub fn previous(year: i32, month: u32) -> Result<(i32, u32)> {
        let shifted = if month == 1 {
            year.checked_sub(1).map(|y| (y, 12))
        } else {
            Some((year, month - 1))
        };
        shifted.ok_or_else(|| out_of_range(year, month))
    }

    pub fn next(year: i32, month: u32) -> Result<(i32, u32)> {
        let shifted = if month == 12 {
            year.checked_add(1).map(|y| (y, 1))
        } else {
            Some((year, month + 1))
        };
        shifted.ok_or_else(|| out_of_range(year, month))
    }

    pub fn month_name(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B").to_string())
            .unwrap_or_default()
    }

    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flat_map(|w| w.iter().flatten())
    }
}

fn out_of_range(year: i32, month: u32) -> MindtrackError {
    MindtrackError::Validation(format!("No month next to {}-{:02}", year, month))
}
