//! Date arguments: relative words or ISO dates

use crate::error::{MindtrackError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A date as typed by the user, resolved against a base date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRef {
    Today,
    Yesterday,
    Tomorrow,
    /// Most recent occurrence, today included
    Weekday(Weekday),
    /// Strictly before the base date
    LastWeekday(Weekday),
    /// Strictly after the base date
    NextWeekday(Weekday),
    Exact(NaiveDate),
}

impl DateRef {
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        let invalid = || MindtrackError::InvalidDate(input.to_string());

        match normalized.as_str() {
            "today" | "now" => return Ok(DateRef::Today),
            "yesterday" => return Ok(DateRef::Yesterday),
            "tomorrow" => return Ok(DateRef::Tomorrow),
            _ => {}
        }

        if let Some(day) = normalized.strip_prefix("last ") {
            return parse_weekday(day).map(DateRef::LastWeekday).ok_or_else(invalid);
        }
        if let Some(day) = normalized.strip_prefix("next ") {
            return parse_weekday(day).map(DateRef::NextWeekday).ok_or_else(invalid);
        }
        if let Some(weekday) = parse_weekday(&normalized) {
            return Ok(DateRef::Weekday(weekday));
        }

        NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
            .map(DateRef::Exact)
            .map_err(|_| invalid())
    }

    pub fn resolve(&self, base: NaiveDate) -> NaiveDate {
        let from_monday = |d: Weekday| i64::from(d.num_days_from_monday());
        match *self {
            DateRef::Today => base,
            DateRef::Yesterday => base - Duration::days(1),
            DateRef::Tomorrow => base + Duration::days(1),
            DateRef::Weekday(target) => {
                let back = (from_monday(base.weekday()) - from_monday(target)).rem_euclid(7);
                base - Duration::days(back)
            }
            DateRef::LastWeekday(target) => {
                let back = (from_monday(base.weekday()) - from_monday(target)).rem_euclid(7);
                base - Duration::days(if back == 0 { 7 } else { back })
            }
            DateRef::NextWeekday(target) => {
                let ahead = (from_monday(target) - from_monday(base.weekday())).rem_euclid(7);
                base + Duration::days(if ahead == 0 { 7 } else { ahead })
            }
            DateRef::Exact(date) => date,
        }
    }
}

/// Full weekday names only, so "mon" stays free for other meanings.
fn parse_weekday(name: &str) -> Option<Weekday> {
    let weekday = match name.trim() {
        "monday" => Weekday::Mon,
        "tuesday" => Weekday::Tue,
        "wednesday" => Weekday::Wed,
        "thursday" => Weekday::Thu,
        "friday" => Weekday::Fri,
        "saturday" => Weekday::Sat,
        "sunday" => Weekday::Sun,
        _ => return None,
    };
    Some(weekday)
}

/// Parse and resolve against the local current date.
pub fn resolve_date(input: &str) -> Result<NaiveDate> {
    Ok(DateRef::parse(input)?.resolve(chrono::Local::now().date_naive()))
}
