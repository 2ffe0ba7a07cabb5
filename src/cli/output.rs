//! Output formatting utilities

use crate::domain::{Entry, MonthView, Statistics};
use crate::infrastructure::{BackupInfo, Config};
use chrono::{Datelike, Local};

const SEPARATOR_WIDTH: usize = 50;
const TITLE_WIDTH: usize = 40;

fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let cut: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", cut)
}

fn format_tags(entry: &Entry) -> String {
    entry
        .tags
        .iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per entry: id, date, title, rating and tags
pub fn format_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let mut line = format!(
            "{:>4}  {}  {}",
            entry.id,
            entry.date.format("%Y-%m-%d"),
            truncate(entry.display_title(), TITLE_WIDTH)
        );
        if let Some(rating) = entry.rating {
            line.push_str(&format!("  [{}]", rating));
        }
        if !entry.tags.is_empty() {
            line.push_str(&format!("  {}", format_tags(entry)));
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}

/// Full entry with header, body and footer lines
pub fn format_entry_detail(entry: &Entry) -> String {
    let mut output = format!(
        "#{}  {}  (written {})\n",
        entry.id,
        entry.date.format("%Y-%m-%d"),
        entry
            .created
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
    );
    if !entry.title.is_empty() {
        output.push_str(&format!("{}\n", entry.title));
    }
    output.push('\n');
    output.push_str(&entry.content);
    output.push('\n');

    if entry.rating.is_some() || !entry.tags.is_empty() || entry.updated.is_some() {
        output.push('\n');
    }
    if let Some(rating) = entry.rating {
        output.push_str(&format!("Productivity Rating: {}\n", rating));
    }
    if !entry.tags.is_empty() {
        output.push_str(&format!("Tags: {}\n", format_tags(entry)));
    }
    if let Some(updated) = entry.updated {
        output.push_str(&format!(
            "Edited: {}\n",
            updated.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        ));
    }
    output
}

/// Several full entries divided by separator lines
pub fn format_entry_blocks(entries: &[Entry], empty_message: &str) -> String {
    if entries.is_empty() {
        return empty_message.to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format_entry_detail(entry));
        output.push_str(&separator());
        output.push('\n');
    }
    output
}

pub fn format_statistics(stats: &Statistics) -> String {
    let mut output = format!("Total entries : {}\n", stats.total);
    match stats.average_rating {
        Some(avg) => output.push_str(&format!("Average rating : {:.2}\n", avg)),
        None => output.push_str("Average rating : -\n"),
    }
    output.push_str("\nRecent entries\n");
    output.push_str(&separator());
    output.push('\n');
    if stats.recent.is_empty() {
        output.push_str("No entries yet. Add your first entry with 'mindtrack add'.\n");
    } else {
        output.push_str(&format_entry_list(&stats.recent));
    }
    output
}

/// Month grid; days with entries carry a `*`
pub fn format_calendar(view: &MonthView) -> String {
    let mut output = format!("{} {}\n", view.month_name(), view.year);
    output.push_str("Mo  Tu  We  Th  Fr  Sa  Su\n");

    for week in &view.weeks {
        let cells: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                None => "   ".to_string(),
                Some(day) => {
                    let marker = if day.has_entries() { "*" } else { " " };
                    format!("{:>2}{}", day.date.day(), marker)
                }
            })
            .collect();
        output.push_str(cells.join(" ").trim_end());
        output.push('\n');
    }
    output
}

/// Tags with counts, one per line
pub fn format_tag_list(tags: &[(String, usize)]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for (tag, count) in tags {
        output.push_str(&format!("#{} ({})\n", tag, count));
    }
    output
}

pub fn format_backup_list(backups: &[BackupInfo]) -> String {
    if backups.is_empty() {
        return "No backups found".to_string();
    }

    let mut output = String::new();
    for backup in backups {
        output.push_str(&format!("{}  {} bytes\n", backup.name, backup.size));
    }
    output
}

pub fn format_config(config: &Config) -> String {
    format!(
        "created = {}\nbackup_on_write = {}\nmax_backups = {}\nrecent_count = {}\n",
        config.created.to_rfc3339(),
        config.backup_on_write,
        config
            .max_backups
            .map_or_else(|| "none".to_string(), |n| n.to_string()),
        config.recent_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Journal, NewEntry, Rating};
    use chrono::NaiveDate;

    fn entry(id_day: u32, title: &str, rating: Option<u8>, tags: &[&str]) -> Entry {
        let mut journal = Journal::new();
        journal
            .add(
                NewEntry::new(NaiveDate::from_ymd_opt(2025, 1, id_day).unwrap(), "Body text")
                    .with_title(title)
                    .with_tags(tags)
                    .with_rating(rating.map(|r| Rating::new(r).unwrap())),
            )
            .unwrap()
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_entry_list(&[]), "No entries found");
    }

    #[test]
    fn test_format_entry_list_line() {
        let output = format_entry_list(&[entry(17, "Parser day", Some(4), &["rust"])]);
        assert_eq!(output, "   1  2025-01-17  Parser day  [4/5]  #rust\n");
    }

    #[test]
    fn test_format_entry_list_untitled_uses_content() {
        let output = format_entry_list(&[entry(17, "", None, &[])]);
        assert_eq!(output, "   1  2025-01-17  Body text\n");
    }

    #[test]
    fn test_truncate_long_titles() {
        let long = "x".repeat(60);
        let cut = truncate(&long, 10);
        assert_eq!(cut, "xxxxxxx...");
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_format_entry_detail() {
        let output = format_entry_detail(&entry(17, "Title", Some(5), &["a", "b"]));
        assert!(output.starts_with("#1  2025-01-17"));
        assert!(output.contains("Title\n\nBody text\n"));
        assert!(output.contains("Productivity Rating: 5/5"));
        assert!(output.contains("Tags: #a #b"));
    }

    #[test]
    fn test_format_statistics() {
        let stats = Statistics {
            total: 2,
            average_rating: Some(4.5),
            recent: vec![entry(17, "Recent", None, &[])],
        };
        let output = format_statistics(&stats);
        assert!(output.contains("Total entries : 2"));
        assert!(output.contains("Average rating : 4.50"));
        assert!(output.contains("Recent"));
    }

    #[test]
    fn test_format_calendar_marks_days() {
        let mut journal = Journal::new();
        journal
            .add(NewEntry::new(NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(), "x"))
            .unwrap();
        let view = MonthView::build(2025, 1, &journal).unwrap();

        let output = format_calendar(&view);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "January 2025");
        assert_eq!(lines[2], "         1   2   3   4   5");
        assert!(lines[3].starts_with(" 6   7"));
        assert!(output.contains("17*"));
        assert!(!output.contains("16*"));
    }

    #[test]
    fn test_format_tag_list() {
        let tags = vec![("rust".to_string(), 2), ("work".to_string(), 1)];
        assert_eq!(format_tag_list(&tags), "#rust (2)\n#work (1)\n");
        assert_eq!(format_tag_list(&[]), "No tags found");
    }
}
