use chrono::{Datelike, Local};
use clap::Parser;
use mindtrack::application::{
    BackupService, ConfigService, DashboardService, EntryService, InitService, SearchService,
    TransferService,
};
use mindtrack::cli::{output, BackupAction, Cli, Commands};
use mindtrack::domain::entry::normalize_tags;
use mindtrack::domain::{resolve_date, EntryPatch, ListFilter, MonthView, NewEntry, Rating};
use mindtrack::error::{MindtrackError, Result};
use mindtrack::infrastructure::FileSystemRepository;
use mindtrack::logging;
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn parse_rating(value: Option<String>) -> Result<Option<Rating>> {
    value.map(|r| r.parse::<Rating>()).transpose()
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        println!("mindtrack - Terminal learning journal");
        println!("Use --help for usage information");
        return Ok(());
    };

    // Everything except init works on an existing journal
    let repo = FileSystemRepository::discover;

    match command {
        Commands::Init { path } => {
            InitService::execute(&path)?;
            println!("Initialized mindtrack journal at {}", path.display());
            Ok(())
        }
        Commands::Add {
            content,
            title,
            date,
            tags,
            rating,
        } => {
            let new_entry = NewEntry::new(resolve_date(&date)?, content)
                .with_title(title.unwrap_or_default())
                .with_tags(tags)
                .with_rating(parse_rating(rating)?);
            let entry = EntryService::new(repo()?).add(new_entry)?;
            println!("Added entry #{} for {}", entry.id, entry.date);
            Ok(())
        }
        Commands::Edit {
            id,
            title,
            content,
            date,
            tags,
            clear_tags,
            rating,
            clear_rating,
        } => {
            let patch = EntryPatch {
                title,
                content,
                date: date.as_deref().map(resolve_date).transpose()?,
                tags: if clear_tags {
                    Some(Default::default())
                } else if tags.is_empty() {
                    None
                } else {
                    Some(normalize_tags(tags))
                },
                rating: if clear_rating {
                    Some(None)
                } else {
                    parse_rating(rating)?.map(Some)
                },
            };
            let entry = EntryService::new(repo()?).edit(id, patch)?;
            println!("Updated entry #{}", entry.id);
            Ok(())
        }
        Commands::Delete { id } => {
            let entry = EntryService::new(repo()?).delete(id)?;
            println!("Deleted entry #{} ({})", entry.id, entry.date);
            Ok(())
        }
        Commands::Clear { yes } => {
            if !yes {
                return Err(MindtrackError::Validation(
                    "Refusing to delete all entries without --yes".to_string(),
                ));
            }
            let removed = EntryService::new(repo()?).clear_all()?;
            println!("Removed {} entries", removed);
            Ok(())
        }
        Commands::List {
            from,
            to,
            tag,
            limit,
        } => {
            let filter = ListFilter {
                from: from.as_deref().map(resolve_date).transpose()?,
                to: to.as_deref().map(resolve_date).transpose()?,
                tag,
                limit,
            };
            let entries = EntryService::new(repo()?).list(&filter)?;
            println!("{}", output::format_entry_list(&entries).trim_end());
            Ok(())
        }
        Commands::Show { id } => {
            let entry = EntryService::new(repo()?).get(id)?;
            print!("{}", output::format_entry_detail(&entry));
            Ok(())
        }
        Commands::On { date } => {
            let date = resolve_date(&date)?;
            let entries = EntryService::new(repo()?).on_date(date)?;
            println!(
                "{}",
                output::format_entry_blocks(&entries, "No entries for this date.").trim_end()
            );
            Ok(())
        }
        Commands::Search { query } => {
            let matches = SearchService::new(repo()?).execute(&query)?;
            println!(
                "{}",
                output::format_entry_blocks(&matches, "No matches found.").trim_end()
            );
            Ok(())
        }
        Commands::Export { path } => {
            let path = path.unwrap_or_else(|| {
                PathBuf::from(TransferService::default_export_filename(Local::now()))
            });
            let written = TransferService::new(repo()?).export_csv(&path)?;
            println!("Exported {} entries to {}", written, path.display());
            Ok(())
        }
        Commands::Import { path } => {
            let added = TransferService::new(repo()?).import_csv(&path)?;
            println!("Imported {} entries from {}", added.len(), path.display());
            Ok(())
        }
        Commands::Backup { action } => {
            let service = BackupService::new(repo()?);
            match action {
                None => match service.backup()? {
                    Some(path) => println!("Backup created: {}", path.display()),
                    None => println!("Nothing to back up yet"),
                },
                Some(BackupAction::List) => {
                    println!("{}", output::format_backup_list(&service.list()?).trim_end());
                }
                Some(BackupAction::Restore { name }) => {
                    let journal = service.restore(&name)?;
                    println!("Restored {} entries from {}", journal.len(), name);
                }
            }
            Ok(())
        }
        Commands::Stats => {
            let stats = DashboardService::new(repo()?).statistics()?;
            print!("{}", output::format_statistics(&stats));
            Ok(())
        }
        Commands::Calendar { month, prev, next } => {
            let (mut year, mut month) = match month {
                Some(m) => MonthView::parse_month(&m)?,
                None => {
                    let today = Local::now().date_naive();
                    (today.year(), today.month())
                }
            };
            if prev {
                (year, month) = MonthView::previous(year, month)?;
            } else if next {
                (year, month) = MonthView::next(year, month)?;
            }
            let view = DashboardService::new(repo()?).calendar(year, month)?;
            print!("{}", output::format_calendar(&view));
            Ok(())
        }
        Commands::Tags => {
            let tags = EntryService::new(repo()?).tags()?;
            println!("{}", output::format_tag_list(&tags).trim_end());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(repo()?);

            if list {
                print!("{}", output::format_config(&service.list()?));
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: mindtrack config [--list | <key> [<value>]]");
                println!("Valid keys: created, backup_on_write, max_backups, recent_count");
            }
            Ok(())
        }
    }
}
