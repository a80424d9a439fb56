use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entries::{EntriesLogic, EntryFilter};
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::models::iso_week::MonthKey;
use crate::ui::messages::info;
use crate::utils::colors::{colorize_hours, colorize_optional};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month, worker, all } = cmd {
        let filter = EntryFilter {
            month: month.as_deref().map(str::parse::<MonthKey>).transpose()?,
            worker: worker.clone(),
        };
        let unfiltered = filter.month.is_none() && filter.worker.is_none();

        let mut pool = open_pool(cfg)?;
        let mut entries = EntriesLogic::list(&mut pool, &filter)?;

        if entries.is_empty() {
            info("No entries found.");
            return Ok(());
        }

        let total_count = entries.len();
        if unfiltered && !*all && total_count > cfg.list_limit {
            entries.drain(..total_count - cfg.list_limit);
        }

        println!("{}", render_entries(&entries));

        let total: f64 = entries.iter().map(|e| e.hours).sum();
        println!("Total: {}", colorize_hours(total));

        if entries.len() < total_count {
            info(format!(
                "Showing the last {} of {} entries (use --all for every entry).",
                entries.len(),
                total_count
            ));
        }
    }
    Ok(())
}

fn render_entries(entries: &[Entry]) -> String {
    let mut table = Table::new(["ID", "WEEK", "MONTH", "WORKER", "COMPANY", "PROJECT", "HOURS"]);
    for e in entries {
        table.add_row(vec![
            e.id.clone(),
            e.week.to_string(),
            e.month_key().to_string(),
            colorize_optional(Some(e.worker.as_str())),
            e.company.clone(),
            e.project.clone(),
            colorize_hours(e.hours),
        ]);
    }
    table.render()
}
