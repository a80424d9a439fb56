use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entries::EntriesLogic;
use crate::errors::AppResult;
use crate::models::iso_week::MonthKey;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_hours;
use crate::utils::date;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { month } = cmd {
        let month = match month {
            Some(m) => m.parse::<MonthKey>()?,
            None => date::current_month(),
        };

        let mut pool = open_pool(cfg)?;
        let summary = EntriesLogic::summary(&mut pool, month)?;

        header(format!("Hours for {}", summary.month));
        if summary.rows.is_empty() {
            info("No entries filed under this month.");
            return Ok(());
        }

        let mut table = Table::new(["WORKER", "COMPANY", "PROJECT", "HOURS"]);
        for r in &summary.rows {
            table.add_row(vec![
                r.worker.clone(),
                r.company.clone(),
                r.project.clone(),
                colorize_hours(r.hours),
            ]);
        }
        println!("{}", table.render());
        println!("Total: {}", colorize_hours(summary.total));
    }
    Ok(())
}
