use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entries::EntriesLogic;
use crate::errors::{AppError, AppResult};
use crate::models::iso_week::IsoWeek;
use crate::ui::messages::success;
use crate::utils::date;

/// `YYYY-Www`, or a `YYYY-MM-DD` date standing for the week that contains it.
pub(crate) fn resolve_week(raw: &str) -> AppResult<IsoWeek> {
    if let Ok(w) = raw.parse::<IsoWeek>() {
        return Ok(w);
    }
    date::parse_date(raw)
        .map(IsoWeek::from_date)
        .ok_or_else(|| AppError::InvalidWeek(raw.to_string()))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        worker,
        company,
        project,
        week,
        hours,
    } = cmd
    {
        let week = resolve_week(week)?;
        let mut pool = open_pool(cfg)?;

        let entry = EntriesLogic::add(&mut pool, worker, company, project, &week, *hours)?;

        success(format!(
            "Entry #{} saved: {} worked {}h on {}/{} in {} (month {}).",
            entry.id,
            entry.worker,
            entry.hours,
            entry.company,
            entry.project,
            entry.week,
            entry.month_key()
        ));
    }
    Ok(())
}
