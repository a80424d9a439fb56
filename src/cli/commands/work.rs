use crate::cli::commands::open_pool;
use crate::config::Config;
use crate::core::work_division::WorkDivisionLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::colorize_optional;
use crate::utils::table::Table;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;
    let items = WorkDivisionLogic::list(&mut pool)?;

    if items.is_empty() {
        info("No work division items.");
        return Ok(());
    }

    let mut table = Table::new([
        "ID", "EVENT", "DATE", "PLACE", "SETUP", "SETUP TEAM", "DISMANTLE", "DISMANTLE TEAM",
        "NIGHTS",
    ]);
    for it in &items {
        let date_str = |d: Option<chrono::NaiveDate>| d.map(|d| d.to_string());
        table.add_row(vec![
            it.id.map(|i| i.to_string()).unwrap_or_default(),
            it.event_name.clone(),
            colorize_optional(date_str(it.event_date).as_deref()),
            colorize_optional(it.place.as_deref()),
            colorize_optional(date_str(it.setup_date).as_deref()),
            it.team_setup.join(", "),
            colorize_optional(date_str(it.dismantle_date).as_deref()),
            it.team_dismantle.join(", "),
            colorize_optional(it.nights.map(|n| n.to_string()).as_deref()),
        ]);
    }
    println!("{}", table.render());
    Ok(())
}
