use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::models::iso_week::{IsoWeek, MonthKey};
use crate::utils::colors::{BOLD, GREY, RESET};
use crate::utils::date;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Week { value } = cmd {
        let value = value.trim();

        if let Ok(week) = value.parse::<IsoWeek>() {
            print_week(&week);
        } else if let Some(d) = date::parse_date(value) {
            let week = IsoWeek::from_date(d);
            println!("{} is in {}", d, week);
            print_week(&week);
        } else if let Ok(month) = value.parse::<MonthKey>() {
            print_month(&month);
        } else {
            return Err(AppError::InvalidWeek(format!(
                "{value} (expected YYYY-Www, YYYY-MM-DD or YYYY-MM)"
            )));
        }
    }
    Ok(())
}

fn print_week(week: &IsoWeek) {
    println!("{BOLD}{}{RESET}", week);
    println!("  Monday : {}", week.monday());
    println!("  Sunday : {}", week.sunday());
    println!("  Month  : {} {GREY}(month of its Monday){RESET}", week.month_key());
}

fn print_month(month: &MonthKey) {
    println!("{BOLD}{}{RESET}", month);
    for w in month.weeks() {
        println!("  {}  {} .. {}", w, w.monday(), w.sunday());
    }
}
