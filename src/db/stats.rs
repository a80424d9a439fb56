use crate::db::pool::DbPool;
use crate::models::iso_week::IsoWeek;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

fn count(pool: &DbPool, table: &str) -> rusqlite::Result<i64> {
    pool.conn
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    for (label, table) in [
        ("Entries", "entries"),
        ("Projects", "projects"),
        ("Project months", "project_months"),
        ("Project workers", "project_workers"),
        ("Work division items", "work_division"),
    ] {
        let n = count(pool, table)?;
        println!("{}• {}:{} {}{}{}", CYAN, label, RESET, GREEN, n, RESET);
    }

    //
    // 3) WEEK RANGE
    //
    // weeks are zero-padded, so text order is chronological order
    let first_week: Option<String> = pool
        .conn
        .query_row("SELECT MIN(week) FROM entries", [], |row| row.get(0))
        .optional()?
        .flatten();
    let last_week: Option<String> = pool
        .conn
        .query_row("SELECT MAX(week) FROM entries", [], |row| row.get(0))
        .optional()?
        .flatten();

    let describe = |w: &Option<String>| -> String {
        match w.as_deref().and_then(|s| s.parse::<IsoWeek>().ok()) {
            Some(week) => format!("{} (Monday {})", week, week.monday()),
            None => format!("{GREY}--{RESET}"),
        }
    };

    println!("{}• Week range:{}", CYAN, RESET);
    println!("    from: {}", describe(&first_week));
    println!("    to:   {}", describe(&last_week));

    //
    // 4) TOTAL HOURS
    //
    let total: f64 = pool.conn.query_row(
        "SELECT IFNULL(SUM(hours), 0) FROM entries",
        [],
        |row| row.get(0),
    )?;
    println!("{}• Total hours:{} {:.2}", CYAN, RESET, total);

    println!();
    Ok(())
}
