use crate::errors::{AppError, AppResult};
use crate::models::work_division::WorkDivisionItem;
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};

fn to_conversion_error(e: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
}

fn get_date(row: &Row, col: &str) -> Result<Option<NaiveDate>> {
    let raw: Option<String> = row.get(col)?;
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| to_conversion_error(AppError::InvalidDate(s.clone()))),
    }
}

fn get_team(row: &Row, col: &str) -> Result<Vec<String>> {
    let raw: Option<String> = row.get(col)?;
    match raw {
        None => Ok(Vec::new()),
        Some(s) if s.trim().is_empty() => Ok(Vec::new()),
        Some(s) => serde_json::from_str(&s).map_err(|e| to_conversion_error(AppError::Json(e))),
    }
}

pub fn map_row(row: &Row) -> Result<WorkDivisionItem> {
    Ok(WorkDivisionItem {
        id: Some(row.get("id")?),
        event_name: row.get("event_name")?,
        place: row.get("place")?,
        event_date: get_date(row, "event_date")?,
        coord_project: row.get("coord_project")?,
        coord_prod: row.get("coord_prod")?,
        team_setup: get_team(row, "team_setup")?,
        setup_date: get_date(row, "setup_date")?,
        setup_vehicle: row.get("setup_vehicle")?,
        team_dismantle: get_team(row, "team_dismantle")?,
        dismantle_date: get_date(row, "dismantle_date")?,
        dismantle_vehicle: row.get("dismantle_vehicle")?,
        nights: row.get("nights")?,
    })
}

pub fn load_all(conn: &Connection) -> AppResult<Vec<WorkDivisionItem>> {
    let mut stmt =
        conn.prepare("SELECT * FROM work_division ORDER BY event_date, event_name, id")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn fmt_date(d: &Option<NaiveDate>) -> Option<String> {
    d.map(|d| d.format("%Y-%m-%d").to_string())
}

/// Insert one item; the stored id is always assigned by SQLite.
pub fn insert_item(conn: &Connection, item: &WorkDivisionItem) -> AppResult<i64> {
    let team_setup = serde_json::to_string(&item.team_setup)?;
    let team_dismantle = serde_json::to_string(&item.team_dismantle)?;

    let mut stmt = conn.prepare_cached(
        "INSERT INTO work_division (
            event_name, place, event_date, coord_project, coord_prod,
            team_setup, setup_date, setup_vehicle,
            team_dismantle, dismantle_date, dismantle_vehicle, nights
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
    )?;
    stmt.execute(params![
        item.event_name,
        item.place,
        fmt_date(&item.event_date),
        item.coord_project,
        item.coord_prod,
        team_setup,
        fmt_date(&item.setup_date),
        item.setup_vehicle,
        team_dismantle,
        fmt_date(&item.dismantle_date),
        item.dismantle_vehicle,
        item.nights,
    ])?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_all(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM work_division", [])?)
}

pub fn delete_item(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM work_division WHERE id = ?1", [id])?)
}
