use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::iso_week::IsoWeek;
use chrono::Local;
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Entry> {
    let week_str: String = row.get("week")?;
    let week = week_str.parse::<IsoWeek>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidWeek(week_str.clone())),
        )
    })?;

    Ok(Entry {
        id: row.get("id")?,
        worker: row.get("worker")?,
        company: row.get("company")?,
        project: row.get("project")?,
        week,
        hours: row.get("hours")?,
    })
}

pub fn load_all(conn: &Connection) -> AppResult<Vec<Entry>> {
    let mut stmt = conn.prepare(
        "SELECT id, worker, company, project, week, hours
         FROM entries
         ORDER BY length(id) ASC, id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert with an explicit id (sync path).
pub fn insert_entry(conn: &Connection, e: &Entry) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO entries (id, worker, company, project, week, hours, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?;
    stmt.execute(params![
        e.id,
        e.worker,
        e.company,
        e.project,
        e.week.to_string(),
        e.hours,
        Local::now().to_rfc3339(),
    ])?;
    Ok(())
}

/// Next free numeric id, as text. Non-numeric client ids are ignored.
fn next_numeric_id(conn: &Connection) -> AppResult<String> {
    let max: i64 = conn.query_row(
        "SELECT COALESCE(MAX(CAST(id AS INTEGER)), 0)
         FROM entries
         WHERE id GLOB '[0-9]*' AND id NOT GLOB '*[^0-9]*'",
        [],
        |row| row.get(0),
    )?;
    Ok((max + 1).to_string())
}

/// Insert with the next numeric id. Returns the new id.
pub fn insert_new_entry(
    conn: &Connection,
    worker: &str,
    company: &str,
    project: &str,
    week: &IsoWeek,
    hours: f64,
) -> AppResult<String> {
    let id = next_numeric_id(conn)?;
    conn.execute(
        "INSERT INTO entries (id, worker, company, project, week, hours, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            id,
            worker,
            company,
            project,
            week.to_string(),
            hours,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(id)
}

pub fn delete_all(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM entries", [])?)
}

pub fn delete_entry(conn: &Connection, id: &str) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM entries WHERE id = ?1", [id])?)
}

pub fn delete_for_project(conn: &Connection, company: &str, project: &str) -> AppResult<usize> {
    Ok(conn.execute(
        "DELETE FROM entries WHERE company = ?1 AND project = ?2",
        params![company, project],
    )?)
}
