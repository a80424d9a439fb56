use crate::errors::AppResult;
use crate::models::project::Project;
use rusqlite::{Connection, OptionalExtension, params};

pub fn find_project_id(conn: &Connection, company: &str, name: &str) -> AppResult<Option<i64>> {
    let mut stmt =
        conn.prepare_cached("SELECT id FROM projects WHERE company = ?1 AND name = ?2 LIMIT 1")?;
    Ok(stmt
        .query_row(params![company, name], |row| row.get(0))
        .optional()?)
}

/// Id of `(company, name)`, inserting the project when it does not exist yet.
pub fn ensure_project(conn: &Connection, company: &str, name: &str) -> AppResult<i64> {
    if let Some(id) = find_project_id(conn, company, name)? {
        return Ok(id);
    }
    let mut ins = conn.prepare_cached("INSERT INTO projects (company, name) VALUES (?1, ?2)")?;
    ins.execute(params![company, name])?;
    Ok(conn.last_insert_rowid())
}

pub fn load_projects(conn: &Connection) -> AppResult<Vec<Project>> {
    let mut stmt = conn.prepare("SELECT id, company, name FROM projects ORDER BY company, name")?;
    let rows = stmt.query_map([], |row| {
        Ok(Project {
            id: row.get(0)?,
            company: row.get(1)?,
            name: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// `(company, project, month_key)` rows ordered by company, month, project.
pub fn load_project_months(conn: &Connection) -> AppResult<Vec<(String, String, String)>> {
    let mut stmt = conn.prepare(
        "SELECT p.company, p.name AS project, pm.month_key
         FROM projects p
         JOIN project_months pm ON pm.project_id = p.id
         ORDER BY p.company, pm.month_key, p.name",
    )?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// `(company, project, worker)` rows ordered by company, project.
pub fn load_project_workers(conn: &Connection) -> AppResult<Vec<(String, String, String)>> {
    let mut stmt = conn.prepare(
        "SELECT p.company, p.name AS project, pw.worker
         FROM project_workers pw
         JOIN projects p ON p.id = pw.project_id
         ORDER BY p.company, p.name, pw.rowid",
    )?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn clear_relations(conn: &Connection) -> AppResult<()> {
    conn.execute("DELETE FROM project_months", [])?;
    conn.execute("DELETE FROM project_workers", [])?;
    Ok(())
}

pub fn insert_month(conn: &Connection, project_id: i64, month_key: &str) -> AppResult<()> {
    let mut stmt =
        conn.prepare_cached("INSERT INTO project_months (project_id, month_key) VALUES (?1, ?2)")?;
    stmt.execute(params![project_id, month_key])?;
    Ok(())
}

pub fn insert_worker(conn: &Connection, project_id: i64, worker: &str) -> AppResult<()> {
    let mut stmt =
        conn.prepare_cached("INSERT INTO project_workers (project_id, worker) VALUES (?1, ?2)")?;
    stmt.execute(params![project_id, worker])?;
    Ok(())
}

/// Remove a project row together with its month and worker relations.
pub fn delete_project_rows(conn: &Connection, project_id: i64) -> AppResult<()> {
    conn.execute(
        "DELETE FROM project_months WHERE project_id = ?1",
        [project_id],
    )?;
    conn.execute(
        "DELETE FROM project_workers WHERE project_id = ?1",
        [project_id],
    )?;
    conn.execute("DELETE FROM projects WHERE id = ?1", [project_id])?;
    Ok(())
}
