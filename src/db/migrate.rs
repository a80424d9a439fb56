use rusqlite::{Connection, OptionalExtension, Result};

/// A named schema step. Applied steps are recorded in the `log` table
/// (`operation = 'migration_applied'`, `target = version`) and never run twice.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_create_entries",
        description: "Created entries table",
        sql: r#"
            CREATE TABLE IF NOT EXISTS entries (
                id          INTEGER PRIMARY KEY,
                worker      TEXT NOT NULL DEFAULT '',
                company     TEXT NOT NULL DEFAULT '',
                project     TEXT NOT NULL DEFAULT '',
                week        TEXT NOT NULL,
                hours       REAL NOT NULL DEFAULT 0 CHECK(hours >= 0),
                created_at  TEXT NOT NULL
            );
        "#,
    },
    Migration {
        version: "20250301_0002_create_projects",
        description: "Created projects, project_months and project_workers tables",
        sql: r#"
            CREATE TABLE IF NOT EXISTS projects (
                id       INTEGER PRIMARY KEY AUTOINCREMENT,
                company  TEXT NOT NULL,
                name     TEXT NOT NULL,
                UNIQUE(company, name)
            );

            CREATE TABLE IF NOT EXISTS project_months (
                project_id  INTEGER NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
                month_key   TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS project_workers (
                project_id  INTEGER NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
                worker      TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_project_months_project ON project_months(project_id);
            CREATE INDEX IF NOT EXISTS idx_project_workers_project ON project_workers(project_id);
        "#,
    },
    Migration {
        version: "20250410_0003_create_work_division",
        description: "Created work_division table",
        sql: r#"
            CREATE TABLE IF NOT EXISTS work_division (
                id                 INTEGER PRIMARY KEY AUTOINCREMENT,
                event_name         TEXT NOT NULL DEFAULT '',
                place              TEXT,
                event_date         TEXT,
                coord_project      TEXT,
                coord_prod         TEXT,
                team_setup         TEXT,
                setup_date         TEXT,
                setup_vehicle      TEXT,
                team_dismantle     TEXT,
                dismantle_date     TEXT,
                dismantle_vehicle  TEXT,
                nights             INTEGER
            );
        "#,
    },
    Migration {
        version: "20250522_0004_index_entries_company_project",
        description: "Indexed entries by company/project and week",
        sql: r#"
            CREATE INDEX IF NOT EXISTS idx_entries_company_project ON entries(company, project);
            CREATE INDEX IF NOT EXISTS idx_entries_week ON entries(week);
        "#,
    },
    Migration {
        version: "20250610_0005_text_entry_ids",
        description: "Switched entries.id to client-generated text ids",
        sql: r#"
            CREATE TABLE entries_new (
                id          TEXT PRIMARY KEY NOT NULL,
                worker      TEXT NOT NULL DEFAULT '',
                company     TEXT NOT NULL DEFAULT '',
                project     TEXT NOT NULL DEFAULT '',
                week        TEXT NOT NULL,
                hours       REAL NOT NULL DEFAULT 0 CHECK(hours >= 0),
                created_at  TEXT NOT NULL
            );

            INSERT INTO entries_new (id, worker, company, project, week, hours, created_at)
            SELECT CAST(id AS TEXT), worker, company, project, week, hours, created_at
            FROM entries;

            DROP TABLE entries;
            ALTER TABLE entries_new RENAME TO entries;

            CREATE INDEX IF NOT EXISTS idx_entries_company_project ON entries(company, project);
            CREATE INDEX IF NOT EXISTS idx_entries_week ON entries(week);
        "#,
    },
];

/// Ensure that the `log` table exists; migrations are tracked in it.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        rusqlite::params![chrono::Local::now().to_rfc3339(), m.version, m.description],
    )?;
    tx.commit()
}

/// Versions of every known migration, in application order.
pub fn known_versions() -> Vec<&'static str> {
    MIGRATIONS.iter().map(|m| m.version).collect()
}

/// Versions not yet recorded as applied.
pub fn pending_versions(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;
    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations. Returns the versions
/// applied by this call, in order.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        tracing::info!(version = m.version, "{}", m.description);
        applied.push(m.version);
    }

    Ok(applied)
}
