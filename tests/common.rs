#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rworkhours::db::initialize::init_db;
use rworkhours::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwh() -> Command {
    cargo_bin_cmd!("rworkhours")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkhours.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkhours_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh in-memory database with the full schema.
pub fn memory_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("migrate");
    pool
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    rwh()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    // 2025-W36 starts on 2025-09-01, 2025-W40 on 2025-09-29
    for (worker, week, hours) in [("anna", "2025-W36", "8"), ("marco", "2025-W40", "6.5")] {
        rwh()
            .args([
                "--db", db_path, "add", "--worker", worker, "--company", "Acme", "--project",
                "Stand", "--week", week, "--hours", hours,
            ])
            .assert()
            .success();
    }

    // 2025-W44 starts on 2025-10-27 and is filed under October
    rwh()
        .args([
            "--db", db_path, "add", "--worker", "anna", "--company", "Beta", "--project", "Fair",
            "--week", "2025-W44", "--hours", "4",
        ])
        .assert()
        .success();
}
