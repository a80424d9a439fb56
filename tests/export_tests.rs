mod common;
use common::{init_db_with_data, rwh, setup_test_db, temp_out};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_entries_csv_all() {
    let db_path = setup_test_db("export_entries_csv_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_entries_csv_all", "csv");

    rwh()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let header = content.lines().next().expect("csv header");
    assert_eq!(header, "id,worker,company,project,week,monday,month,hours");
    assert!(content.contains("2025-W36,2025-09-01,2025-09"));
    assert!(content.contains("2025-W44,2025-10-27,2025-10"));
}

#[test]
fn test_export_entries_json_month() {
    let db_path = setup_test_db("export_entries_json_month");
    init_db_with_data(&db_path);

    let out = temp_out("export_entries_json_month", "json");

    rwh()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--month", "2025-09",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("json array");
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r["month"] == "2025-09"));
}

#[test]
fn test_export_projects_csv() {
    let db_path = setup_test_db("export_projects_csv");
    init_db_with_data(&db_path);

    rwh()
        .args([
            "--db", &db_path, "assign", "--company", "Acme", "--project", "Stand", "--month",
            "2025-09", "--worker", "anna", "--worker", "marco",
        ])
        .assert()
        .success();

    let out = temp_out("export_projects_csv", "csv");
    rwh()
        .args([
            "--db", &db_path, "export", "--data", "projects", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("company,project,month,workers"));
    assert!(content.contains("Acme,Stand,2025-09,\"anna, marco\""));
}

#[test]
fn test_export_with_no_rows_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    rwh()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let out = temp_out("export_empty", "csv");
    rwh()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Nothing to export"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    rwh()
        .args(["--db", &db_path, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_asks_before_overwriting() {
    let db_path = setup_test_db("export_overwrite");
    init_db_with_data(&db_path);

    let out = temp_out("export_overwrite", "csv");
    rwh()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success();

    rwh()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stdout(contains("Confirm [y/N]"))
        .stderr(contains("not overwritten"));

    rwh()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("will be overwritten"));
}
