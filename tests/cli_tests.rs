use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_data, rwh, setup_test_db};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    rwh()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized").and(contains("Migration applied: 20250301_0001_create_entries")));

    rwh()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed").and(contains("Schema is up to date")));
}

#[test]
fn test_add_and_list_entries() {
    let db_path = setup_test_db("cli_add_list");
    init_db_with_data(&db_path);

    rwh()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(
            contains("2025-W36")
                .and(contains("2025-W40"))
                .and(contains("2025-W44"))
                .and(contains("Stand")),
        );
}

#[test]
fn test_add_accepts_a_date_for_the_week() {
    let db_path = setup_test_db("cli_add_date");
    rwh()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // Sunday 2025-01-05 belongs to 2025-W01, whose Monday is 2024-12-30
    rwh()
        .args([
            "--db", &db_path, "add", "--worker", "anna", "--company", "Acme", "--project", "Stand",
            "--week", "2025-01-05", "--hours", "3",
        ])
        .assert()
        .success()
        .stdout(contains("2025-W01").and(contains("month 2024-12")));
}

#[test]
fn test_add_rejects_negative_hours_and_bad_week() {
    let db_path = setup_test_db("cli_add_invalid");
    rwh()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rwh()
        .args([
            "--db", &db_path, "add", "--worker", "anna", "--company", "Acme", "--project", "Stand",
            "--week", "2025-W10", "--hours=-2",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid hours"));

    rwh()
        .args([
            "--db", &db_path, "add", "--worker", "anna", "--company", "Acme", "--project", "Stand",
            "--week", "2021-W53", "--hours", "2",
        ])
        .assert()
        .failure()
        .stderr(contains("2021-W53"));
}

#[test]
fn test_list_filters_by_month_of_monday() {
    let db_path = setup_test_db("cli_list_month");
    init_db_with_data(&db_path);

    rwh()
        .args(["--db", &db_path, "list", "--month", "2025-10"])
        .assert()
        .success()
        .stdout(contains("2025-W44").and(contains("2025-W40").not()));

    rwh()
        .args(["--db", &db_path, "list", "--worker", "marco"])
        .assert()
        .success()
        .stdout(contains("2025-W40").and(contains("2025-W36").not()));
}

#[test]
fn test_delete_entry() {
    let db_path = setup_test_db("cli_del");
    init_db_with_data(&db_path);

    rwh()
        .args(["--db", &db_path, "del", "--id", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Entry #1 has been deleted"));

    rwh()
        .args(["--db", &db_path, "del", "--id", "1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Entry 1 not found"));
}

#[test]
fn test_summary_per_month() {
    let db_path = setup_test_db("cli_summary");
    init_db_with_data(&db_path);

    rwh()
        .args(["--db", &db_path, "summary", "--month", "2025-09"])
        .assert()
        .success()
        .stdout(contains("anna").and(contains("marco")).and(contains("14.5")));
}

#[test]
fn test_assign_and_delete_project() {
    let db_path = setup_test_db("cli_projects");
    init_db_with_data(&db_path);

    rwh()
        .args([
            "--db", &db_path, "assign", "--company", "Acme", "--project", "Stand", "--month",
            "2025-09", "--worker", "anna",
        ])
        .assert()
        .success();

    rwh()
        .args(["--db", &db_path, "projects", "--month", "2025-09"])
        .assert()
        .success()
        .stdout(contains("Stand").and(contains("anna")));

    rwh()
        .args([
            "--db", &db_path, "projects", "--delete", "--company", "Acme", "--project", "Stand",
            "--yes",
        ])
        .assert()
        .success()
        .stdout(contains("2 entries removed"));

    rwh()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Stand").not().and(contains("Fair")));
}

#[test]
fn test_delete_unknown_project_fails() {
    let db_path = setup_test_db("cli_projects_unknown");
    init_db_with_data(&db_path);

    rwh()
        .args([
            "--db", &db_path, "projects", "--delete", "--company", "Nope", "--project", "Ghost",
            "--yes",
        ])
        .assert()
        .failure()
        .stderr(contains("Ghost").and(contains("not found")));
}

#[test]
fn test_week_conversions() {
    rwh()
        .args(["week", "2020-W53"])
        .assert()
        .success()
        .stdout(contains("2020-12-28").and(contains("2021-01-03")));

    rwh()
        .args(["week", "2024-12-31"])
        .assert()
        .success()
        .stdout(contains("2025-W01").and(contains("2024-12")));

    rwh()
        .args(["week", "2025-09"])
        .assert()
        .success()
        .stdout(
            contains("2025-W36")
                .and(contains("2025-W40"))
                .and(contains("2025-W35").not()),
        );

    rwh().args(["week", "not-a-week"]).assert().failure();
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_data(&db_path);

    rwh()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied").and(contains("add_entry")));
}

#[test]
fn test_hash_password_prints_bcrypt_hash() {
    rwh()
        .args(["hash-password", "secret", "--cost", "4"])
        .assert()
        .success()
        .stdout(contains("$2"));
}

#[test]
fn test_config_print_masks_password_hash() {
    let home = tempfile::tempdir().expect("tempdir");
    let conf_dir = home.path().join(".rworkhours");
    std::fs::create_dir_all(&conf_dir).expect("config dir");
    std::fs::write(
        conf_dir.join("rworkhours.conf"),
        "database: /tmp/rworkhours_config_print.sqlite\n\
         app_pass_hash: \"$2b$04$abcdefghijklmnopqrstuuVd8mXvXk1YkqZ6bYQ2l1Qe3wQe3wQe\"\n",
    )
    .expect("write config");

    rwh()
        .env("HOME", home.path())
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("<set>").and(contains("$2").not()));
}
