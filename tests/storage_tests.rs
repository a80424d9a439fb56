use rworkhours::core::auth;
use rworkhours::core::entries::{EntriesLogic, EntryFilter};
use rworkhours::core::projects::ProjectsLogic;
use rworkhours::core::work_division::WorkDivisionLogic;
use rworkhours::db::initialize::init_db;
use rworkhours::db::migrate::known_versions;
use rworkhours::db::pool::DbPool;
use rworkhours::errors::AppError;
use rworkhours::models::entry::{Entry, EntryInput};
use rworkhours::models::iso_week::{IsoWeek, MonthKey};
use rworkhours::models::project::{ProjectRef, ProjectsConfig};
use rworkhours::models::work_division::WorkDivisionItem;

mod common;
use common::memory_pool;

fn entry(id: &str, worker: &str, project: &str, week: &str, hours: f64) -> Entry {
    Entry {
        id: id.into(),
        worker: worker.into(),
        company: "Acme".into(),
        project: project.into(),
        week: week.parse().expect("valid week"),
        hours,
    }
}

fn config(months: &[(&str, &str, &[&str])], workers: &[(&str, &str, &[&str])]) -> ProjectsConfig {
    let mut cfg = ProjectsConfig::default();
    for (company, month, names) in months {
        cfg.projects_by_company
            .entry(company.to_string())
            .or_default()
            .insert(month.to_string(), names.iter().map(|s| s.to_string()).collect());
    }
    for (company, project, names) in workers {
        cfg.project_workers
            .entry(company.to_string())
            .or_default()
            .insert(project.to_string(), names.iter().map(|s| s.to_string()).collect());
    }
    cfg
}

fn all(pool: &mut DbPool) -> Vec<Entry> {
    EntriesLogic::list(pool, &EntryFilter::default()).expect("list entries")
}

#[test]
fn test_save_all_replaces_the_table() {
    let mut pool = memory_pool();

    let first = vec![entry("1", "anna", "Stand", "2025-W36", 8.0), entry("2", "marco", "Stand", "2025-W37", 4.0)];
    assert_eq!(EntriesLogic::save_all(&mut pool, &first).expect("save"), 2);
    assert_eq!(all(&mut pool), first);

    let second = vec![entry("7", "anna", "Fair", "2025-W40", 2.5)];
    EntriesLogic::save_all(&mut pool, &second).expect("save");
    assert_eq!(all(&mut pool), second);

    EntriesLogic::save_all(&mut pool, &[]).expect("save empty");
    assert!(all(&mut pool).is_empty());
}

#[test]
fn test_failed_save_keeps_previous_rows() {
    let mut pool = memory_pool();
    let before = vec![entry("1", "anna", "Stand", "2025-W36", 8.0)];
    EntriesLogic::save_all(&mut pool, &before).expect("save");

    // duplicate ids violate the primary key halfway through the batch
    let broken = vec![entry("5", "anna", "Stand", "2025-W36", 1.0), entry("5", "marco", "Stand", "2025-W36", 1.0)];
    assert!(EntriesLogic::save_all(&mut pool, &broken).is_err());
    assert_eq!(all(&mut pool), before);
}

#[test]
fn test_validate_skips_items_without_id_and_rejects_bad_values() {
    let ok: Vec<EntryInput> = serde_json::from_str(
        r#"[{"id":"3","worker":"anna","company":"Acme","project":"Stand","week":"2025-W36","hours":"7.5"},
            {"worker":"ghost","week":"2025-W36","hours":1}]"#,
    )
    .expect("decode inputs");
    let entries = EntriesLogic::validate(ok).expect("valid");
    assert_eq!(entries, vec![entry("3", "anna", "Stand", "2025-W36", 7.5)]);

    let bad_week: Vec<EntryInput> =
        serde_json::from_str(r#"[{"id":1,"week":"2025-36","hours":1}]"#).expect("decode");
    assert!(matches!(EntriesLogic::validate(bad_week), Err(AppError::InvalidWeek(_))));

    let negative: Vec<EntryInput> =
        serde_json::from_str(r#"[{"id":1,"week":"2025-W36","hours":-1}]"#).expect("decode");
    assert!(matches!(EntriesLogic::validate(negative), Err(AppError::InvalidHours(_))));
}

#[test]
fn test_list_filters_and_month_summary() {
    let mut pool = memory_pool();
    let entries = vec![
        entry("1", "anna", "Stand", "2025-W36", 8.0),
        entry("2", "anna", "Stand", "2025-W37", 2.0),
        entry("3", "marco", "Stand", "2025-W36", 5.0),
        // Monday 2025-10-27: filed under October
        entry("4", "anna", "Stand", "2025-W44", 3.0),
    ];
    EntriesLogic::save_all(&mut pool, &entries).expect("save");

    let sept: MonthKey = "2025-09".parse().expect("month");
    let filter = EntryFilter { month: Some(sept), worker: Some("anna".into()) };
    let listed = EntriesLogic::list(&mut pool, &filter).expect("list");
    let ids: Vec<&str> = listed.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["1", "2"]);

    let summary = EntriesLogic::summary(&mut pool, sept).expect("summary");
    assert_eq!(summary.rows.len(), 2);
    assert_eq!(summary.rows[0].worker, "anna");
    assert_eq!(summary.rows[0].hours, 10.0);
    assert_eq!(summary.total, 15.0);
}

#[test]
fn test_add_and_delete_entry() {
    let mut pool = memory_pool();
    let week: IsoWeek = "2025-W36".parse().expect("week");

    let a = EntriesLogic::add(&mut pool, " anna ", "Acme", "Stand", &week, 4.0).expect("add");
    let b = EntriesLogic::add(&mut pool, "marco", "Acme", "Stand", &week, 2.0).expect("add");
    assert_eq!(a.worker, "anna");
    assert_eq!((a.id.as_str(), b.id.as_str()), ("1", "2"));

    EntriesLogic::delete(&mut pool, &a.id).expect("delete");
    assert!(matches!(EntriesLogic::delete(&mut pool, &a.id), Err(AppError::EntryNotFound(_))));
    assert_eq!(all(&mut pool), vec![b]);
}

#[test]
fn test_client_text_ids_round_trip_and_add_skips_them() {
    let mut pool = memory_pool();
    let saved = vec![
        entry("9", "marco", "Stand", "2025-W37", 1.0),
        entry("h1734567890123", "anna", "Stand", "2025-W36", 8.0),
    ];
    EntriesLogic::save_all(&mut pool, &saved).expect("save");
    assert_eq!(all(&mut pool), saved);

    let week: IsoWeek = "2025-W38".parse().expect("week");
    let added = EntriesLogic::add(&mut pool, "anna", "Acme", "Stand", &week, 2.0).expect("add");
    assert_eq!(added.id, "10");

    EntriesLogic::delete(&mut pool, "h1734567890123").expect("delete text id");
    let ids: Vec<String> = all(&mut pool).into_iter().map(|e| e.id).collect();
    assert_eq!(ids, ["9", "10"]);
}

#[test]
fn test_migrations_report_applied_versions_once() {
    let pool = DbPool::in_memory().expect("open");
    assert_eq!(init_db(&pool.conn).expect("first run"), known_versions());
    assert!(init_db(&pool.conn).expect("second run").is_empty());
}

#[test]
fn test_projects_config_round_trip_and_normalization() {
    let mut pool = memory_pool();
    let cfg = config(
        &[("Acme", "2025-09", &["Stand", " Stand ", "", "Fair"]), ("Acme", "2025-10", &["Stand"])],
        &[("Acme", "Stand", &["anna", "anna", " marco "])],
    );
    ProjectsLogic::save_config(&mut pool, &cfg).expect("save config");

    let loaded = ProjectsLogic::load_config(&mut pool).expect("load config");
    let acme = &loaded.projects_by_company["Acme"];
    assert_eq!(acme["2025-09"], ["Fair", "Stand"]);
    assert_eq!(acme["2025-10"], ["Stand"]);
    assert_eq!(loaded.project_workers["Acme"]["Stand"], ["anna", "marco"]);
}

#[test]
fn test_save_config_rejects_bad_month_key() {
    let mut pool = memory_pool();
    let cfg = config(&[("Acme", "2025-9", &["Stand"])], &[]);
    assert!(matches!(
        ProjectsLogic::save_config(&mut pool, &cfg),
        Err(AppError::InvalidMonthKey(_))
    ));
}

#[test]
fn test_save_config_keeps_projects_but_replaces_assignments() {
    let mut pool = memory_pool();
    ProjectsLogic::save_config(&mut pool, &config(&[("Acme", "2025-09", &["Stand"])], &[]))
        .expect("save");
    ProjectsLogic::save_config(&mut pool, &config(&[("Acme", "2025-10", &["Fair"])], &[]))
        .expect("save");

    let listed = ProjectsLogic::list(&mut pool, None).expect("list");
    let stand = listed.iter().find(|p| p.name == "Stand").expect("Stand still known");
    assert!(stand.months.is_empty());

    let october = ProjectsLogic::list(&mut pool, Some("2025-10".parse().expect("month"))).expect("list");
    assert_eq!(october.len(), 1);
    assert_eq!(october[0].name, "Fair");
}

#[test]
fn test_delete_project_cascades_to_entries() {
    let mut pool = memory_pool();
    ProjectsLogic::save_config(
        &mut pool,
        &config(&[("Acme", "2025-09", &["Stand", "Fair"])], &[("Acme", "Stand", &["anna"])]),
    )
    .expect("save");
    EntriesLogic::save_all(
        &mut pool,
        &[
            entry("1", "anna", "Stand", "2025-W36", 8.0),
            entry("2", "marco", "Stand", "2025-W37", 1.0),
            entry("3", "anna", "Fair", "2025-W36", 2.0),
        ],
    )
    .expect("save entries");

    let removed = ProjectsLogic::delete(&mut pool, "Acme", " Stand ").expect("delete");
    assert_eq!(removed, 2);

    let remaining: Vec<String> = all(&mut pool).into_iter().map(|e| e.id).collect();
    assert_eq!(remaining, ["3"]);

    let cfg = ProjectsLogic::load_config(&mut pool).expect("load");
    assert_eq!(cfg.projects_by_company["Acme"]["2025-09"], ["Fair"]);
    assert!(cfg.project_workers.is_empty());

    assert!(matches!(
        ProjectsLogic::delete(&mut pool, "Acme", "Stand"),
        Err(AppError::ProjectNotFound { .. })
    ));
}

#[test]
fn test_projects_for_week_honours_worker_assignments() {
    let mut pool = memory_pool();
    ProjectsLogic::save_config(
        &mut pool,
        &config(
            &[("Acme", "2024-12", &["Stand", "Open"]), ("Acme", "2025-01", &["Later"])],
            &[("Acme", "Stand", &["anna"])],
        ),
    )
    .expect("save");

    // 2025-W01 starts on 2024-12-30, so December projects apply
    let week: IsoWeek = "2025-W01".parse().expect("week");
    let names = |refs: Vec<ProjectRef>| refs.into_iter().map(|r| r.project).collect::<Vec<_>>();

    let everyone = ProjectsLogic::projects_for_week(&mut pool, &week, None).expect("projects");
    assert_eq!(names(everyone), ["Open", "Stand"]);

    let marco = ProjectsLogic::projects_for_week(&mut pool, &week, Some("marco")).expect("projects");
    assert_eq!(names(marco), ["Open"]);

    let anna = ProjectsLogic::projects_for_week(&mut pool, &week, Some("anna")).expect("projects");
    assert_eq!(names(anna), ["Open", "Stand"]);
}

#[test]
fn test_assign_adds_month_and_workers() {
    let mut pool = memory_pool();
    let sept: MonthKey = "2025-09".parse().expect("month");
    ProjectsLogic::assign(&mut pool, "Acme", "Stand", sept, &["anna".into()]).expect("assign");
    ProjectsLogic::assign(&mut pool, "Acme", "Stand", sept, &["marco".into(), "anna".into()])
        .expect("assign again");

    let cfg = ProjectsLogic::load_config(&mut pool).expect("load");
    assert_eq!(cfg.projects_by_company["Acme"]["2025-09"], ["Stand"]);
    assert_eq!(cfg.project_workers["Acme"]["Stand"], ["anna", "marco"]);
}

fn item(name: &str, date: Option<&str>) -> WorkDivisionItem {
    WorkDivisionItem {
        id: Some(99),
        event_name: name.into(),
        event_date: date.map(|d| d.parse().expect("date")),
        team_setup: vec!["anna".into(), "marco".into()],
        nights: Some(2),
        ..Default::default()
    }
}

#[test]
fn test_work_division_save_list_delete() {
    let mut pool = memory_pool();
    let items = vec![
        item("Fair B", Some("2025-10-02")),
        item("Fair A", Some("2025-10-02")),
        item("Expo", Some("2025-09-15")),
    ];
    assert_eq!(WorkDivisionLogic::save_all(&mut pool, &items).expect("save"), 3);

    let listed = WorkDivisionLogic::list(&mut pool).expect("list");
    let names: Vec<&str> = listed.iter().map(|i| i.event_name.as_str()).collect();
    assert_eq!(names, ["Expo", "Fair A", "Fair B"]);
    assert_eq!(listed[0].team_setup, ["anna", "marco"]);
    assert_eq!(listed[0].nights, Some(2));

    let id = listed[0].id.expect("stored id");
    WorkDivisionLogic::delete(&mut pool, id).expect("delete");
    assert!(matches!(WorkDivisionLogic::delete(&mut pool, id), Err(AppError::ItemNotFound(_))));
    assert_eq!(WorkDivisionLogic::list(&mut pool).expect("list").len(), 2);
}

#[test]
fn test_password_verification() {
    let hash = auth::hash_password("s3cret", 4).expect("hash");
    assert!(auth::verify_password("s3cret", Some(&hash)).expect("verify"));
    assert!(!auth::verify_password("wrong", Some(&hash)).expect("verify"));
    assert!(matches!(auth::verify_password("s3cret", None), Err(AppError::PasswordHashNotSet)));

    // PHP password_hash() output uses the $2y$ prefix
    let php_style = hash.replacen("$2b$", "$2y$", 1);
    assert!(auth::verify_password("s3cret", Some(&php_style)).expect("verify $2y$"));
}

