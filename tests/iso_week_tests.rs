use chrono::{Datelike, NaiveDate, Weekday};
use rworkhours::models::iso_week::{IsoWeek, MonthKey};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

#[test]
fn test_week_one_may_start_in_previous_year() {
    let w: IsoWeek = "2025-W01".parse().expect("valid week");
    assert_eq!(w.monday(), d(2024, 12, 30));
    assert_eq!(w.sunday(), d(2025, 1, 5));
    assert_eq!(w.month_key().to_string(), "2024-12");
}

#[test]
fn test_long_years_have_week_53() {
    let w: IsoWeek = "2020-W53".parse().expect("2020 has 53 weeks");
    assert_eq!(w.monday(), d(2020, 12, 28));
    assert!("2021-W53".parse::<IsoWeek>().is_err());
    assert!("2021-W00".parse::<IsoWeek>().is_err());
}

#[test]
fn test_week_parsing_is_strict_but_trims() {
    assert_eq!(
        " 2025-W7 ".parse::<IsoWeek>().expect("single digit week").to_string(),
        "2025-W07"
    );
    for bad in ["2025W07", "2025-07", "25-W07", "2025-w07", "", "2025-W100"] {
        assert!(bad.parse::<IsoWeek>().is_err(), "{bad} should be rejected");
    }
}

#[test]
fn test_monday_and_week_agree_for_every_day_of_a_year() {
    let mut day = d(2024, 1, 1);
    while day.year() == 2024 {
        let w = IsoWeek::from_date(day);
        let monday = w.monday();
        assert_eq!(monday.weekday(), Weekday::Mon);
        assert!(monday <= day && day <= w.sunday());
        assert_eq!(IsoWeek::from_date(monday), w);
        assert_eq!(w.month_key(), MonthKey::from_date(monday));
        day = day.succ_opt().expect("next day");
    }
}

#[test]
fn test_month_key_parsing() {
    let m: MonthKey = "2025-02".parse().expect("valid month");
    assert_eq!((m.year(), m.month()), (2025, 2));
    assert!("2025-13".parse::<MonthKey>().is_err());
    assert!("2025-2".parse::<MonthKey>().is_err());
    assert!("2025/02".parse::<MonthKey>().is_err());
}

#[test]
fn test_month_weeks_are_the_weeks_filed_under_it() {
    let m: MonthKey = "2024-12".parse().expect("valid month");
    let weeks: Vec<String> = m.weeks().iter().map(ToString::to_string).collect();
    assert_eq!(
        weeks,
        ["2024-W49", "2024-W50", "2024-W51", "2024-W52", "2025-W01"]
    );
    assert!(m.weeks().iter().all(|w| w.month_key() == m));
}

#[test]
fn test_serde_uses_the_string_forms() {
    let w: IsoWeek = serde_json::from_str("\"2025-W36\"").expect("deserialize week");
    assert_eq!(serde_json::to_string(&w).expect("serialize"), "\"2025-W36\"");
    assert!(serde_json::from_str::<IsoWeek>("\"2025-36\"").is_err());
    assert!(serde_json::from_str::<MonthKey>("\"2025-00\"").is_err());
}

#[test]
fn test_date_helpers_file_weeks_under_the_month_of_their_monday() {
    use rworkhours::utils::date::{date_to_iso_week, month_key_from_week, week_to_monday};

    for year in [2020, 2021, 2024, 2025, 2026] {
        let last = IsoWeek::from_date(d(year, 12, 28)).week();
        for week in 1..=last {
            let raw = format!("{year}-W{week:02}");
            let monday = week_to_monday(&raw).expect("monday of a valid week");
            let w: IsoWeek = raw.parse().expect("valid week");
            assert_eq!(month_key_from_week(&w), MonthKey::from_date(monday));
            assert_eq!(date_to_iso_week(&monday.to_string()).as_deref(), Some(raw.as_str()));
        }
    }

    assert_eq!(week_to_monday("2021-W53"), None);
    assert_eq!(date_to_iso_week("2021-01-03").as_deref(), Some("2020-W53"));
    assert_eq!(date_to_iso_week("03/01/2021"), None);
}
