use crate::models::iso_week::{IsoWeek, MonthKey};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Monday of an ISO week string ("YYYY-Www").
pub fn week_to_monday(week: &str) -> Option<NaiveDate> {
    week.parse::<IsoWeek>().ok().map(|w| w.monday())
}

/// Month key ("YYYY-MM") of the month containing `date`.
pub fn month_key_from_date(date: NaiveDate) -> MonthKey {
    MonthKey::from_date(date)
}

/// Month a week is filed under: the month of its Monday.
pub fn month_key_from_week(week: &IsoWeek) -> MonthKey {
    month_key_from_date(week.monday())
}

/// ISO week string of a "YYYY-MM-DD" date.
pub fn date_to_iso_week(date: &str) -> Option<String> {
    parse_date(date).map(|d| IsoWeek::from_date(d).to_string())
}

pub fn current_month() -> MonthKey {
    MonthKey::from_date(today())
}
