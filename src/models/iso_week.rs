//! ISO-8601 week identifiers ("YYYY-Www") and calendar month keys ("YYYY-MM").
//!
//! Weeks start on Monday and week 1 is the week holding the year's first
//! Thursday. Entries and project assignments are bucketed by the month that
//! contains the Monday of their week.

use crate::errors::AppError;
use chrono::{Datelike, NaiveDate, Weekday};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static WEEK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-W(\d{1,2})$").expect("valid week regex"));

static MONTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})$").expect("valid month regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IsoWeek {
    year: i32,
    week: u32,
}

impl IsoWeek {
    /// Build a week, checking it exists in the given ISO year.
    pub fn new(year: i32, week: u32) -> Option<Self> {
        NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).map(|_| Self { year, week })
    }

    /// The ISO week a calendar date belongs to (may be in the previous or next year).
    pub fn from_date(date: NaiveDate) -> Self {
        let w = date.iso_week();
        Self {
            year: w.year(),
            week: w.week(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn week(&self) -> u32 {
        self.week
    }

    pub fn monday(&self) -> NaiveDate {
        // constructor guarantees the week exists
        NaiveDate::from_isoywd_opt(self.year, self.week, Weekday::Mon).unwrap_or(NaiveDate::MIN)
    }

    pub fn sunday(&self) -> NaiveDate {
        NaiveDate::from_isoywd_opt(self.year, self.week, Weekday::Sun).unwrap_or(NaiveDate::MIN)
    }

    /// Month the week is filed under.
    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.monday())
    }
}

impl fmt::Display for IsoWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}", self.year, self.week)
    }
}

impl FromStr for IsoWeek {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let caps = WEEK_RE
            .captures(trimmed)
            .ok_or_else(|| AppError::InvalidWeek(s.to_string()))?;

        let year: i32 = caps[1]
            .parse()
            .map_err(|_| AppError::InvalidWeek(s.to_string()))?;
        let week: u32 = caps[2]
            .parse()
            .map_err(|_| AppError::InvalidWeek(s.to_string()))?;

        IsoWeek::new(year, week).ok_or_else(|| AppError::InvalidWeek(s.to_string()))
    }
}

impl TryFrom<String> for IsoWeek {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<IsoWeek> for String {
    fn from(w: IsoWeek) -> Self {
        w.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Every ISO week whose Monday falls inside this month, in order.
    pub fn weeks(&self) -> Vec<IsoWeek> {
        let first = self.first_day();
        let offset = (7 - first.weekday().num_days_from_monday()) % 7;

        let mut out = Vec::new();
        let mut monday = first + chrono::Days::new(u64::from(offset));
        while self.contains(monday) {
            out.push(IsoWeek::from_date(monday));
            monday = monday + chrono::Days::new(7);
        }
        out
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let caps = MONTH_RE
            .captures(trimmed)
            .ok_or_else(|| AppError::InvalidMonthKey(s.to_string()))?;

        let year: i32 = caps[1]
            .parse()
            .map_err(|_| AppError::InvalidMonthKey(s.to_string()))?;
        let month: u32 = caps[2]
            .parse()
            .map_err(|_| AppError::InvalidMonthKey(s.to_string()))?;

        MonthKey::new(year, month).ok_or_else(|| AppError::InvalidMonthKey(s.to_string()))
    }
}

impl TryFrom<String> for MonthKey {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthKey> for String {
    fn from(m: MonthKey) -> Self {
        m.to_string()
    }
}
