use crate::errors::{AppError, AppResult};
use crate::models::iso_week::{IsoWeek, MonthKey};
use crate::utils::serde_lenient::{opt_number, opt_text};
use serde::{Deserialize, Serialize};

/// One block of hours logged by a worker against a company/project in an ISO week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub worker: String,
    pub company: String,
    pub project: String,
    pub week: IsoWeek,
    pub hours: f64,
}

impl Entry {
    pub fn month_key(&self) -> MonthKey {
        self.week.month_key()
    }
}

/// Entry as sent by a client on "save all".
///
/// Every field is optional on the wire; items without an `id` are skipped,
/// missing text fields become empty strings and missing hours become zero.
/// Ids are opaque text (`"h1734567890123"`); numeric ids are kept as their
/// decimal string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryInput {
    #[serde(default, deserialize_with = "opt_text")]
    pub id: Option<String>,
    #[serde(default)]
    pub worker: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub week: Option<String>,
    #[serde(default, deserialize_with = "opt_number")]
    pub hours: Option<f64>,
}

impl EntryInput {
    /// Validate into an [`Entry`]; `Ok(None)` when the item carries no id.
    pub fn into_entry(self) -> AppResult<Option<Entry>> {
        let Some(id) = self.id.filter(|id| !id.trim().is_empty()) else {
            return Ok(None);
        };

        let week_raw = self.week.unwrap_or_default();
        let week: IsoWeek = week_raw.parse()?;

        let hours = self.hours.unwrap_or(0.0);
        validate_hours(hours)?;

        Ok(Some(Entry {
            id,
            worker: self.worker.unwrap_or_default(),
            company: self.company.unwrap_or_default(),
            project: self.project.unwrap_or_default(),
            week,
            hours,
        }))
    }
}

pub fn validate_hours(hours: f64) -> AppResult<()> {
    if !hours.is_finite() || hours < 0.0 {
        return Err(AppError::InvalidHours(hours.to_string()));
    }
    Ok(())
}

/// Hours total for one (worker, company, project) in a month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoursSummaryRow {
    pub worker: String,
    pub company: String,
    pub project: String,
    pub hours: f64,
}
