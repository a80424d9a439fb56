use crate::utils::serde_lenient::{list_or_empty, opt_date, opt_number, opt_text, text_or_default};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Setup/dismantle logistics for one event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDivisionItem {
    #[serde(default, deserialize_with = "opt_number")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "text_or_default")]
    pub event_name: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub place: Option<String>,
    #[serde(default, deserialize_with = "opt_date")]
    pub event_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "opt_text")]
    pub coord_project: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub coord_prod: Option<String>,
    #[serde(default, deserialize_with = "list_or_empty")]
    pub team_setup: Vec<String>,
    #[serde(default, deserialize_with = "opt_date")]
    pub setup_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "opt_text")]
    pub setup_vehicle: Option<String>,
    #[serde(default, deserialize_with = "list_or_empty")]
    pub team_dismantle: Vec<String>,
    #[serde(default, deserialize_with = "opt_date")]
    pub dismantle_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "opt_text")]
    pub dismantle_vehicle: Option<String>,
    #[serde(default, deserialize_with = "opt_number")]
    pub nights: Option<u32>,
}
