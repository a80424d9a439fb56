use crate::utils::serde_lenient::nested_lists;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// company -> month key -> project names
pub type ProjectsByCompany = BTreeMap<String, BTreeMap<String, Vec<String>>>;

/// company -> project name -> workers
pub type ProjectWorkers = BTreeMap<String, BTreeMap<String, Vec<String>>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: i64,
    pub company: String,
    pub name: String,
}

/// A project with its month and worker assignments, for listings and exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectOverview {
    pub id: i64,
    pub company: String,
    pub name: String,
    pub months: Vec<String>,
    pub workers: Vec<String>,
}

/// Reference to a project by its natural key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ProjectRef {
    pub company: String,
    pub project: String,
}

impl ProjectRef {
    /// Trimmed key, or `None` when either part is blank.
    pub fn normalized(company: &str, project: &str) -> Option<Self> {
        let company = company.trim();
        let project = project.trim();
        if company.is_empty() || project.is_empty() {
            return None;
        }
        Some(Self {
            company: company.to_string(),
            project: project.to_string(),
        })
    }
}

/// Whole assignment configuration, exchanged as a single document.
///
/// Month or worker lists that are not arrays are dropped on decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsConfig {
    #[serde(deserialize_with = "nested_lists")]
    pub projects_by_company: ProjectsByCompany,
    #[serde(default, deserialize_with = "nested_lists")]
    pub project_workers: ProjectWorkers,
}
