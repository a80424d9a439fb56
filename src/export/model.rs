// src/export/model.rs

use crate::models::entry::Entry;
use crate::models::project::ProjectOverview;
use serde::Serialize;

/// Flat entry row, with the Monday and month it is filed under.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: String,
    pub worker: String,
    pub company: String,
    pub project: String,
    pub week: String,
    pub monday: String,
    pub month: String,
    pub hours: f64,
}

impl From<&Entry> for EntryExport {
    fn from(e: &Entry) -> Self {
        Self {
            id: e.id.clone(),
            worker: e.worker.clone(),
            company: e.company.clone(),
            project: e.project.clone(),
            week: e.week.to_string(),
            monday: e.week.monday().format("%Y-%m-%d").to_string(),
            month: e.month_key().to_string(),
            hours: e.hours,
        }
    }
}

/// One row per (project, month), the shape of the "all projects" table.
#[derive(Serialize, Clone, Debug)]
pub struct ProjectExport {
    pub company: String,
    pub project: String,
    pub month: String,
    pub workers: String,
}

pub fn projects_to_rows(projects: &[ProjectOverview]) -> Vec<ProjectExport> {
    let mut out = Vec::new();
    for p in projects {
        let workers = p.workers.join(", ");
        if p.months.is_empty() {
            out.push(ProjectExport {
                company: p.company.clone(),
                project: p.name.clone(),
                month: String::new(),
                workers: workers.clone(),
            });
            continue;
        }
        for m in &p.months {
            out.push(ProjectExport {
                company: p.company.clone(),
                project: p.name.clone(),
                month: m.clone(),
                workers: workers.clone(),
            });
        }
    }
    out
}
