use crate::db::entries as entries_q;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::projects as q;
use crate::errors::{AppError, AppResult};
use crate::models::iso_week::{IsoWeek, MonthKey};
use crate::models::project::{ProjectOverview, ProjectRef, ProjectsConfig};
use std::collections::{BTreeMap, BTreeSet};

/// Assignment config after trimming and validation, keyed by project.
#[derive(Debug, Default)]
struct NormalizedConfig {
    months: BTreeMap<ProjectRef, Vec<MonthKey>>,
    workers: BTreeMap<ProjectRef, Vec<String>>,
}

impl NormalizedConfig {
    fn from_config(cfg: &ProjectsConfig) -> AppResult<Self> {
        let mut out = NormalizedConfig::default();

        for (company, months) in &cfg.projects_by_company {
            for (month_key, names) in months {
                let mk = month_key.trim();
                if mk.is_empty() {
                    continue;
                }
                let month: MonthKey = mk.parse()?;
                for name in names {
                    let Some(key) = ProjectRef::normalized(company, name) else {
                        continue;
                    };
                    let list = out.months.entry(key).or_default();
                    if !list.contains(&month) {
                        list.push(month);
                    }
                }
            }
        }

        for (company, projects) in &cfg.project_workers {
            for (name, workers) in projects {
                let Some(key) = ProjectRef::normalized(company, name) else {
                    continue;
                };
                let list = out.workers.entry(key).or_default();
                for w in workers {
                    let w = w.trim();
                    if !w.is_empty() && !list.iter().any(|x| x == w) {
                        list.push(w.to_string());
                    }
                }
            }
        }

        Ok(out)
    }

    fn project_set(&self) -> BTreeSet<&ProjectRef> {
        self.months.keys().chain(self.workers.keys()).collect()
    }
}

pub struct ProjectsLogic;

impl ProjectsLogic {
    /// Current assignment config, grouped the way clients consume it.
    pub fn load_config(pool: &mut DbPool) -> AppResult<ProjectsConfig> {
        let mut cfg = ProjectsConfig::default();

        for (company, project, month) in q::load_project_months(&pool.conn)? {
            let list = cfg
                .projects_by_company
                .entry(company)
                .or_default()
                .entry(month)
                .or_default();
            if !list.contains(&project) {
                list.push(project);
            }
        }

        for (company, project, worker) in q::load_project_workers(&pool.conn)? {
            let list = cfg
                .project_workers
                .entry(company)
                .or_default()
                .entry(project)
                .or_default();
            if !list.contains(&worker) {
                list.push(worker);
            }
        }

        Ok(cfg)
    }

    /// Persist a full assignment config.
    ///
    /// Projects referenced by the config are created when missing and are
    /// never removed here. Month and worker relations are replaced wholesale.
    pub fn save_config(pool: &mut DbPool, cfg: &ProjectsConfig) -> AppResult<()> {
        let normalized = NormalizedConfig::from_config(cfg)?;

        let tx = pool.conn.transaction()?;

        let mut ids: BTreeMap<&ProjectRef, i64> = BTreeMap::new();
        for key in normalized.project_set() {
            let id = q::ensure_project(&tx, &key.company, &key.project)?;
            ids.insert(key, id);
        }

        q::clear_relations(&tx)?;

        let mut month_rows = 0usize;
        for (key, months) in &normalized.months {
            let Some(id) = ids.get(key) else { continue };
            for m in months {
                q::insert_month(&tx, *id, &m.to_string())?;
                month_rows += 1;
            }
        }

        let mut worker_rows = 0usize;
        for (key, workers) in &normalized.workers {
            let Some(id) = ids.get(key) else { continue };
            for w in workers {
                q::insert_worker(&tx, *id, w)?;
                worker_rows += 1;
            }
        }

        ttlog(
            &tx,
            "save_projects",
            "projects",
            &format!(
                "{} projects, {} month assignments, {} worker assignments",
                ids.len(),
                month_rows,
                worker_rows
            ),
        )?;

        tx.commit()?;
        Ok(())
    }

    /// Delete a project, its assignments and every entry logged against it.
    /// Returns how many entries were removed.
    pub fn delete(pool: &mut DbPool, company: &str, project: &str) -> AppResult<usize> {
        let key = ProjectRef::normalized(company, project)
            .ok_or_else(|| AppError::MissingFields("company, project".into()))?;

        let id = q::find_project_id(&pool.conn, &key.company, &key.project)?.ok_or_else(|| {
            AppError::ProjectNotFound {
                company: key.company.clone(),
                project: key.project.clone(),
            }
        })?;

        let tx = pool.conn.transaction()?;
        q::delete_project_rows(&tx, id)?;
        let removed = entries_q::delete_for_project(&tx, &key.company, &key.project)?;
        ttlog(
            &tx,
            "del_project",
            &format!("{}/{}", key.company, key.project),
            &format!("Project deleted with {removed} entries"),
        )?;
        tx.commit()?;

        Ok(removed)
    }

    /// Projects open for `week`: assigned to the month of its Monday and, when
    /// a worker is given, either assigned to that worker or to nobody.
    pub fn projects_for_week(
        pool: &mut DbPool,
        week: &IsoWeek,
        worker: Option<&str>,
    ) -> AppResult<Vec<ProjectRef>> {
        let cfg = Self::load_config(pool)?;
        Ok(projects_for_month(&cfg, week.month_key(), worker))
    }

    /// Every project with its months and workers, optionally only those assigned to `month`.
    pub fn list(pool: &mut DbPool, month: Option<MonthKey>) -> AppResult<Vec<ProjectOverview>> {
        let cfg = Self::load_config(pool)?;

        let mut months: BTreeMap<(String, String), Vec<String>> = BTreeMap::new();
        for (company, by_month) in &cfg.projects_by_company {
            for (m, names) in by_month {
                for n in names {
                    months
                        .entry((company.clone(), n.clone()))
                        .or_default()
                        .push(m.clone());
                }
            }
        }

        let wanted = month.map(|m| m.to_string());
        let mut out = Vec::new();
        for p in q::load_projects(&pool.conn)? {
            let key = (p.company.clone(), p.name.clone());
            let mut project_months = months.remove(&key).unwrap_or_default();
            project_months.sort();

            if let Some(w) = &wanted
                && !project_months.contains(w)
            {
                continue;
            }

            let workers = cfg
                .project_workers
                .get(&p.company)
                .and_then(|m| m.get(&p.name))
                .cloned()
                .unwrap_or_default();

            out.push(ProjectOverview {
                id: p.id,
                company: p.company,
                name: p.name,
                months: project_months,
                workers,
            });
        }
        Ok(out)
    }

    /// Add `month` (and optionally workers) to a project's assignments,
    /// creating the project when needed, then save the whole config.
    pub fn assign(
        pool: &mut DbPool,
        company: &str,
        project: &str,
        month: MonthKey,
        workers: &[String],
    ) -> AppResult<()> {
        let key = ProjectRef::normalized(company, project)
            .ok_or_else(|| AppError::MissingFields("company, project".into()))?;

        let mut cfg = Self::load_config(pool)?;

        let names = cfg
            .projects_by_company
            .entry(key.company.clone())
            .or_default()
            .entry(month.to_string())
            .or_default();
        if !names.contains(&key.project) {
            names.push(key.project.clone());
        }

        if !workers.is_empty() {
            let assigned = cfg
                .project_workers
                .entry(key.company.clone())
                .or_default()
                .entry(key.project.clone())
                .or_default();
            for w in workers {
                let w = w.trim().to_string();
                if !w.is_empty() && !assigned.contains(&w) {
                    assigned.push(w);
                }
            }
        }

        Self::save_config(pool, &cfg)
    }
}

pub fn projects_for_month(
    cfg: &ProjectsConfig,
    month: MonthKey,
    worker: Option<&str>,
) -> Vec<ProjectRef> {
    let month = month.to_string();
    let worker = worker.map(str::trim).filter(|w| !w.is_empty());

    let mut out = Vec::new();
    for (company, by_month) in &cfg.projects_by_company {
        let Some(names) = by_month.get(&month) else {
            continue;
        };
        for name in names {
            if let Some(w) = worker {
                let assigned = cfg.project_workers.get(company).and_then(|p| p.get(name));
                if let Some(list) = assigned
                    && !list.is_empty()
                    && !list.iter().any(|x| x == w)
                {
                    continue;
                }
            }
            out.push(ProjectRef {
                company: company.clone(),
                project: name.clone(),
            });
        }
    }
    out
}
