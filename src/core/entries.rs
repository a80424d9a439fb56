use crate::db::entries as q;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{Entry, EntryInput, HoursSummaryRow, validate_hours};
use crate::models::iso_week::{IsoWeek, MonthKey};
use std::collections::BTreeMap;

/// Filters for listing entries.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    pub month: Option<MonthKey>,
    pub worker: Option<String>,
}

impl EntryFilter {
    fn matches(&self, e: &Entry) -> bool {
        if let Some(m) = &self.month
            && e.month_key() != *m
        {
            return false;
        }
        if let Some(w) = &self.worker
            && e.worker.trim() != w.trim()
        {
            return false;
        }
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    pub month: MonthKey,
    pub rows: Vec<HoursSummaryRow>,
    pub total: f64,
}

pub struct EntriesLogic;

impl EntriesLogic {
    /// All entries ordered by id, optionally narrowed to a month and/or worker.
    pub fn list(pool: &mut DbPool, filter: &EntryFilter) -> AppResult<Vec<Entry>> {
        let all = q::load_all(&pool.conn)?;
        Ok(all.into_iter().filter(|e| filter.matches(e)).collect())
    }

    /// Validate a client collection. Items without id are dropped.
    pub fn validate(inputs: Vec<EntryInput>) -> AppResult<Vec<Entry>> {
        let mut out = Vec::with_capacity(inputs.len());
        for input in inputs {
            if let Some(e) = input.into_entry()? {
                out.push(e);
            }
        }
        Ok(out)
    }

    /// Replace the whole `entries` table with `entries`, atomically.
    ///
    /// Last writer wins: whatever was stored before is discarded.
    pub fn save_all(pool: &mut DbPool, entries: &[Entry]) -> AppResult<usize> {
        let tx = pool.conn.transaction()?;

        let removed = q::delete_all(&tx)?;
        for e in entries {
            q::insert_entry(&tx, e)?;
        }

        ttlog(
            &tx,
            "save_entries",
            "entries",
            &format!("Replaced {} entries with {}", removed, entries.len()),
        )?;

        tx.commit()?;
        Ok(entries.len())
    }

    /// Add a single entry, letting the database assign its id.
    pub fn add(
        pool: &mut DbPool,
        worker: &str,
        company: &str,
        project: &str,
        week: &IsoWeek,
        hours: f64,
    ) -> AppResult<Entry> {
        validate_hours(hours)?;

        let worker = worker.trim();
        let company = company.trim();
        let project = project.trim();
        if company.is_empty() || project.is_empty() {
            return Err(AppError::MissingFields("company, project".into()));
        }

        let id = q::insert_new_entry(&pool.conn, worker, company, project, week, hours)?;
        ttlog(
            &pool.conn,
            "add_entry",
            &id,
            &format!("{worker}: {hours}h on {company}/{project} in {week}"),
        )?;

        Ok(Entry {
            id,
            worker: worker.to_string(),
            company: company.to_string(),
            project: project.to_string(),
            week: *week,
            hours,
        })
    }

    pub fn delete(pool: &mut DbPool, id: &str) -> AppResult<()> {
        let n = q::delete_entry(&pool.conn, id)?;
        if n == 0 {
            return Err(AppError::EntryNotFound(id.to_string()));
        }
        ttlog(&pool.conn, "del_entry", id, "Entry deleted")?;
        Ok(())
    }

    /// Hours per (worker, company, project) for the entries filed under `month`.
    pub fn summary(pool: &mut DbPool, month: MonthKey) -> AppResult<MonthSummary> {
        let filter = EntryFilter {
            month: Some(month),
            worker: None,
        };
        let entries = Self::list(pool, &filter)?;
        Ok(summarize(month, &entries))
    }
}

pub fn summarize(month: MonthKey, entries: &[Entry]) -> MonthSummary {
    let mut totals: BTreeMap<(String, String, String), f64> = BTreeMap::new();
    for e in entries.iter().filter(|e| e.month_key() == month) {
        *totals
            .entry((e.worker.clone(), e.company.clone(), e.project.clone()))
            .or_insert(0.0) += e.hours;
    }

    let rows: Vec<HoursSummaryRow> = totals
        .into_iter()
        .map(|((worker, company, project), hours)| HoursSummaryRow {
            worker,
            company,
            project,
            hours,
        })
        .collect();
    let total = rows.iter().map(|r| r.hours).sum();

    MonthSummary { month, rows, total }
}
