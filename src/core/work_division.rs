use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::work_division as q;
use crate::errors::{AppError, AppResult};
use crate::models::work_division::WorkDivisionItem;

pub struct WorkDivisionLogic;

impl WorkDivisionLogic {
    /// Items ordered by event date, event name, id.
    pub fn list(pool: &mut DbPool) -> AppResult<Vec<WorkDivisionItem>> {
        q::load_all(&pool.conn)
    }

    /// Overwrite the table with `items`. Stored ids are reassigned.
    pub fn save_all(pool: &mut DbPool, items: &[WorkDivisionItem]) -> AppResult<usize> {
        let tx = pool.conn.transaction()?;

        let removed = q::delete_all(&tx)?;
        for item in items {
            q::insert_item(&tx, item)?;
        }

        ttlog(
            &tx,
            "save_work_division",
            "work_division",
            &format!("Replaced {} items with {}", removed, items.len()),
        )?;

        tx.commit()?;
        Ok(items.len())
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        if q::delete_item(&pool.conn, id)? == 0 {
            return Err(AppError::ItemNotFound(id));
        }
        ttlog(
            &pool.conn,
            "del_work_division",
            &id.to_string(),
            "Work division item deleted",
        )?;
        Ok(())
    }
}
