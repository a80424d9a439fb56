pub mod add;
pub mod assign;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod hash;
pub mod init;
pub mod list;
pub mod log;
pub mod projects;
pub mod serve;
pub mod summary;
pub mod week;
pub mod work;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Open the configured database, bringing its schema up to date first.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

pub(crate) fn cancelled() {
    info("Operation cancelled.");
}
