use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use std::sync::{Arc, Mutex};

/// Shared state of the HTTP server.
///
/// SQLite work is serialized through one connection and always executed on
/// the blocking thread pool.
#[derive(Clone)]
pub struct AppState {
    pool: Arc<Mutex<DbPool>>,
    pass_hash: Option<Arc<str>>,
}

impl AppState {
    pub fn new(pool: DbPool, pass_hash: Option<String>) -> Self {
        Self {
            pool: Arc::new(Mutex::new(pool)),
            pass_hash: pass_hash.map(Arc::from),
        }
    }

    pub fn pass_hash(&self) -> Option<&str> {
        self.pass_hash.as_deref()
    }

    /// Run `f` against the database on the blocking pool.
    pub async fn with_db<F, T>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut DbPool) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = Arc::clone(&self.pool);
        tokio::task::spawn_blocking(move || {
            let mut guard = pool
                .lock()
                .map_err(|_| AppError::Other("database mutex poisoned".into()))?;
            f(&mut guard)
        })
        .await
        .map_err(|e| AppError::Server(format!("database task failed: {e}")))?
    }
}
