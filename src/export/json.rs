use crate::errors::AppResult;
use serde::Serialize;
use std::path::Path;

/// Write rows as pretty-printed JSON.
pub fn write_json<T: Serialize>(path: &Path, rows: &[T]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    Ok(())
}
