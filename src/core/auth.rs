//! Single shared password check for the web front end.
//!
//! The stored value is a bcrypt hash (PHP `password_hash` output with the
//! `$2y$` prefix verifies as well). Nothing here ever returns the hash.

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Environment fallback used when the config file carries no hash.
pub const PASS_HASH_ENV: &str = "APP_PASS_HASH";

/// Configured hash: config file first, then the environment.
pub fn resolve_hash(cfg: &Config) -> Option<String> {
    cfg.app_pass_hash
        .as_deref()
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_string)
        .or_else(|| {
            std::env::var(PASS_HASH_ENV)
                .ok()
                .map(|h| h.trim().to_string())
                .filter(|h| !h.is_empty())
        })
}

/// `Ok(true)` iff `password` matches `hash`.
///
/// A hash that cannot be parsed is a configuration problem, not a failed login.
pub fn verify_password(password: &str, hash: Option<&str>) -> AppResult<bool> {
    let hash = hash.ok_or(AppError::PasswordHashNotSet)?;
    match bcrypt::verify(password, hash) {
        Ok(ok) => Ok(ok),
        Err(e) => Err(AppError::Config(format!("stored password hash is unusable: {e}"))),
    }
}

pub fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    if password.is_empty() {
        return Err(AppError::MissingFields("password".into()));
    }
    Ok(bcrypt::hash(password, cost)?)
}
