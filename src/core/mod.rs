pub mod auth;
pub mod entries;
pub mod export;
pub mod log;
pub mod projects;
pub mod work_division;
