pub mod entry;
pub mod iso_week;
pub mod project;
pub mod work_division;
