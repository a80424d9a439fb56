pub mod colors;
pub mod date;
pub mod serde_lenient;
pub mod table;
