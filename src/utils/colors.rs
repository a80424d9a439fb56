/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Greyed placeholder for an empty field, the value itself otherwise.
pub fn colorize_optional(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => format!("{GREY}--{RESET}"),
    }
}

/// Hours coloured by magnitude: zero grey, otherwise green.
pub fn colorize_hours(hours: f64) -> String {
    if hours == 0.0 {
        format!("{GREY}{hours:.2}{RESET}")
    } else {
        format!("{GREEN}{hours:.2}{RESET}")
    }
}
