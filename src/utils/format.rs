use chrono::{Datelike, NaiveDate, Weekday};

/// Create a simple ASCII progress bar
pub fn progress_bar(filled: u32, total: u32, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

/// Five-cell bar for a single day's attended count
pub fn count_bar(attended: u8) -> &'static str {
    match attended {
        5.. => "█████",
        4 => "████░",
        3 => "███░░",
        2 => "██░░░",
        1 => "█░░░░",
        0 => "░░░░░",
    }
}

/// Percentage without decimals, e.g. "87%"
pub fn format_percentage(pct: f64) -> String {
    format!("{:.0}%", pct)
}

/// Two-letter weekday label for grid headers
pub fn weekday_abbrev(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}
