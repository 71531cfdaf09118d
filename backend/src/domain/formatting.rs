//! Display formatting for amounts, dates, notes and goal progress.
//!
//! All functions here are pure so the frontend and tests see identical output.

use chrono::{DateTime, NaiveDate, Utc};

/// Format an amount as whole currency units with Indian digit grouping.
///
/// ```
/// use backend::domain::formatting::format_currency;
/// assert_eq!(format_currency(1234567.0, "₹"), "₹12,34,567");
/// assert_eq!(format_currency(-500.4, "₹"), "-₹500");
/// ```
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{}{}{}", sign, symbol, group_indian(&digits))
}

/// Insert separators as 12,34,56,789: the last three digits, then pairs
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Entry date as shown in history tables (DD/MM/YYYY)
pub fn format_entry_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Long form of a day for the home header, e.g. "Wednesday, January 1, 2025"
pub fn format_long_date(day: NaiveDate) -> String {
    day.format("%A, %B %-d, %Y").to_string()
}

/// Shorten a note for table display. Empty notes render as "-".
pub fn truncate_note(note: &str, max_chars: usize) -> String {
    if note.is_empty() {
        return "-".to_string();
    }
    if note.chars().count() <= max_chars {
        return note.to_string();
    }
    let kept: String = note.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Share of a goal reached, capped at 100
pub fn progress_percentage(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (current / target * 100.0).min(100.0)
}
