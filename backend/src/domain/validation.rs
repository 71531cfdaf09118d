//! Input validation shared by entry creation, inline edits and option lists.

use chrono::{DateTime, NaiveDate, Utc};
use shared::{EntryValidationError, OptionValidationError};

/// Parse user-entered amount text into a positive amount.
///
/// Strips surrounding whitespace, the currency symbol, grouping commas and
/// inner spaces before parsing.
pub fn parse_amount(input: &str, currency_symbol: &str) -> Result<f64, EntryValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(EntryValidationError::EmptyAmount);
    }

    let mut cleaned = trimmed.to_string();
    if !currency_symbol.is_empty() {
        cleaned = cleaned.replace(currency_symbol, "");
    }
    let cleaned = cleaned.replace([',', ' '], "");
    if cleaned.is_empty() {
        return Err(EntryValidationError::EmptyAmount);
    }

    let amount = cleaned
        .parse::<f64>()
        .map_err(|_| EntryValidationError::InvalidAmountFormat(trimmed.to_string()))?;
    validate_amount(amount)
}

/// Reject amounts that are not finite and strictly positive
pub fn validate_amount(amount: f64) -> Result<f64, EntryValidationError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(amount)
    } else {
        Err(EntryValidationError::AmountNotPositive)
    }
}

/// Parse a date input value (`YYYY-MM-DD`) into midnight UTC of that day
pub fn parse_entry_date(input: &str) -> Result<DateTime<Utc>, EntryValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(EntryValidationError::MissingDate);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| EntryValidationError::InvalidDate(trimmed.to_string()))
}

/// Trim an option label, rejecting blank input
pub fn clean_option_label(input: &str) -> Result<String, OptionValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(OptionValidationError::EmptyOption)
    } else {
        Ok(trimmed.to_string())
    }
}
