use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Income category. Every entry belongs to exactly one, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Freelancing,
    Selling,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Freelancing, Category::Selling];

    /// Display label ("Freelancing" / "Selling")
    pub fn label(&self) -> &'static str {
        match self {
            Category::Freelancing => "Freelancing",
            Category::Selling => "Selling",
        }
    }

    /// Storage key holding this category's entry collection
    pub fn history_key(&self) -> &'static str {
        match self {
            Category::Freelancing => "freelancingHistory",
            Category::Selling => "sellingHistory",
        }
    }

    /// Lowercase identifier used in CSS classes and element ids
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Freelancing => "freelancing",
            Category::Selling => "selling",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single recorded income event.
///
/// The category is implied by the collection the entry is stored in, so it is
/// not part of the serialized shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeEntry {
    /// Opaque identifier, the only key used for edit/delete addressing
    pub id: String,
    /// Positive amount in currency units
    pub amount: f64,
    /// Day the income was received, stored as an absolute timestamp (RFC 3339)
    pub date: DateTime<Utc>,
    /// Soft reference into the category's source option list
    pub source: String,
    /// Soft reference into the category's type option list
    pub income_type: String,
    /// Free-text annotation, empty when not provided
    pub note: String,
}

impl IncomeEntry {
    /// Generate a fresh entry ID in format: "entry::<uuid v4>"
    pub fn generate_id() -> String {
        format!("entry::{}", Uuid::new_v4())
    }
}

/// An entry tagged with the category it was read from (combined history rows)
#[derive(Debug, Clone, PartialEq)]
pub struct CategorizedEntry {
    pub category: Category,
    pub entry: IncomeEntry,
}

/// Which label field of an entry an option list feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionField {
    Source,
    IncomeType,
}

/// Identifies one of the four independently maintained option lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionListKind {
    pub category: Category,
    pub field: OptionField,
}

impl OptionListKind {
    pub const ALL: [OptionListKind; 4] = [
        OptionListKind::new(Category::Freelancing, OptionField::Source),
        OptionListKind::new(Category::Freelancing, OptionField::IncomeType),
        OptionListKind::new(Category::Selling, OptionField::Source),
        OptionListKind::new(Category::Selling, OptionField::IncomeType),
    ];

    pub const fn new(category: Category, field: OptionField) -> Self {
        Self { category, field }
    }

    /// Storage key for this list, e.g. "freelancingSourceOptions"
    pub fn storage_key(&self) -> &'static str {
        match (self.category, self.field) {
            (Category::Freelancing, OptionField::Source) => "freelancingSourceOptions",
            (Category::Freelancing, OptionField::IncomeType) => "freelancingTypeOptions",
            (Category::Selling, OptionField::Source) => "sellingSourceOptions",
            (Category::Selling, OptionField::IncomeType) => "sellingTypeOptions",
        }
    }

    /// Title of the option management modal for this list
    pub fn title(&self) -> String {
        let noun = match self.field {
            OptionField::Source => "Sources",
            OptionField::IncomeType => "Types",
        };
        format!("Modify {} {}", self.category.label(), noun)
    }
}

/// Request for adding an income entry (already parsed from form input)
#[derive(Debug, Clone, PartialEq)]
pub struct AddEntryRequest {
    pub category: Category,
    pub amount: f64,
    /// `None` when the user has not picked a date
    pub date: Option<DateTime<Utc>>,
    pub source: String,
    pub income_type: String,
    pub note: String,
}

/// Remaining time until the goal deadline, every component zero-padded to width 2
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownValue {
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub passed: bool,
}

impl CountdownValue {
    /// Value shown once the deadline is behind us
    pub fn passed() -> Self {
        Self {
            days: "00".to_string(),
            hours: "00".to_string(),
            minutes: "00".to_string(),
            seconds: "00".to_string(),
            passed: true,
        }
    }
}

/// Validation errors for income entry input
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EntryValidationError {
    #[error("Please enter an amount.")]
    EmptyAmount,
    #[error("Please enter a valid positive number ({0}).")]
    InvalidAmountFormat(String),
    #[error("Please enter a valid positive number for income.")]
    AmountNotPositive,
    #[error("Please select a date.")]
    MissingDate,
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Please select a source.")]
    MissingSource,
    #[error("Please select a type.")]
    MissingIncomeType,
}

/// Validation errors for option list management
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptionValidationError {
    #[error("Option cannot be empty.")]
    EmptyOption,
    #[error("Option \"{0}\" already exists.")]
    DuplicateOption(String),
    #[error("Cannot delete the last option. At least one option must remain.")]
    LastOption,
    #[error("Option \"{0}\" does not exist.")]
    UnknownOption(String),
}

/// Default labels for the four option lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DefaultOptions {
    pub freelancing_sources: Vec<String>,
    pub freelancing_types: Vec<String>,
    pub selling_sources: Vec<String>,
    pub selling_types: Vec<String>,
}

impl DefaultOptions {
    pub fn for_kind(&self, kind: OptionListKind) -> &[String] {
        match (kind.category, kind.field) {
            (Category::Freelancing, OptionField::Source) => &self.freelancing_sources,
            (Category::Freelancing, OptionField::IncomeType) => &self.freelancing_types,
            (Category::Selling, OptionField::Source) => &self.selling_sources,
            (Category::Selling, OptionField::IncomeType) => &self.selling_types,
        }
    }
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

impl Default for DefaultOptions {
    fn default() -> Self {
        Self {
            freelancing_sources: labels(&[
                "Fiverr",
                "Upwork",
                "Social Media",
                "Email",
                "DM",
                "Referral",
                "Others",
            ]),
            freelancing_types: labels(&[
                "2D Marketing Ad",
                "Colouring Book",
                "Web App",
                "Website",
                "Others",
            ]),
            selling_sources: labels(&["Pinterest", "Others"]),
            selling_types: labels(&["Colouring Book"]),
        }
    }
}

/// Application configuration: goals, deadline and interaction tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackerConfig {
    pub overall_goal: f64,
    pub freelancing_goal: f64,
    pub selling_goal: f64,
    /// Goal deadline the home countdown runs towards
    pub deadline: DateTime<Utc>,
    pub currency_symbol: String,
    pub long_press_threshold_ms: u32,
    pub countdown_interval_ms: u32,
    /// Notes longer than this are shortened in history tables
    pub note_preview_chars: usize,
    pub default_options: DefaultOptions,
}

impl TrackerConfig {
    /// Goal target for a category tab
    pub fn goal_for(&self, category: Category) -> f64 {
        match category {
            Category::Freelancing => self.freelancing_goal,
            Category::Selling => self.selling_goal,
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            overall_goal: 10_000_000.0,
            freelancing_goal: 5_000_000.0,
            selling_goal: 5_000_000.0,
            // 2026-12-31T23:59:59Z
            deadline: DateTime::from_timestamp(1_798_761_599, 0).unwrap_or_default(),
            currency_symbol: "₹".to_string(),
            long_press_threshold_ms: 500,
            countdown_interval_ms: 1000,
            note_preview_chars: 30,
            default_options: DefaultOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_entry_id() {
        let first = IncomeEntry::generate_id();
        let second = IncomeEntry::generate_id();

        assert!(first.starts_with("entry::"));
        assert_ne!(first, second);
    }

    #[test]
    fn test_entry_serializes_with_camel_case_fields() {
        let entry = IncomeEntry {
            id: "entry::1".to_string(),
            amount: 5000.0,
            date: DateTime::from_timestamp(1_735_689_600, 0).unwrap(),
            source: "Fiverr".to_string(),
            income_type: "Website".to_string(),
            note: String::new(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["incomeType"], "Website");
        assert_eq!(json["date"], "2025-01-01T00:00:00Z");
        assert!(json.get("income_type").is_none());
    }

    #[test]
    fn test_entry_accepts_javascript_iso_dates() {
        let json = r#"{"id":"1","amount":12.5,"date":"2025-01-01T00:00:00.000Z","source":"DM","incomeType":"Web App","note":"","type":"freelancing"}"#;
        let entry: IncomeEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.date.timestamp(), 1_735_689_600);
        assert_eq!(entry.income_type, "Web App");
    }

    #[test]
    fn test_option_list_storage_keys() {
        let keys: Vec<&str> = OptionListKind::ALL.iter().map(|k| k.storage_key()).collect();
        assert_eq!(
            keys,
            vec![
                "freelancingSourceOptions",
                "freelancingTypeOptions",
                "sellingSourceOptions",
                "sellingTypeOptions",
            ]
        );
    }

    #[test]
    fn test_option_list_titles() {
        let kind = OptionListKind::new(Category::Selling, OptionField::IncomeType);
        assert_eq!(kind.title(), "Modify Selling Types");
    }

    #[test]
    fn test_default_config() {
        let config = TrackerConfig::default();

        assert_eq!(config.overall_goal, 10_000_000.0);
        assert_eq!(config.goal_for(Category::Freelancing), 5_000_000.0);
        assert_eq!(config.deadline.to_rfc3339(), "2026-12-31T23:59:59+00:00");
        assert_eq!(config.long_press_threshold_ms, 500);
        assert_eq!(config.default_options.selling_types, vec!["Colouring Book".to_string()]);
    }

    #[test]
    fn test_partial_config_takes_defaults() {
        let config: TrackerConfig = serde_json::from_str(r#"{"overallGoal": 42.0}"#).unwrap();

        assert_eq!(config.overall_goal, 42.0);
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.default_options, DefaultOptions::default());
    }
}
