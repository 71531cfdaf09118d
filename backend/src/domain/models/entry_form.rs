use chrono::NaiveDate;
use shared::{AddEntryRequest, Category, EntryValidationError, OptionField};

use crate::domain::validation::{parse_amount, parse_entry_date};

/// Input buffer of a category's add-entry form.
///
/// Holds raw text exactly as typed; nothing is parsed until submission.
/// Source and type start unselected (empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    pub amount: String,
    /// `YYYY-MM-DD`, as produced by a date input
    pub date: String,
    pub source: String,
    pub income_type: String,
    pub note: String,
}

impl EntryForm {
    /// Empty form with the date preset to `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            amount: String::new(),
            date: today.format("%Y-%m-%d").to_string(),
            source: String::new(),
            income_type: String::new(),
            note: String::new(),
        }
    }

    /// Clear every field after a successful submission
    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    /// Validate the buffer in display order (amount, date, source, type)
    /// and build an add request for `category`.
    pub fn to_request(
        &self,
        category: Category,
        currency_symbol: &str,
    ) -> Result<AddEntryRequest, EntryValidationError> {
        let amount = parse_amount(&self.amount, currency_symbol)?;
        let date = parse_entry_date(&self.date)?;
        if self.source.is_empty() {
            return Err(EntryValidationError::MissingSource);
        }
        if self.income_type.is_empty() {
            return Err(EntryValidationError::MissingIncomeType);
        }

        Ok(AddEntryRequest {
            category,
            amount,
            date: Some(date),
            source: self.source.clone(),
            income_type: self.income_type.clone(),
            note: self.note.trim().to_string(),
        })
    }

    fn selection_mut(&mut self, field: OptionField) -> &mut String {
        match field {
            OptionField::Source => &mut self.source,
            OptionField::IncomeType => &mut self.income_type,
        }
    }

    /// Keep a selected label pointing at its renamed value
    pub fn follow_rename(&mut self, field: OptionField, from: &str, to: &str) {
        let selection = self.selection_mut(field);
        if *selection == from {
            *selection = to.to_string();
        }
    }

    /// Drop a selection whose label was deleted
    pub fn clear_selection(&mut self, field: OptionField, label: &str) {
        let selection = self.selection_mut(field);
        if *selection == label {
            selection.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn filled_form() -> EntryForm {
        EntryForm {
            amount: "5000".to_string(),
            date: "2025-01-01".to_string(),
            source: "Fiverr".to_string(),
            income_type: "Website".to_string(),
            note: "  landing page ".to_string(),
        }
    }

    #[test]
    fn test_new_form_defaults() {
        let form = EntryForm::new(today());
        assert_eq!(form.date, "2025-01-01");
        assert!(form.amount.is_empty());
        assert!(form.source.is_empty());
        assert!(form.income_type.is_empty());
    }

    #[test]
    fn test_to_request() {
        let request = filled_form().to_request(Category::Freelancing, "₹").unwrap();

        assert_eq!(request.amount, 5000.0);
        assert_eq!(request.date.unwrap().timestamp(), 1_735_689_600);
        assert_eq!(request.source, "Fiverr");
        assert_eq!(request.note, "landing page");
    }

    #[test]
    fn test_validation_order() {
        let mut form = EntryForm::new(today());
        assert_eq!(
            form.to_request(Category::Selling, "₹"),
            Err(EntryValidationError::EmptyAmount)
        );

        form.amount = "10".to_string();
        form.date.clear();
        assert_eq!(
            form.to_request(Category::Selling, "₹"),
            Err(EntryValidationError::MissingDate)
        );

        form.date = "2025-01-01".to_string();
        assert_eq!(
            form.to_request(Category::Selling, "₹"),
            Err(EntryValidationError::MissingSource)
        );

        form.source = "Pinterest".to_string();
        assert_eq!(
            form.to_request(Category::Selling, "₹"),
            Err(EntryValidationError::MissingIncomeType)
        );
    }

    #[test]
    fn test_reset() {
        let mut form = filled_form();
        form.reset(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());
        assert_eq!(form, EntryForm::new(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()));
    }

    #[test]
    fn test_selection_follows_option_changes() {
        let mut form = filled_form();

        form.follow_rename(OptionField::Source, "Fiverr", "Upwork");
        form.follow_rename(OptionField::IncomeType, "Fiverr", "Upwork");
        assert_eq!(form.source, "Upwork");
        assert_eq!(form.income_type, "Website");

        form.clear_selection(OptionField::IncomeType, "Website");
        assert!(form.income_type.is_empty());
        form.clear_selection(OptionField::Source, "Other");
        assert_eq!(form.source, "Upwork");
    }
}
