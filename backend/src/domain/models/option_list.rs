use serde::{Deserialize, Serialize};
use shared::OptionValidationError;

use crate::domain::validation::clean_option_label;

/// Result of a rename request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The label was replaced and the list re-sorted
    Renamed { from: String, to: String },
    /// The new value equals the old one; nothing changed
    Unchanged,
}

/// Ordered set of unique, case-sensitive labels that is never empty.
///
/// Lists loaded from storage keep their stored order; every add or rename
/// re-sorts the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionList {
    labels: Vec<String>,
}

impl OptionList {
    /// Build a list from stored labels, dropping blanks and repeats.
    /// Returns `None` if nothing usable remains.
    pub fn from_labels<I, T>(labels: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for label in labels {
            let label = label.into();
            if !label.trim().is_empty() && !unique.contains(&label) {
                unique.push(label);
            }
        }
        if unique.is_empty() {
            None
        } else {
            Some(Self { labels: unique })
        }
    }

    /// A list holding exactly one label
    pub fn single(label: impl Into<String>) -> Self {
        Self {
            labels: vec![label.into()],
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|existing| existing == label)
    }

    /// Add a label and re-sort. Returns the stored (trimmed) label.
    pub fn add(&mut self, input: &str) -> Result<String, OptionValidationError> {
        let label = clean_option_label(input)?;
        if self.contains(&label) {
            return Err(OptionValidationError::DuplicateOption(label));
        }
        self.labels.push(label.clone());
        self.labels.sort();
        Ok(label)
    }

    /// Replace `original` with `input` and re-sort
    pub fn rename(
        &mut self,
        original: &str,
        input: &str,
    ) -> Result<RenameOutcome, OptionValidationError> {
        let label = clean_option_label(input)?;
        let Some(position) = self.labels.iter().position(|existing| existing == original) else {
            return Err(OptionValidationError::UnknownOption(original.to_string()));
        };
        if label == original {
            return Ok(RenameOutcome::Unchanged);
        }
        if self.contains(&label) {
            return Err(OptionValidationError::DuplicateOption(label));
        }

        self.labels[position] = label.clone();
        self.labels.sort();
        Ok(RenameOutcome::Renamed {
            from: original.to_string(),
            to: label,
        })
    }

    /// Remove a label. The last remaining label can never be removed.
    pub fn delete(&mut self, label: &str) -> Result<(), OptionValidationError> {
        if self.labels.len() <= 1 {
            return Err(OptionValidationError::LastOption);
        }
        let Some(position) = self.labels.iter().position(|existing| existing == label) else {
            return Err(OptionValidationError::UnknownOption(label.to_string()));
        };
        self.labels.remove(position);
        Ok(())
    }
}
