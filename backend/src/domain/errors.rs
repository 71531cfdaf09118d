use shared::{Category, EntryValidationError, OptionValidationError};

/// Errors surfaced by ledger and controller operations
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] EntryValidationError),
    #[error(transparent)]
    Option(#[from] OptionValidationError),
    #[error("No {category} entry with id {id}")]
    EntryNotFound { id: String, category: Category },
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl LedgerError {
    /// True for errors caused by user input rather than storage
    pub fn is_validation(&self) -> bool {
        matches!(self, LedgerError::Validation(_) | LedgerError::Option(_))
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;
