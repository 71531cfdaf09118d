//! Option list management on the ledger.
//!
//! Each operation validates against the current list, persists only the list
//! it touched, and never rewrites stored entries: an entry's source and type
//! are plain labels that keep their value when the option changes.

use log::{info, warn};
use shared::OptionListKind;

use crate::domain::errors::{LedgerError, LedgerResult};
use crate::domain::ledger_service::LedgerService;
use crate::domain::models::RenameOutcome;
use crate::storage::KeyValueStore;

impl<S: KeyValueStore> LedgerService<S> {
    /// Add a label to a list. Returns the stored (trimmed) label.
    pub fn add_option(&mut self, kind: OptionListKind, input: &str) -> LedgerResult<String> {
        let mut updated = self.options(kind).clone();
        let label = updated.add(input).map_err(|e| rejected(kind, e))?;
        self.commit_options(kind, updated)?;

        info!("Added option {:?} to {}", label, kind.storage_key());
        Ok(label)
    }

    /// Rename a label. Renaming to the same value changes nothing and
    /// writes nothing.
    pub fn rename_option(
        &mut self,
        kind: OptionListKind,
        original: &str,
        input: &str,
    ) -> LedgerResult<RenameOutcome> {
        let mut updated = self.options(kind).clone();
        let outcome = updated
            .rename(original, input)
            .map_err(|e| rejected(kind, e))?;

        if let RenameOutcome::Renamed { from, to } = &outcome {
            self.commit_options(kind, updated)?;
            info!("Renamed option {:?} to {:?} in {}", from, to, kind.storage_key());
        }
        Ok(outcome)
    }

    /// Remove a label. The last label of a list cannot be removed.
    pub fn delete_option(&mut self, kind: OptionListKind, label: &str) -> LedgerResult<()> {
        let mut updated = self.options(kind).clone();
        updated.delete(label).map_err(|e| rejected(kind, e))?;
        self.commit_options(kind, updated)?;

        info!("Deleted option {:?} from {}", label, kind.storage_key());
        Ok(())
    }
}

fn rejected(kind: OptionListKind, error: shared::OptionValidationError) -> LedgerError {
    warn!("Option change rejected for {}: {}", kind.storage_key(), error);
    LedgerError::Option(error)
}
