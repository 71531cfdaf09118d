//! Ledger store for the income tracker.
//!
//! Owns both entry collections and the four option lists, hydrated from
//! storage on load and written through on every mutation. Each mutation is
//! validated first, then persisted, then applied in memory, so a failed write
//! leaves the in-memory ledger matching what is stored.

use log::{debug, info, warn};
use shared::{
    AddEntryRequest, CategorizedEntry, Category, EntryValidationError, IncomeEntry,
    OptionListKind, TrackerConfig,
};

use crate::domain::errors::{LedgerError, LedgerResult};
use crate::domain::models::OptionList;
use crate::domain::validation::validate_amount;
use crate::storage::{KeyValueStore, LedgerRepository};

/// Label kept when neither stored nor configured options are usable
const LAST_RESORT_OPTION: &str = "Others";

/// The four option lists, one per category and field
#[derive(Debug, Clone, PartialEq)]
struct OptionLists {
    freelancing_sources: OptionList,
    freelancing_types: OptionList,
    selling_sources: OptionList,
    selling_types: OptionList,
}

impl OptionLists {
    fn get(&self, kind: OptionListKind) -> &OptionList {
        use shared::OptionField::*;
        match (kind.category, kind.field) {
            (Category::Freelancing, Source) => &self.freelancing_sources,
            (Category::Freelancing, IncomeType) => &self.freelancing_types,
            (Category::Selling, Source) => &self.selling_sources,
            (Category::Selling, IncomeType) => &self.selling_types,
        }
    }

    fn get_mut(&mut self, kind: OptionListKind) -> &mut OptionList {
        use shared::OptionField::*;
        match (kind.category, kind.field) {
            (Category::Freelancing, Source) => &mut self.freelancing_sources,
            (Category::Freelancing, IncomeType) => &mut self.freelancing_types,
            (Category::Selling, Source) => &mut self.selling_sources,
            (Category::Selling, IncomeType) => &mut self.selling_types,
        }
    }
}

pub struct LedgerService<S: KeyValueStore> {
    repository: LedgerRepository<S>,
    config: TrackerConfig,
    freelancing: Vec<IncomeEntry>,
    selling: Vec<IncomeEntry>,
    options: OptionLists,
}

impl<S: KeyValueStore> LedgerService<S> {
    /// Hydrate the ledger from `store`, using the stored configuration
    /// override when there is one
    pub fn load(store: S) -> LedgerResult<Self> {
        let repository = LedgerRepository::new(store);
        let config = repository.load_config()?.unwrap_or_default();
        Self::hydrate(repository, config)
    }

    /// Hydrate the ledger from `store` with an explicit configuration
    pub fn load_with_config(store: S, config: TrackerConfig) -> LedgerResult<Self> {
        Self::hydrate(LedgerRepository::new(store), config)
    }

    /// Missing or unusable option lists fall back to the configured defaults.
    /// Nothing is written until the first mutation.
    fn hydrate(repository: LedgerRepository<S>, config: TrackerConfig) -> LedgerResult<Self> {
        let freelancing = repository.load_history(Category::Freelancing)?;
        let selling = repository.load_history(Category::Selling)?;

        let load_list = |kind: OptionListKind| -> LedgerResult<OptionList> {
            let stored = repository.load_options(kind)?.and_then(OptionList::from_labels);
            Ok(stored.unwrap_or_else(|| default_list(&config, kind)))
        };
        let options = OptionLists {
            freelancing_sources: load_list(OptionListKind::ALL[0])?,
            freelancing_types: load_list(OptionListKind::ALL[1])?,
            selling_sources: load_list(OptionListKind::ALL[2])?,
            selling_types: load_list(OptionListKind::ALL[3])?,
        };

        info!(
            "Ledger loaded: {} freelancing, {} selling entries",
            freelancing.len(),
            selling.len()
        );
        Ok(Self {
            repository,
            config,
            freelancing,
            selling,
            options,
        })
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Entries of a category in insertion order
    pub fn entries(&self, category: Category) -> &[IncomeEntry] {
        match category {
            Category::Freelancing => &self.freelancing,
            Category::Selling => &self.selling,
        }
    }

    fn entries_mut(&mut self, category: Category) -> &mut Vec<IncomeEntry> {
        match category {
            Category::Freelancing => &mut self.freelancing,
            Category::Selling => &mut self.selling,
        }
    }

    pub fn find_entry(&self, category: Category, id: &str) -> Option<&IncomeEntry> {
        self.entries(category).iter().find(|entry| entry.id == id)
    }

    /// Validate and record a new entry, returning its generated id
    pub fn add_entry(&mut self, request: AddEntryRequest) -> LedgerResult<String> {
        let amount = validate_amount(request.amount)?;
        let date = request.date.ok_or(EntryValidationError::MissingDate)?;
        if request.source.trim().is_empty() {
            return Err(EntryValidationError::MissingSource.into());
        }
        if request.income_type.trim().is_empty() {
            return Err(EntryValidationError::MissingIncomeType.into());
        }

        let entry = IncomeEntry {
            id: IncomeEntry::generate_id(),
            amount,
            date,
            source: request.source,
            income_type: request.income_type,
            note: request.note,
        };
        let id = entry.id.clone();

        let mut updated = self.entries(request.category).to_vec();
        updated.push(entry);
        self.commit_history(request.category, updated)?;

        info!("Added {} entry {} ({})", request.category, id, amount);
        Ok(id)
    }

    /// Replace the amount of an existing entry; every other field is kept
    pub fn edit_entry_amount(
        &mut self,
        category: Category,
        id: &str,
        new_amount: f64,
    ) -> LedgerResult<()> {
        let amount = validate_amount(new_amount)?;
        let Some(position) = self.entries(category).iter().position(|entry| entry.id == id) else {
            warn!("Edit requested for unknown {} entry {}", category, id);
            return Err(LedgerError::EntryNotFound {
                id: id.to_string(),
                category,
            });
        };

        let mut updated = self.entries(category).to_vec();
        updated[position].amount = amount;
        self.commit_history(category, updated)?;

        info!("Updated {} entry {} to {}", category, id, amount);
        Ok(())
    }

    /// Remove an entry. Unknown ids are not an error; the collection is
    /// persisted either way. Returns whether anything was removed.
    pub fn delete_entry(&mut self, category: Category, id: &str) -> LedgerResult<bool> {
        let mut updated = self.entries(category).to_vec();
        let before = updated.len();
        updated.retain(|entry| entry.id != id);
        let removed = updated.len() < before;

        self.commit_history(category, updated)?;

        if removed {
            info!("Deleted {} entry {}", category, id);
        } else {
            debug!("Delete requested for unknown {} entry {}", category, id);
        }
        Ok(removed)
    }

    fn commit_history(&mut self, category: Category, updated: Vec<IncomeEntry>) -> LedgerResult<()> {
        self.repository
            .store_history(category, &updated)
            .map_err(LedgerError::Storage)?;
        *self.entries_mut(category) = updated;
        Ok(())
    }

    pub fn total_for_category(&self, category: Category) -> f64 {
        self.entries(category).iter().map(|entry| entry.amount).sum()
    }

    pub fn overall_total(&self) -> f64 {
        Category::ALL
            .iter()
            .map(|category| self.total_for_category(*category))
            .sum()
    }

    /// A category's entries, newest date first. Equal dates keep insertion order.
    pub fn history(&self, category: Category) -> Vec<IncomeEntry> {
        let mut entries = self.entries(category).to_vec();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }

    /// Entries of both categories, newest date first. On equal dates
    /// freelancing entries come before selling ones, each in insertion order.
    pub fn combined_history(&self) -> Vec<CategorizedEntry> {
        let mut combined: Vec<CategorizedEntry> = Category::ALL
            .iter()
            .flat_map(|category| {
                self.entries(*category).iter().map(|entry| CategorizedEntry {
                    category: *category,
                    entry: entry.clone(),
                })
            })
            .collect();
        combined.sort_by(|a, b| b.entry.date.cmp(&a.entry.date));
        combined
    }

    pub fn options(&self, kind: OptionListKind) -> &OptionList {
        self.options.get(kind)
    }

    /// Persist a changed option list, then swap it in
    pub(super) fn commit_options(
        &mut self,
        kind: OptionListKind,
        updated: OptionList,
    ) -> LedgerResult<()> {
        self.repository
            .store_options(kind, updated.labels())
            .map_err(LedgerError::Storage)?;
        *self.options.get_mut(kind) = updated;
        Ok(())
    }
}

fn default_list(config: &TrackerConfig, kind: OptionListKind) -> OptionList {
    OptionList::from_labels(config.default_options.for_kind(kind).iter().cloned())
        .unwrap_or_else(|| OptionList::single(LAST_RESORT_OPTION))
}
