//! # Ledger Repository
//!
//! Maps the ledger onto the key-value store: one JSON array per entry
//! collection, one JSON array per option list, and an optional config blob.
//!
//! ## Stored Format
//!
//! ```json
//! // freelancingHistory
//! [{"id":"entry::1b4e...","amount":5000,"date":"2025-01-01T00:00:00Z",
//!   "source":"Fiverr","incomeType":"Website","note":""}]
//!
//! // freelancingSourceOptions
//! ["DM","Email","Fiverr","Others","Referral","Social Media","Upwork"]
//! ```
//!
//! ## Compatibility
//!
//! Records written by older versions may lack `id`, `source`, `incomeType` or
//! `note`, and may carry a stray `type` field. Missing values are back-filled
//! on load; unknown fields are ignored. Dates may be full timestamps or bare
//! `YYYY-MM-DD` days.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::traits::KeyValueStore;
use shared::{Category, IncomeEntry, OptionListKind, TrackerConfig};

/// Storage key of the optional configuration override
pub const CONFIG_KEY: &str = "trackerConfig";

/// Label used for sources and types missing from older records
const FALLBACK_LABEL: &str = "Others";

/// Stored entry shape, tolerant of fields missing from older versions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntryRecord {
    #[serde(default)]
    id: Option<String>,
    amount: f64,
    date: String,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    income_type: Option<String>,
    #[serde(default)]
    note: Option<String>,
}

impl From<IncomeEntry> for EntryRecord {
    fn from(entry: IncomeEntry) -> Self {
        EntryRecord {
            id: Some(entry.id),
            amount: entry.amount,
            date: entry.date.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            source: Some(entry.source),
            income_type: Some(entry.income_type),
            note: Some(entry.note),
        }
    }
}

impl TryFrom<EntryRecord> for IncomeEntry {
    type Error = anyhow::Error;

    fn try_from(record: EntryRecord) -> Result<Self> {
        if !record.amount.is_finite() {
            return Err(anyhow!("Stored amount is not a finite number"));
        }
        let date = parse_stored_date(&record.date)?;

        Ok(IncomeEntry {
            id: record
                .id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(IncomeEntry::generate_id),
            amount: record.amount,
            date,
            source: record
                .source
                .filter(|source| !source.is_empty())
                .unwrap_or_else(|| FALLBACK_LABEL.to_string()),
            income_type: record
                .income_type
                .filter(|income_type| !income_type.is_empty())
                .unwrap_or_else(|| FALLBACK_LABEL.to_string()),
            note: record.note.unwrap_or_default(),
        })
    }
}

fn parse_stored_date(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    let day = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Unrecognised stored date {:?}", value))?;
    day.and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| anyhow!("Unrecognised stored date {:?}", value))
}

/// Reads and writes ledger collections through a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct LedgerRepository<S> {
    store: S,
}

impl<S: KeyValueStore> LedgerRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load a category's entries, back-filling legacy records.
    ///
    /// A blob that is not a JSON array is logged and treated as empty; it is
    /// left in storage until the next write replaces it. Individual records
    /// that cannot be read are skipped.
    pub fn load_history(&self, category: Category) -> Result<Vec<IncomeEntry>> {
        let key = category.history_key();
        let Some(raw) = self.store.get(key)? else {
            debug!("No stored history for {}", category);
            return Ok(Vec::new());
        };

        let values: Vec<Value> = match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(e) => {
                error!("Stored {} is unreadable, starting empty: {}", key, e);
                return Ok(Vec::new());
            }
        };

        let mut entries = Vec::with_capacity(values.len());
        for (index, value) in values.into_iter().enumerate() {
            let entry = serde_json::from_value::<EntryRecord>(value)
                .map_err(anyhow::Error::from)
                .and_then(IncomeEntry::try_from);
            match entry {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!("Skipping unreadable record {} in {}: {}", index, key, e),
            }
        }

        info!("Loaded {} {} entries", entries.len(), category);
        Ok(entries)
    }

    /// Replace a category's stored entries
    pub fn store_history(&mut self, category: Category, entries: &[IncomeEntry]) -> Result<()> {
        let records: Vec<EntryRecord> = entries.iter().cloned().map(EntryRecord::from).collect();
        let json = serde_json::to_string(&records)?;
        self.store.set(category.history_key(), &json)
    }

    /// Load an option list, `None` when absent, unreadable or empty
    pub fn load_options(&self, kind: OptionListKind) -> Result<Option<Vec<String>>> {
        let key = kind.storage_key();
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(labels) if labels.is_empty() => {
                warn!("Stored {} is empty, using defaults", key);
                Ok(None)
            }
            Ok(labels) => Ok(Some(labels)),
            Err(e) => {
                warn!("Stored {} is unreadable, using defaults: {}", key, e);
                Ok(None)
            }
        }
    }

    /// Replace one option list
    pub fn store_options(&mut self, kind: OptionListKind, labels: &[String]) -> Result<()> {
        let json = serde_json::to_string(labels)?;
        self.store.set(kind.storage_key(), &json)
    }

    /// Load the configuration override, `None` when absent or unreadable
    pub fn load_config(&self) -> Result<Option<TrackerConfig>> {
        let Some(raw) = self.store.get(CONFIG_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(config) => Ok(Some(config)),
            Err(e) => {
                warn!("Stored {} is unreadable, using defaults: {}", CONFIG_KEY, e);
                Ok(None)
            }
        }
    }
}
