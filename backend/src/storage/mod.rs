//! # Storage Module
//!
//! Persistence for the income tracker. The storage medium is treated as an
//! opaque key-value store of strings; everything above it (key names, JSON
//! encoding, back-filling of older records) lives in [`LedgerRepository`].
//!
//! ## Implementations
//!
//! - [`MemoryStore`]: in-memory map, used by tests and ephemeral sessions
//! - [`JsonFileStore`]: one `<key>.json` file per key under a data directory
//! - the frontend's `LocalStorageStore`: browser `localStorage`

pub mod json_file;
pub mod ledger_repository;
pub mod memory;
pub mod traits;

pub use json_file::JsonFileStore;
pub use ledger_repository::{LedgerRepository, CONFIG_KEY};
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
