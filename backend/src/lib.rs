//! # Backend Module
//!
//! Contains all non-UI logic for the income tracker, embedded directly into the
//! frontend. There is no server: the "backend" is the domain layer plus the
//! storage adapter it writes through.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (Yew frontend)
//!     ↓  AppAction
//! Domain Layer (AppController → LedgerService, ViewState, CountdownEngine)
//!     ↓
//! Storage Layer (LedgerRepository → KeyValueStore)
//! ```
//!
//! Everything here is synchronous and single-threaded: each user action runs to
//! completion, including its storage write, before the UI re-renders.

pub mod domain;
pub mod storage;

pub use domain::{
    AppAction, AppController, CountdownEngine, Effect, FormField, HistoryScope, LedgerError,
    LedgerService, Overlay, Tab, ViewState,
};
pub use storage::{JsonFileStore, KeyValueStore, LedgerRepository, MemoryStore};
