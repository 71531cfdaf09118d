//! # Domain Module
//!
//! Business logic for the income tracker, independent of the UI toolkit and
//! of the storage medium.
//!
//! ## Module Organization
//!
//! - **formatting**: currency, date, note and progress display helpers
//! - **validation**: amount, date and option label parsing
//! - **models**: option lists and entry form buffers
//! - **ledger_service**: entry collections, totals and history ordering
//! - **option_service**: add/rename/delete on the four option lists
//! - **countdown**: remaining time until the goal deadline
//! - **long_press**: press-and-hold detection for history rows
//! - **view_state**: tabs, overlays and per-row interaction state
//! - **app_controller**: action dispatch tying all of the above together
//!
//! ## Business Rules
//!
//! - Amounts are strictly positive and finite
//! - An entry's category, date, source and type never change after creation
//! - Option lists are never empty and hold no duplicates
//! - Renaming or deleting an option never rewrites stored entries

pub mod app_controller;
pub mod countdown;
pub mod errors;
pub mod formatting;
pub mod ledger_service;
pub mod long_press;
pub mod models;
pub mod option_service;
pub mod validation;
pub mod view_state;

pub use app_controller::{AppAction, AppController, Effect, FormField};
pub use countdown::{calculate_time_remaining, CountdownEngine, CountdownState};
pub use errors::{LedgerError, LedgerResult};
pub use ledger_service::LedgerService;
pub use long_press::{LongPressDetector, PressRelease};
pub use models::{EntryForm, OptionList, RenameOutcome};
pub use view_state::{
    HistoryScope, InlineEdit, OptionEditorState, OptionRename, Overlay, PendingDelete, Tab,
    ViewState,
};
