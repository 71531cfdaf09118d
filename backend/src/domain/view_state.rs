//! # View State Module
//!
//! Transient UI state: which tab is active, which overlay (if any) is on top,
//! and the per-row interaction state of history tables. Nothing here is ever
//! persisted.
//!
//! ## Rules
//! - At most one overlay is open; opening one replaces the previous one
//! - Changing tab resets everything except the tab itself
//! - A delete confirmation remembers the history screen it came from and
//!   returns there when it closes

use chrono::{DateTime, Utc};
use shared::{Category, OptionListKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Home,
    Freelancing,
    Selling,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Freelancing, Tab::Home, Tab::Selling];

    pub fn category(&self) -> Option<Category> {
        match self {
            Tab::Home => None,
            Tab::Freelancing => Some(Category::Freelancing),
            Tab::Selling => Some(Category::Selling),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Freelancing => "Freelancing",
            Tab::Selling => "Selling",
        }
    }
}

impl From<Category> for Tab {
    fn from(category: Category) -> Self {
        match category {
            Category::Freelancing => Tab::Freelancing,
            Category::Selling => Tab::Selling,
        }
    }
}

/// Which entries a history screen lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryScope {
    Category(Category),
    Overall,
}

impl HistoryScope {
    /// Tab shown once this history screen closes
    pub fn return_tab(&self) -> Tab {
        match self {
            HistoryScope::Category(category) => Tab::from(*category),
            HistoryScope::Overall => Tab::Home,
        }
    }

    pub fn title(&self) -> String {
        match self {
            HistoryScope::Category(category) => format!("{} History", category.label()),
            HistoryScope::Overall => "Overall History".to_string(),
        }
    }
}

/// Entry awaiting delete confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    pub entry_id: String,
    pub category: Category,
    pub amount: f64,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Overlay {
    #[default]
    None,
    TabMenu,
    History(HistoryScope),
    OptionManagement(OptionListKind),
    DeleteConfirmation {
        target: PendingDelete,
        return_to: HistoryScope,
    },
}

/// Amount edit in progress on a history row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineEdit {
    pub entry_id: String,
    pub category: Category,
    pub draft_amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRename {
    pub original: String,
    pub draft: String,
}

/// Sub-state of the option management modal
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionEditorState {
    pub renaming: Option<OptionRename>,
    pub new_option_draft: String,
}

impl OptionEditorState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub active_tab: Tab,
    pub overlay: Overlay,
    pub inline_edit: Option<InlineEdit>,
    /// Row whose edit/delete actions are exposed
    pub actions_row: Option<String>,
    pub option_editor: OptionEditorState,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate a tab, resetting all other view state.
    /// Returns false if nothing changed: the tab was already active with
    /// no overlay or row state open.
    pub fn switch_tab(&mut self, tab: Tab) -> bool {
        let reset = Self {
            active_tab: tab,
            ..Self::default()
        };
        if *self == reset {
            return false;
        }
        *self = reset;
        true
    }

    fn clear_row_state(&mut self) {
        self.inline_edit = None;
        self.actions_row = None;
    }

    pub fn toggle_menu(&mut self) {
        self.overlay = match self.overlay {
            Overlay::TabMenu => Overlay::None,
            _ => Overlay::TabMenu,
        };
    }

    pub fn close_menu(&mut self) {
        if self.overlay == Overlay::TabMenu {
            self.overlay = Overlay::None;
        }
    }

    pub fn open_history(&mut self, scope: HistoryScope) {
        self.clear_row_state();
        self.option_editor.clear();
        self.overlay = Overlay::History(scope);
    }

    /// Close the open history screen and land on the tab it belongs to
    pub fn close_history(&mut self) {
        if let Overlay::History(scope) = self.overlay {
            self.clear_row_state();
            self.overlay = Overlay::None;
            self.active_tab = scope.return_tab();
        }
    }

    /// History screen currently showing, including one hidden behind a
    /// delete confirmation
    pub fn history_scope(&self) -> Option<HistoryScope> {
        match &self.overlay {
            Overlay::History(scope) => Some(*scope),
            Overlay::DeleteConfirmation { return_to, .. } => Some(*return_to),
            _ => None,
        }
    }

    pub fn open_option_management(&mut self, kind: OptionListKind) {
        self.clear_row_state();
        self.option_editor.clear();
        self.overlay = Overlay::OptionManagement(kind);
    }

    pub fn close_option_management(&mut self) {
        if matches!(self.overlay, Overlay::OptionManagement(_)) {
            self.overlay = Overlay::None;
            self.option_editor.clear();
        }
    }

    pub fn option_management_kind(&self) -> Option<OptionListKind> {
        match self.overlay {
            Overlay::OptionManagement(kind) => Some(kind),
            _ => None,
        }
    }

    /// Ask for confirmation before deleting. Only possible from a history screen.
    pub fn request_delete(&mut self, target: PendingDelete) -> bool {
        let Overlay::History(scope) = self.overlay else {
            return false;
        };
        self.clear_row_state();
        self.overlay = Overlay::DeleteConfirmation {
            target,
            return_to: scope,
        };
        true
    }

    /// Close the confirmation (confirmed or not) and go back to its history
    /// screen. Returns the entry that was awaiting confirmation.
    pub fn finish_delete(&mut self) -> Option<PendingDelete> {
        match std::mem::take(&mut self.overlay) {
            Overlay::DeleteConfirmation { target, return_to } => {
                self.overlay = Overlay::History(return_to);
                Some(target)
            }
            other => {
                self.overlay = other;
                None
            }
        }
    }

    pub fn begin_edit(&mut self, entry_id: &str, category: Category, amount: f64) {
        self.actions_row = None;
        self.inline_edit = Some(InlineEdit {
            entry_id: entry_id.to_string(),
            category,
            draft_amount: amount_draft(amount),
        });
    }

    pub fn update_edit_draft(&mut self, draft: String) {
        if let Some(edit) = self.inline_edit.as_mut() {
            edit.draft_amount = draft;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.inline_edit = None;
    }

    pub fn is_editing(&self, entry_id: &str) -> bool {
        self.inline_edit
            .as_ref()
            .is_some_and(|edit| edit.entry_id == entry_id)
    }

    pub fn show_actions(&mut self, entry_id: &str) {
        self.actions_row = Some(entry_id.to_string());
    }

    pub fn hide_actions(&mut self) {
        self.actions_row = None;
    }

    pub fn actions_visible(&self, entry_id: &str) -> bool {
        self.actions_row.as_deref() == Some(entry_id)
    }

    pub fn begin_rename(&mut self, label: &str) {
        self.option_editor.renaming = Some(OptionRename {
            original: label.to_string(),
            draft: label.to_string(),
        });
    }

    pub fn update_rename_draft(&mut self, draft: String) {
        if let Some(rename) = self.option_editor.renaming.as_mut() {
            rename.draft = draft;
        }
    }

    pub fn cancel_rename(&mut self) {
        self.option_editor.renaming = None;
    }
}

/// Seed text for an amount edit: whole amounts without a decimal point
fn amount_draft(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        amount.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::OptionField;

    fn pending() -> PendingDelete {
        PendingDelete {
            entry_id: "entry::1".to_string(),
            category: Category::Selling,
            amount: 10.0,
            date: DateTime::from_timestamp(0, 0).unwrap(),
        }
    }

    #[test]
    fn test_switch_tab_resets_everything() {
        let mut view = ViewState::new();
        view.open_history(HistoryScope::Category(Category::Selling));
        view.begin_edit("entry::1", Category::Selling, 10.0);
        view.show_actions("entry::2");
        view.option_editor.new_option_draft = "Etsy".to_string();

        assert!(view.switch_tab(Tab::Freelancing));
        assert_eq!(
            view,
            ViewState {
                active_tab: Tab::Freelancing,
                ..ViewState::default()
            }
        );
        assert!(!view.switch_tab(Tab::Freelancing));
    }

    #[test]
    fn test_switch_to_active_tab_closes_history() {
        let mut view = ViewState::new();
        view.open_history(HistoryScope::Overall);
        view.show_actions("entry::1");

        assert!(view.switch_tab(Tab::Home));
        assert_eq!(view.overlay, Overlay::None);
        assert_eq!(view.actions_row, None);
        assert_eq!(view.history_scope(), None);
    }

    #[test]
    fn test_overlays_are_exclusive() {
        let mut view = ViewState::new();
        view.toggle_menu();
        assert_eq!(view.overlay, Overlay::TabMenu);

        view.open_history(HistoryScope::Overall);
        assert_eq!(view.overlay, Overlay::History(HistoryScope::Overall));

        let kind = OptionListKind::new(Category::Selling, OptionField::Source);
        view.open_option_management(kind);
        assert_eq!(view.option_management_kind(), Some(kind));
        assert_eq!(view.history_scope(), None);
    }

    #[test]
    fn test_close_history_returns_to_owning_tab() {
        let mut view = ViewState::new();
        view.open_history(HistoryScope::Category(Category::Selling));
        view.close_history();
        assert_eq!(view.active_tab, Tab::Selling);
        assert_eq!(view.overlay, Overlay::None);

        view.open_history(HistoryScope::Overall);
        view.close_history();
        assert_eq!(view.active_tab, Tab::Home);
    }

    #[test]
    fn test_delete_confirmation_returns_to_history() {
        let mut view = ViewState::new();
        assert!(!view.request_delete(pending()));

        view.open_history(HistoryScope::Overall);
        view.show_actions("entry::1");
        assert!(view.request_delete(pending()));
        assert_eq!(view.history_scope(), Some(HistoryScope::Overall));
        assert_eq!(view.actions_row, None);

        assert_eq!(view.finish_delete(), Some(pending()));
        assert_eq!(view.overlay, Overlay::History(HistoryScope::Overall));
        assert_eq!(view.finish_delete(), None);
        assert_eq!(view.overlay, Overlay::History(HistoryScope::Overall));
    }

    #[test]
    fn test_begin_edit_hides_actions_and_seeds_draft() {
        let mut view = ViewState::new();
        view.show_actions("entry::1");
        view.begin_edit("entry::1", Category::Freelancing, 5000.0);

        assert!(view.is_editing("entry::1"));
        assert!(!view.actions_visible("entry::1"));
        assert_eq!(view.inline_edit.as_ref().unwrap().draft_amount, "5000");

        view.begin_edit("entry::2", Category::Freelancing, 12.5);
        assert_eq!(view.inline_edit.as_ref().unwrap().draft_amount, "12.5");
    }

    #[test]
    fn test_menu_toggle_and_close() {
        let mut view = ViewState::new();
        view.toggle_menu();
        view.toggle_menu();
        assert_eq!(view.overlay, Overlay::None);

        view.open_history(HistoryScope::Overall);
        view.close_menu();
        assert_eq!(view.overlay, Overlay::History(HistoryScope::Overall));
    }
}
