//! # App Controller
//!
//! Single owner of the ledger, the view state, both entry forms and the
//! long-press detector. The UI sends [`AppAction`]s and re-renders from the
//! controller afterwards; every action runs to completion (including its
//! storage write) before `dispatch` returns.
//!
//! Timers stay in the UI. When an action needs one, `dispatch` returns an
//! [`Effect`] describing it and the UI reports back with another action when
//! it elapses.

use chrono::NaiveDate;
use log::debug;
use shared::{CategorizedEntry, Category, IncomeEntry, OptionListKind, TrackerConfig};

use crate::domain::errors::{LedgerError, LedgerResult};
use crate::domain::ledger_service::LedgerService;
use crate::domain::long_press::{LongPressDetector, PressRelease};
use crate::domain::models::{EntryForm, RenameOutcome};
use crate::domain::validation::parse_amount;
use crate::domain::view_state::{HistoryScope, PendingDelete, Tab, ViewState};
use crate::storage::KeyValueStore;

/// A single edited field of an entry form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    Amount(String),
    Date(String),
    Source(String),
    IncomeType(String),
    Note(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    SwitchTab(Tab),
    ToggleMenu,
    CloseMenu,
    OpenHistory(HistoryScope),
    CloseHistory,
    OpenOptionManagement(OptionListKind),
    CloseOptionManagement,

    UpdateForm(Category, FormField),
    /// Submit a category's form; `today` is what the date field resets to
    SubmitEntry { category: Category, today: NaiveDate },

    BeginEdit { category: Category, entry_id: String },
    UpdateEditDraft(String),
    SaveEdit,
    CancelEdit,
    RequestDelete { category: Category, entry_id: String },
    ConfirmDelete,
    CancelDelete,

    RowPressStart(String),
    /// The long-press timer scheduled for this generation elapsed
    RowLongPressFired(u64),
    RowPressEnd,
    RowPressCancel,
    RowFocus(String),
    RowBlur(String),

    UpdateNewOptionDraft(String),
    AddOption,
    BeginRenameOption(String),
    UpdateRenameDraft(String),
    CommitRename,
    CancelRename,
    /// Delete a label from the open option list (already confirmed by the user)
    DeleteOption(String),
}

/// Work the UI must do on the controller's behalf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start a timer and send `RowLongPressFired(generation)` when it elapses
    ScheduleLongPress { generation: u64, delay_ms: u32 },
}

pub struct AppController<S: KeyValueStore> {
    ledger: LedgerService<S>,
    view: ViewState,
    freelancing_form: EntryForm,
    selling_form: EntryForm,
    long_press: LongPressDetector,
}

impl<S: KeyValueStore> AppController<S> {
    /// Load the ledger from `store` (honouring a stored config override)
    pub fn load(store: S, today: NaiveDate) -> LedgerResult<Self> {
        Ok(Self::with_ledger(LedgerService::load(store)?, today))
    }

    pub fn with_config(store: S, config: TrackerConfig, today: NaiveDate) -> LedgerResult<Self> {
        Ok(Self::with_ledger(
            LedgerService::load_with_config(store, config)?,
            today,
        ))
    }

    fn with_ledger(ledger: LedgerService<S>, today: NaiveDate) -> Self {
        Self {
            ledger,
            view: ViewState::new(),
            freelancing_form: EntryForm::new(today),
            selling_form: EntryForm::new(today),
            long_press: LongPressDetector::new(),
        }
    }

    pub fn ledger(&self) -> &LedgerService<S> {
        &self.ledger
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn config(&self) -> &TrackerConfig {
        self.ledger.config()
    }

    pub fn form(&self, category: Category) -> &EntryForm {
        match category {
            Category::Freelancing => &self.freelancing_form,
            Category::Selling => &self.selling_form,
        }
    }

    fn form_mut(&mut self, category: Category) -> &mut EntryForm {
        match category {
            Category::Freelancing => &mut self.freelancing_form,
            Category::Selling => &mut self.selling_form,
        }
    }

    /// Rows of a history screen, newest first
    pub fn history_rows(&self, scope: HistoryScope) -> Vec<CategorizedEntry> {
        match scope {
            HistoryScope::Category(category) => self
                .ledger
                .history(category)
                .into_iter()
                .map(|entry| CategorizedEntry { category, entry })
                .collect(),
            HistoryScope::Overall => self.ledger.combined_history(),
        }
    }

    /// Apply one user action
    pub fn dispatch(&mut self, action: AppAction) -> LedgerResult<Effect> {
        debug!("dispatch {:?}", action);
        match action {
            AppAction::SwitchTab(tab) => {
                if self.view.switch_tab(tab) {
                    self.long_press.reset();
                }
            }
            AppAction::ToggleMenu => self.view.toggle_menu(),
            AppAction::CloseMenu => self.view.close_menu(),
            AppAction::OpenHistory(scope) => {
                self.long_press.reset();
                self.view.open_history(scope);
            }
            AppAction::CloseHistory => {
                self.long_press.reset();
                self.view.close_history();
            }
            AppAction::OpenOptionManagement(kind) => self.view.open_option_management(kind),
            AppAction::CloseOptionManagement => self.view.close_option_management(),

            AppAction::UpdateForm(category, field) => {
                let form = self.form_mut(category);
                match field {
                    FormField::Amount(value) => form.amount = value,
                    FormField::Date(value) => form.date = value,
                    FormField::Source(value) => form.source = value,
                    FormField::IncomeType(value) => form.income_type = value,
                    FormField::Note(value) => form.note = value,
                }
            }
            AppAction::SubmitEntry { category, today } => self.submit_entry(category, today)?,

            AppAction::BeginEdit { category, entry_id } => {
                let amount = self.require_entry(category, &entry_id)?.amount;
                self.view.begin_edit(&entry_id, category, amount);
            }
            AppAction::UpdateEditDraft(draft) => self.view.update_edit_draft(draft),
            AppAction::SaveEdit => self.save_edit()?,
            AppAction::CancelEdit => self.view.cancel_edit(),
            AppAction::RequestDelete { category, entry_id } => {
                let entry = self.require_entry(category, &entry_id)?;
                let target = PendingDelete {
                    entry_id: entry.id.clone(),
                    category,
                    amount: entry.amount,
                    date: entry.date,
                };
                self.view.request_delete(target);
            }
            AppAction::ConfirmDelete => {
                if let Some(target) = self.view.finish_delete() {
                    self.ledger.delete_entry(target.category, &target.entry_id)?;
                }
            }
            AppAction::CancelDelete => {
                self.view.finish_delete();
            }

            AppAction::RowPressStart(entry_id) => {
                let generation = self.long_press.press_start(&entry_id);
                return Ok(Effect::ScheduleLongPress {
                    generation,
                    delay_ms: self.config().long_press_threshold_ms,
                });
            }
            AppAction::RowLongPressFired(generation) => {
                if let Some(entry_id) = self.long_press.timer_fired(generation) {
                    if !self.view.is_editing(&entry_id) {
                        self.view.show_actions(&entry_id);
                    }
                }
            }
            AppAction::RowPressEnd => {
                if let PressRelease::Tap(entry_id) = self.long_press.press_end() {
                    if self.view.actions_visible(&entry_id) && !self.view.is_editing(&entry_id) {
                        self.view.hide_actions();
                    }
                }
            }
            AppAction::RowPressCancel => self.long_press.press_cancel(),
            AppAction::RowFocus(entry_id) => {
                if !self.view.is_editing(&entry_id) {
                    self.view.show_actions(&entry_id);
                }
            }
            AppAction::RowBlur(entry_id) => {
                if self.view.actions_visible(&entry_id) {
                    self.view.hide_actions();
                }
            }

            AppAction::UpdateNewOptionDraft(draft) => self.view.option_editor.new_option_draft = draft,
            AppAction::AddOption => {
                if let Some(kind) = self.view.option_management_kind() {
                    let draft = self.view.option_editor.new_option_draft.clone();
                    self.ledger.add_option(kind, &draft)?;
                    self.view.option_editor.new_option_draft.clear();
                }
            }
            AppAction::BeginRenameOption(label) => self.view.begin_rename(&label),
            AppAction::UpdateRenameDraft(draft) => self.view.update_rename_draft(draft),
            AppAction::CommitRename => self.commit_rename()?,
            AppAction::CancelRename => self.view.cancel_rename(),
            AppAction::DeleteOption(label) => {
                if let Some(kind) = self.view.option_management_kind() {
                    self.ledger.delete_option(kind, &label)?;
                    self.form_mut(kind.category).clear_selection(kind.field, &label);
                    let renaming_deleted = self
                        .view
                        .option_editor
                        .renaming
                        .as_ref()
                        .is_some_and(|rename| rename.original == label);
                    if renaming_deleted {
                        self.view.cancel_rename();
                    }
                }
            }
        }
        Ok(Effect::None)
    }

    fn require_entry(&self, category: Category, entry_id: &str) -> LedgerResult<&IncomeEntry> {
        self.ledger
            .find_entry(category, entry_id)
            .ok_or_else(|| LedgerError::EntryNotFound {
                id: entry_id.to_string(),
                category,
            })
    }

    fn submit_entry(&mut self, category: Category, today: NaiveDate) -> LedgerResult<()> {
        let symbol = self.config().currency_symbol.clone();
        let request = self.form(category).to_request(category, &symbol)?;
        self.ledger.add_entry(request)?;
        self.form_mut(category).reset(today);
        Ok(())
    }

    /// Validate and store the draft; on failure the edit stays open
    fn save_edit(&mut self) -> LedgerResult<()> {
        let Some(edit) = self.view.inline_edit.clone() else {
            return Ok(());
        };
        let amount = parse_amount(&edit.draft_amount, &self.config().currency_symbol)?;
        self.ledger
            .edit_entry_amount(edit.category, &edit.entry_id, amount)?;
        self.view.cancel_edit();
        Ok(())
    }

    fn commit_rename(&mut self) -> LedgerResult<()> {
        let (Some(kind), Some(rename)) = (
            self.view.option_management_kind(),
            self.view.option_editor.renaming.clone(),
        ) else {
            return Ok(());
        };

        let outcome = self
            .ledger
            .rename_option(kind, &rename.original, &rename.draft)?;
        if let RenameOutcome::Renamed { from, to } = outcome {
            self.form_mut(kind.category)
                .follow_rename(kind.field, &from, &to);
        }
        self.view.cancel_rename();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::view_state::Overlay;
    use crate::storage::MemoryStore;
    use shared::{EntryValidationError, OptionField, OptionValidationError};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn controller() -> AppController<MemoryStore> {
        AppController::load(MemoryStore::new(), today()).unwrap()
    }

    fn fill_form(controller: &mut AppController<MemoryStore>, category: Category, amount: &str) {
        let fields = [
            FormField::Amount(amount.to_string()),
            FormField::Date("2025-01-01".to_string()),
            FormField::Source("Others".to_string()),
            FormField::IncomeType(match category {
                Category::Freelancing => "Website".to_string(),
                Category::Selling => "Colouring Book".to_string(),
            }),
        ];
        for field in fields {
            controller
                .dispatch(AppAction::UpdateForm(category, field))
                .unwrap();
        }
    }

    fn add_entry(controller: &mut AppController<MemoryStore>, category: Category, amount: &str) -> String {
        fill_form(controller, category, amount);
        controller
            .dispatch(AppAction::SubmitEntry { category, today: today() })
            .unwrap();
        controller.ledger().entries(category).last().unwrap().id.clone()
    }

    #[test]
    fn test_submit_clears_form() {
        let mut controller = controller();
        add_entry(&mut controller, Category::Selling, "1,500");

        assert_eq!(controller.ledger().total_for_category(Category::Selling), 1500.0);
        assert_eq!(controller.form(Category::Selling), &EntryForm::new(today()));
    }

    #[test]
    fn test_rejected_submit_keeps_form() {
        let mut controller = controller();
        fill_form(&mut controller, Category::Freelancing, "-10");

        let result = controller.dispatch(AppAction::SubmitEntry {
            category: Category::Freelancing,
            today: today(),
        });

        assert!(matches!(
            result,
            Err(LedgerError::Validation(EntryValidationError::AmountNotPositive))
        ));
        assert_eq!(controller.form(Category::Freelancing).amount, "-10");
        assert!(controller.ledger().entries(Category::Freelancing).is_empty());
    }

    #[test]
    fn test_inline_edit_flow() {
        let mut controller = controller();
        let id = add_entry(&mut controller, Category::Freelancing, "100");
        controller
            .dispatch(AppAction::OpenHistory(HistoryScope::Category(Category::Freelancing)))
            .unwrap();

        controller
            .dispatch(AppAction::BeginEdit { category: Category::Freelancing, entry_id: id.clone() })
            .unwrap();
        controller.dispatch(AppAction::UpdateEditDraft("abc".to_string())).unwrap();
        assert!(controller.dispatch(AppAction::SaveEdit).is_err());
        assert!(controller.view().is_editing(&id));

        controller.dispatch(AppAction::UpdateEditDraft("250".to_string())).unwrap();
        controller.dispatch(AppAction::SaveEdit).unwrap();
        assert!(!controller.view().is_editing(&id));
        assert_eq!(controller.ledger().total_for_category(Category::Freelancing), 250.0);
    }

    #[test]
    fn test_delete_confirmation_flow() {
        let mut controller = controller();
        let id = add_entry(&mut controller, Category::Selling, "40");
        let scope = HistoryScope::Overall;
        controller.dispatch(AppAction::OpenHistory(scope)).unwrap();

        controller
            .dispatch(AppAction::RequestDelete { category: Category::Selling, entry_id: id.clone() })
            .unwrap();
        controller.dispatch(AppAction::CancelDelete).unwrap();
        assert_eq!(controller.view().overlay, Overlay::History(scope));
        assert_eq!(controller.ledger().entries(Category::Selling).len(), 1);

        controller
            .dispatch(AppAction::RequestDelete { category: Category::Selling, entry_id: id })
            .unwrap();
        controller.dispatch(AppAction::ConfirmDelete).unwrap();
        assert_eq!(controller.view().overlay, Overlay::History(scope));
        assert!(controller.ledger().entries(Category::Selling).is_empty());
    }

    #[test]
    fn test_long_press_reveals_actions_and_tap_hides_them() {
        let mut controller = controller();
        let id = add_entry(&mut controller, Category::Selling, "40");

        let effect = controller.dispatch(AppAction::RowPressStart(id.clone())).unwrap();
        let Effect::ScheduleLongPress { generation, delay_ms } = effect else {
            panic!("expected a long-press timer");
        };
        assert_eq!(delay_ms, 500);

        controller.dispatch(AppAction::RowLongPressFired(generation)).unwrap();
        controller.dispatch(AppAction::RowPressEnd).unwrap();
        assert!(controller.view().actions_visible(&id));

        controller.dispatch(AppAction::RowPressStart(id.clone())).unwrap();
        controller.dispatch(AppAction::RowPressEnd).unwrap();
        assert!(!controller.view().actions_visible(&id));
    }

    #[test]
    fn test_long_press_on_another_row_moves_actions() {
        let mut controller = controller();
        let first = add_entry(&mut controller, Category::Selling, "40");
        let second = add_entry(&mut controller, Category::Selling, "60");
        let long_press = |controller: &mut AppController<MemoryStore>, id: &str| {
            let effect = controller.dispatch(AppAction::RowPressStart(id.to_string())).unwrap();
            let Effect::ScheduleLongPress { generation, .. } = effect else {
                panic!("expected a long-press timer");
            };
            controller.dispatch(AppAction::RowLongPressFired(generation)).unwrap();
            controller.dispatch(AppAction::RowPressEnd).unwrap();
        };

        long_press(&mut controller, &first);
        assert_eq!(controller.view().actions_row, Some(first.clone()));

        long_press(&mut controller, &second);
        assert_eq!(controller.view().actions_row, Some(second.clone()));
        assert!(!controller.view().actions_visible(&first));
    }

    #[test]
    fn test_tab_switch_cancels_armed_press() {
        let mut controller = controller();
        let effect = controller
            .dispatch(AppAction::RowPressStart("entry::x".to_string()))
            .unwrap();
        controller.dispatch(AppAction::SwitchTab(Tab::Selling)).unwrap();

        if let Effect::ScheduleLongPress { generation, .. } = effect {
            controller.dispatch(AppAction::RowLongPressFired(generation)).unwrap();
        }
        assert_eq!(controller.view().actions_row, None);
    }

    #[test]
    fn test_option_changes_follow_into_form() {
        let mut controller = controller();
        let kind = OptionListKind::new(Category::Freelancing, OptionField::Source);
        controller
            .dispatch(AppAction::UpdateForm(Category::Freelancing, FormField::Source("Email".to_string())))
            .unwrap();
        controller.dispatch(AppAction::OpenOptionManagement(kind)).unwrap();

        controller.dispatch(AppAction::BeginRenameOption("Email".to_string())).unwrap();
        controller.dispatch(AppAction::UpdateRenameDraft("E-mail".to_string())).unwrap();
        controller.dispatch(AppAction::CommitRename).unwrap();
        assert_eq!(controller.form(Category::Freelancing).source, "E-mail");
        assert_eq!(controller.view().option_editor.renaming, None);

        controller.dispatch(AppAction::DeleteOption("E-mail".to_string())).unwrap();
        assert_eq!(controller.form(Category::Freelancing).source, "");
        assert!(!controller.ledger().options(kind).contains("E-mail"));
    }

    #[test]
    fn test_add_option_clears_draft_only_on_success() {
        let mut controller = controller();
        let kind = OptionListKind::new(Category::Selling, OptionField::IncomeType);
        controller.dispatch(AppAction::OpenOptionManagement(kind)).unwrap();

        controller
            .dispatch(AppAction::UpdateNewOptionDraft("Colouring Book".to_string()))
            .unwrap();
        assert!(matches!(
            controller.dispatch(AppAction::AddOption),
            Err(LedgerError::Option(OptionValidationError::DuplicateOption(_)))
        ));
        assert_eq!(controller.view().option_editor.new_option_draft, "Colouring Book");

        controller.dispatch(AppAction::UpdateNewOptionDraft("Planner".to_string())).unwrap();
        controller.dispatch(AppAction::AddOption).unwrap();
        assert_eq!(controller.view().option_editor.new_option_draft, "");
        assert_eq!(controller.ledger().options(kind).labels(), ["Colouring Book", "Planner"]);
    }
}
