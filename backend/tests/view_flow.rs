use chrono::NaiveDate;

use backend::domain::{CountdownEngine, CountdownState, PressRelease};
use backend::{AppAction, AppController, Effect, HistoryScope, MemoryStore, Overlay, Tab};
use shared::{Category, OptionField, OptionListKind};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn controller_with_entry(category: Category) -> (AppController<MemoryStore>, String) {
    let mut controller = AppController::load(MemoryStore::new(), today()).unwrap();
    let fields = [
        backend::FormField::Amount("100".to_string()),
        backend::FormField::Source("Others".to_string()),
        backend::FormField::IncomeType("Others".to_string()),
    ];
    for field in fields {
        controller
            .dispatch(AppAction::UpdateForm(category, field))
            .unwrap();
    }
    controller
        .dispatch(AppAction::SubmitEntry { category, today: today() })
        .unwrap();
    let id = controller.ledger().entries(category)[0].id.clone();
    (controller, id)
}

#[test]
fn tab_switch_resets_all_view_state() {
    let (mut controller, id) = controller_with_entry(Category::Freelancing);
    controller
        .dispatch(AppAction::SwitchTab(Tab::Freelancing))
        .unwrap();
    controller
        .dispatch(AppAction::OpenHistory(HistoryScope::Category(Category::Freelancing)))
        .unwrap();
    controller
        .dispatch(AppAction::BeginEdit { category: Category::Freelancing, entry_id: id })
        .unwrap();

    controller.dispatch(AppAction::SwitchTab(Tab::Selling)).unwrap();

    let view = controller.view();
    assert_eq!(view.active_tab, Tab::Selling);
    assert_eq!(view.overlay, Overlay::None);
    assert_eq!(view.inline_edit, None);
    assert_eq!(view.actions_row, None);
}

#[test]
fn selecting_the_active_tab_leaves_history() {
    let (mut controller, id) = controller_with_entry(Category::Selling);
    controller
        .dispatch(AppAction::OpenHistory(HistoryScope::Overall))
        .unwrap();
    controller.dispatch(AppAction::RowFocus(id)).unwrap();
    assert_eq!(controller.view().active_tab, Tab::Home);

    controller.dispatch(AppAction::SwitchTab(Tab::Home)).unwrap();

    let view = controller.view();
    assert_eq!(view.active_tab, Tab::Home);
    assert_eq!(view.overlay, Overlay::None);
    assert_eq!(view.actions_row, None);
}

#[test]
fn form_buffers_survive_tab_switches() {
    let mut controller = AppController::load(MemoryStore::new(), today()).unwrap();
    controller
        .dispatch(AppAction::UpdateForm(
            Category::Selling,
            backend::FormField::Note("half done".to_string()),
        ))
        .unwrap();

    controller.dispatch(AppAction::SwitchTab(Tab::Selling)).unwrap();
    controller.dispatch(AppAction::SwitchTab(Tab::Home)).unwrap();

    assert_eq!(controller.form(Category::Selling).note, "half done");
}

#[test]
fn only_one_overlay_is_open_at_a_time() {
    let mut controller = AppController::load(MemoryStore::new(), today()).unwrap();
    let kind = OptionListKind::new(Category::Freelancing, OptionField::IncomeType);

    controller.dispatch(AppAction::ToggleMenu).unwrap();
    controller.dispatch(AppAction::OpenOptionManagement(kind)).unwrap();
    assert_eq!(controller.view().overlay, Overlay::OptionManagement(kind));

    controller
        .dispatch(AppAction::OpenHistory(HistoryScope::Overall))
        .unwrap();
    assert_eq!(
        controller.view().overlay,
        Overlay::History(HistoryScope::Overall)
    );

    controller.dispatch(AppAction::CloseHistory).unwrap();
    assert_eq!(controller.view().overlay, Overlay::None);
    assert_eq!(controller.view().active_tab, Tab::Home);
}

#[test]
fn history_rows_are_tagged_and_newest_first() {
    let (mut controller, _id) = controller_with_entry(Category::Selling);
    let fields = [
        backend::FormField::Amount("50".to_string()),
        backend::FormField::Date("2025-02-01".to_string()),
        backend::FormField::Source("Others".to_string()),
        backend::FormField::IncomeType("Others".to_string()),
    ];
    for field in fields {
        controller
            .dispatch(AppAction::UpdateForm(Category::Freelancing, field))
            .unwrap();
    }
    controller
        .dispatch(AppAction::SubmitEntry { category: Category::Freelancing, today: today() })
        .unwrap();

    let rows = controller.history_rows(HistoryScope::Overall);
    let categories: Vec<Category> = rows.iter().map(|row| row.category).collect();
    assert_eq!(categories, vec![Category::Freelancing, Category::Selling]);

    let selling_rows = controller.history_rows(HistoryScope::Category(Category::Selling));
    assert_eq!(selling_rows.len(), 1);
}

#[test]
fn long_press_then_release_is_not_a_tap() {
    let (mut controller, id) = controller_with_entry(Category::Selling);
    controller
        .dispatch(AppAction::OpenHistory(HistoryScope::Category(Category::Selling)))
        .unwrap();

    let Effect::ScheduleLongPress { generation, .. } = controller
        .dispatch(AppAction::RowPressStart(id.clone()))
        .unwrap()
    else {
        panic!("press start must schedule a timer");
    };
    controller
        .dispatch(AppAction::RowLongPressFired(generation))
        .unwrap();
    controller.dispatch(AppAction::RowPressEnd).unwrap();

    assert!(controller.view().actions_visible(&id));

    controller.dispatch(AppAction::RowBlur(id.clone())).unwrap();
    assert!(!controller.view().actions_visible(&id));
}

#[test]
fn press_released_early_reports_tap() {
    let mut detector = backend::domain::LongPressDetector::new();
    detector.press_start("row");
    assert_eq!(detector.press_end(), PressRelease::Tap("row".to_string()));
}

#[test]
fn countdown_reaches_passed_after_target() {
    let start = chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    let target = start + chrono::Duration::seconds(10);
    let mut engine = CountdownEngine::new(target, start);

    let mut last = CountdownState::Counting;
    for second in 1..=11 {
        last = engine.tick(start + chrono::Duration::seconds(second));
    }

    assert_eq!(last, CountdownState::Passed);
    let value = engine.current();
    assert_eq!(
        [&value.days, &value.hours, &value.minutes, &value.seconds],
        ["00", "00", "00", "00"]
    );
}
