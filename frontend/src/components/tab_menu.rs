use backend::{AppAction, HistoryScope, Tab};
use gloo::events::EventListener;
use shared::{OptionField, OptionListKind};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabMenuProps {
    pub tab: Tab,
    pub dispatch: Callback<AppAction>,
}

/// Side drawer listing the actions of the active tab
#[function_component(TabMenu)]
pub fn tab_menu(props: &TabMenuProps) -> Html {
    // Escape closes the drawer
    {
        let dispatch = props.dispatch.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window()
                .and_then(|window| window.document())
                .map(|document| {
                    EventListener::new(&document, "keydown", move |event| {
                        let is_escape = event
                            .dyn_ref::<KeyboardEvent>()
                            .is_some_and(|e| e.key() == "Escape");
                        if is_escape {
                            dispatch.emit(AppAction::CloseMenu);
                        }
                    })
                });
            move || drop(listener)
        });
    }

    let close = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(AppAction::CloseMenu))
    };

    let on_menu_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let item = |label: String, action: AppAction| {
        let dispatch = props.dispatch.clone();
        let onclick = Callback::from(move |_: MouseEvent| dispatch.emit(action.clone()));
        html! {
            <li><button type="button" class="menu-item" {onclick}>{label}</button></li>
        }
    };

    let (title, items) = match props.tab.category() {
        None => (
            "Menu".to_string(),
            vec![item(
                "Overall Income History".to_string(),
                AppAction::OpenHistory(HistoryScope::Overall),
            )],
        ),
        Some(category) => (
            format!("{} Options", category.label()),
            vec![
                item(
                    format!("Show {} History", category.label()),
                    AppAction::OpenHistory(HistoryScope::Category(category)),
                ),
                item(
                    "Modify Source Options".to_string(),
                    AppAction::OpenOptionManagement(OptionListKind::new(category, OptionField::Source)),
                ),
                item(
                    "Modify Type Options".to_string(),
                    AppAction::OpenOptionManagement(OptionListKind::new(
                        category,
                        OptionField::IncomeType,
                    )),
                ),
            ],
        ),
    };

    html! {
        <div class="sidebar-backdrop" onclick={close.clone()}>
            <aside class="sidebar-menu" onclick={on_menu_click}>
                <div class="sidebar-header">
                    <h3>{title}</h3>
                    <button type="button" class="close-btn" onclick={close} aria-label="Close menu">{"×"}</button>
                </div>
                <ul class="menu-list">
                    {for items}
                </ul>
            </aside>
        </div>
    }
}
