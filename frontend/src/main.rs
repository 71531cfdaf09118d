use backend::domain::formatting::{format_currency, format_entry_date, format_long_date};
use backend::{AppAction, HistoryScope, Overlay, Tab};
use log::LevelFilter;
use shared::{Category, OptionField, OptionListKind};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{
    ConfirmationModal, CountdownDisplay, EntryFormCard, Header, HistoryScreen,
    OptionManagementModal, ProgressBar, TabBar, TabMenu,
};
use hooks::use_controller::{use_controller, Controller, UseControllerResult};
use services::date_utils::today;

fn home_tab(controller: &Controller) -> Html {
    let config = controller.config();
    html! {
        <>
            <ProgressBar
                label="Overall"
                current={controller.ledger().overall_total()}
                target={config.overall_goal}
                currency_symbol={config.currency_symbol.clone()}
            />
            <CountdownDisplay deadline={config.deadline} interval_ms={config.countdown_interval_ms} />
        </>
    }
}

fn category_tab(controller: &Controller, category: Category, dispatch: &Callback<AppAction>) -> Html {
    let config = controller.config();
    let options = |field: OptionField| {
        controller
            .ledger()
            .options(OptionListKind::new(category, field))
            .labels()
            .to_vec()
    };

    html! {
        <>
            <ProgressBar
                label={category.label()}
                current={controller.ledger().total_for_category(category)}
                target={config.goal_for(category)}
                currency_symbol={config.currency_symbol.clone()}
            />
            <EntryFormCard
                {category}
                form={controller.form(category).clone()}
                sources={options(OptionField::Source)}
                types={options(OptionField::IncomeType)}
                currency_symbol={config.currency_symbol.clone()}
                dispatch={dispatch.clone()}
            />
        </>
    }
}

fn history_screen(controller: &Controller, scope: HistoryScope, dispatch: &Callback<AppAction>) -> Html {
    let view = controller.view();
    let config = controller.config();
    html! {
        <HistoryScreen
            {scope}
            rows={controller.history_rows(scope)}
            inline_edit={view.inline_edit.clone()}
            actions_row={view.actions_row.clone()}
            currency_symbol={config.currency_symbol.clone()}
            note_preview_chars={config.note_preview_chars}
            dispatch={dispatch.clone()}
        />
    }
}

fn overlay(controller: &Controller, dispatch: &Callback<AppAction>) -> Html {
    let view = controller.view();
    match &view.overlay {
        Overlay::TabMenu => html! {
            <TabMenu tab={view.active_tab} dispatch={dispatch.clone()} />
        },
        Overlay::OptionManagement(kind) => html! {
            <OptionManagementModal
                kind={*kind}
                labels={controller.ledger().options(*kind).labels().to_vec()}
                editor={view.option_editor.clone()}
                dispatch={dispatch.clone()}
            />
        },
        Overlay::DeleteConfirmation { target, .. } => {
            let message = format!(
                "Are you sure you want to delete this entry of {} on {}?",
                format_currency(target.amount, &controller.config().currency_symbol),
                format_entry_date(&target.date)
            );
            let on_confirm = {
                let dispatch = dispatch.clone();
                Callback::from(move |_: ()| dispatch.emit(AppAction::ConfirmDelete))
            };
            let on_cancel = {
                let dispatch = dispatch.clone();
                Callback::from(move |_: ()| dispatch.emit(AppAction::CancelDelete))
            };
            html! {
                <ConfirmationModal title="Confirm Deletion" {message} {on_confirm} {on_cancel} />
            }
        }
        Overlay::None | Overlay::History(_) => html! {},
    }
}

#[function_component(App)]
fn app() -> Html {
    let UseControllerResult {
        controller,
        error,
        dispatch,
        dismiss_error,
    } = use_controller();
    let today_label = format_long_date(today());

    let guard = controller.borrow();
    let controller = match guard.as_ref() {
        Ok(controller) => controller,
        Err(message) => {
            return html! {
                <div class="app">
                    <Header {today_label} />
                    <main class="container">
                        <div class="form-message error load-error">{message}</div>
                    </main>
                </div>
            };
        }
    };
    let view = controller.view();

    let error_banner = match error {
        Some(message) => {
            let onclick = Callback::from(move |_: MouseEvent| dismiss_error.emit(()));
            html! {
                <div class="form-message error" role="alert">
                    <span>{message}</span>
                    <button type="button" class="close-btn" aria-label="Dismiss" {onclick}>{"×"}</button>
                </div>
            }
        }
        None => html! {},
    };

    let content = match view.history_scope() {
        Some(scope) => history_screen(controller, scope, &dispatch),
        None => match view.active_tab {
            Tab::Home => home_tab(controller),
            Tab::Freelancing => category_tab(controller, Category::Freelancing, &dispatch),
            Tab::Selling => category_tab(controller, Category::Selling, &dispatch),
        },
    };

    let in_history = view.history_scope().is_some();
    let menu_fab = if !in_history {
        let dispatch = dispatch.clone();
        let onclick = Callback::from(move |_: MouseEvent| dispatch.emit(AppAction::ToggleMenu));
        html! {
            <button
                type="button"
                class="fab-button menu-fab"
                id={format!("{}-menu-fab", view.active_tab.label().to_lowercase())}
                aria-label="Open menu"
                {onclick}
            >
                {"☰"}
            </button>
        }
    } else {
        html! {}
    };

    html! {
        <div class="app">
            <Header {today_label} />
            <main class="container">
                {error_banner}
                {content}
            </main>
            {menu_fab}
            if !in_history {
                <TabBar active={view.active_tab} dispatch={dispatch.clone()} />
            }
            {overlay(controller, &dispatch)}
        </div>
    }
}

fn main() {
    services::logging::init(LevelFilter::Info);
    yew::Renderer::<App>::new().render();
}
