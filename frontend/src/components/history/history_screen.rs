use backend::domain::InlineEdit;
use backend::{AppAction, HistoryScope};
use shared::CategorizedEntry;
use yew::prelude::*;

use super::history_table::HistoryTable;

#[derive(Properties, PartialEq)]
pub struct HistoryScreenProps {
    pub scope: HistoryScope,
    pub rows: Vec<CategorizedEntry>,
    pub inline_edit: Option<InlineEdit>,
    pub actions_row: Option<String>,
    pub currency_symbol: String,
    pub note_preview_chars: usize,
    pub dispatch: Callback<AppAction>,
}

/// Full-screen history of one category or of both
#[function_component(HistoryScreen)]
pub fn history_screen(props: &HistoryScreenProps) -> Html {
    let on_close = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(AppAction::CloseHistory))
    };

    html! {
        <section class="history-screen">
            <h2 class="history-title">{props.scope.title()}</h2>
            <HistoryTable
                rows={props.rows.clone()}
                show_category={props.scope == HistoryScope::Overall}
                inline_edit={props.inline_edit.clone()}
                actions_row={props.actions_row.clone()}
                currency_symbol={props.currency_symbol.clone()}
                note_preview_chars={props.note_preview_chars}
                dispatch={props.dispatch.clone()}
            />
            <button type="button" class="fab-button history-home-fab" aria-label="Go to Home Screen" onclick={on_close}>
                {"🏠"}
            </button>
        </section>
    }
}
