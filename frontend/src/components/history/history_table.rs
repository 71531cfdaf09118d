use backend::domain::formatting::{format_currency, format_entry_date, truncate_note};
use backend::domain::InlineEdit;
use backend::AppAction;
use shared::CategorizedEntry;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, Node};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HistoryTableProps {
    pub rows: Vec<CategorizedEntry>,
    /// Adds a Category column (overall history)
    pub show_category: bool,
    pub inline_edit: Option<InlineEdit>,
    pub actions_row: Option<String>,
    pub currency_symbol: String,
    pub note_preview_chars: usize,
    pub dispatch: Callback<AppAction>,
}

/// Presses that start on a control inside the row belong to the control
fn starts_on_control(target: Option<web_sys::EventTarget>) -> bool {
    target
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest("button, input").ok().flatten())
        .is_some()
}

/// Whether focus moving from `target` to `related` leaves the row holding `target`
fn focus_leaves_row(
    target: Option<web_sys::EventTarget>,
    related: Option<web_sys::EventTarget>,
) -> bool {
    let row = target
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest("tr").ok().flatten());
    let next = related.and_then(|related| related.dyn_into::<Node>().ok());
    match (row, next) {
        (Some(row), Some(next)) => !row.contains(Some(&next)),
        _ => true,
    }
}

#[function_component(HistoryTable)]
pub fn history_table(props: &HistoryTableProps) -> Html {
    if props.rows.is_empty() {
        return html! { <p class="empty-history">{"No entries yet."}</p> };
    }

    let render_row = |row: &CategorizedEntry| {
        let entry = &row.entry;
        let category = row.category;
        let id = entry.id.clone();
        let dispatch = &props.dispatch;

        let editing = props
            .inline_edit
            .as_ref()
            .filter(|edit| edit.entry_id == entry.id);
        let actions_visible = props.actions_row.as_deref() == Some(entry.id.as_str());

        let send = |action: AppAction| {
            let dispatch = dispatch.clone();
            Callback::from(move |_: MouseEvent| dispatch.emit(action.clone()))
        };

        let on_mouse_down = {
            let dispatch = dispatch.clone();
            let id = id.clone();
            Callback::from(move |e: MouseEvent| {
                if e.button() != 0 || starts_on_control(e.target()) {
                    return;
                }
                dispatch.emit(AppAction::RowPressStart(id.clone()));
            })
        };
        let on_touch_start = {
            let dispatch = dispatch.clone();
            let id = id.clone();
            Callback::from(move |e: TouchEvent| {
                if e.touches().length() == 0 || starts_on_control(e.target()) {
                    return;
                }
                // Suppress the emulated mouse events that would follow
                e.prevent_default();
                dispatch.emit(AppAction::RowPressStart(id.clone()));
            })
        };
        let on_mouse_up = {
            let dispatch = dispatch.clone();
            Callback::from(move |_: MouseEvent| dispatch.emit(AppAction::RowPressEnd))
        };
        let on_touch_end = {
            let dispatch = dispatch.clone();
            Callback::from(move |e: TouchEvent| {
                // Another finger is still down
                if e.touches().length() > 0 {
                    return;
                }
                dispatch.emit(AppAction::RowPressEnd);
            })
        };
        let on_mouse_leave = {
            let dispatch = dispatch.clone();
            Callback::from(move |_: MouseEvent| dispatch.emit(AppAction::RowPressCancel))
        };
        let on_touch_cancel = {
            let dispatch = dispatch.clone();
            Callback::from(move |_: TouchEvent| dispatch.emit(AppAction::RowPressCancel))
        };
        let on_focus_in = {
            let dispatch = dispatch.clone();
            let id = id.clone();
            Callback::from(move |_: FocusEvent| dispatch.emit(AppAction::RowFocus(id.clone())))
        };
        let on_focus_out = {
            let dispatch = dispatch.clone();
            let id = id.clone();
            Callback::from(move |e: FocusEvent| {
                // Events are delegated, so the row comes from the event target
                if focus_leaves_row(e.target(), e.related_target()) {
                    dispatch.emit(AppAction::RowBlur(id.clone()));
                }
            })
        };

        let amount_cell = if let Some(edit) = editing {
            let on_draft_input = {
                let dispatch = dispatch.clone();
                Callback::from(move |e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlInputElement>().value();
                    dispatch.emit(AppAction::UpdateEditDraft(value));
                })
            };
            let on_draft_keydown = {
                let dispatch = dispatch.clone();
                Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
                    "Enter" => dispatch.emit(AppAction::SaveEdit),
                    "Escape" => dispatch.emit(AppAction::CancelEdit),
                    _ => {}
                })
            };
            html! {
                <td class="amount-cell editing">
                    <input
                        type="number"
                        class="history-edit-input"
                        min="0"
                        step="any"
                        value={edit.draft_amount.clone()}
                        oninput={on_draft_input}
                        onkeydown={on_draft_keydown}
                    />
                    <button type="button" class="btn btn-small btn-primary save-btn" onclick={send(AppAction::SaveEdit)}>
                        {"Save"}
                    </button>
                    <button type="button" class="btn btn-small btn-secondary" onclick={send(AppAction::CancelEdit)}>
                        {"Cancel"}
                    </button>
                </td>
            }
        } else {
            html! {
                <td class="amount-cell">
                    <span class="amount">{format_currency(entry.amount, &props.currency_symbol)}</span>
                    <div class={classes!("row-actions", actions_visible.then_some("visible"))}>
                        <button
                            type="button"
                            class="btn btn-small btn-secondary edit-btn"
                            onclick={send(AppAction::BeginEdit { category, entry_id: id.clone() })}
                        >
                            {"Edit"}
                        </button>
                        <button
                            type="button"
                            class="btn btn-small btn-danger delete-btn"
                            onclick={send(AppAction::RequestDelete { category, entry_id: id.clone() })}
                        >
                            {"Delete"}
                        </button>
                    </div>
                </td>
            }
        };

        html! {
            <tr
                key={entry.id.clone()}
                class={classes!("history-row", actions_visible.then_some("actions-visible"))}
                tabindex="0"
                onmousedown={on_mouse_down}
                onmouseup={on_mouse_up}
                onmouseleave={on_mouse_leave}
                ontouchstart={on_touch_start}
                ontouchend={on_touch_end}
                ontouchcancel={on_touch_cancel}
                onfocusin={on_focus_in}
                onfocusout={on_focus_out}
            >
                <td class="date">{format_entry_date(&entry.date)}</td>
                {if props.show_category {
                    html! { <td class="category">{category.label()}</td> }
                } else {
                    html! {}
                }}
                <td class="source">{&entry.source}</td>
                <td class="type">{&entry.income_type}</td>
                <td class="note" title={entry.note.clone()}>
                    {truncate_note(&entry.note, props.note_preview_chars)}
                </td>
                {amount_cell}
            </tr>
        }
    };

    html! {
        <div class="table-container">
            <table class="history-table">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        {if props.show_category { html! { <th>{"Category"}</th> } } else { html! {} }}
                        <th>{"Source"}</th>
                        <th>{"Type"}</th>
                        <th>{"Note"}</th>
                        <th>{"Amount"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for props.rows.iter().map(render_row)}
                </tbody>
            </table>
        </div>
    }
}
