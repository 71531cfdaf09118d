use backend::domain::EntryForm;
use backend::{AppAction, FormField};
use shared::Category;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::services::date_utils::today;

#[derive(Properties, PartialEq)]
pub struct EntryFormCardProps {
    pub category: Category,
    // Form state
    pub form: EntryForm,
    pub sources: Vec<String>,
    pub types: Vec<String>,
    pub currency_symbol: String,

    pub dispatch: Callback<AppAction>,
}

/// Add-income card of a category tab
#[function_component(EntryFormCard)]
pub fn entry_form_card(props: &EntryFormCardProps) -> Html {
    let category = props.category;
    let id = |field: &str| format!("{}-{}", category.slug(), field);

    let update = |to_field: fn(String) -> FormField| {
        let dispatch = props.dispatch.clone();
        move |value: String| dispatch.emit(AppAction::UpdateForm(category, to_field(value)))
    };

    let on_amount_input = {
        let update = update(FormField::Amount);
        Callback::from(move |e: InputEvent| update(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_date_change = {
        let update = update(FormField::Date);
        Callback::from(move |e: Event| update(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_source_change = {
        let update = update(FormField::Source);
        Callback::from(move |e: Event| update(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };
    let on_type_change = {
        let update = update(FormField::IncomeType);
        Callback::from(move |e: Event| update(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };
    let on_note_input = {
        let update = update(FormField::Note);
        Callback::from(move |e: InputEvent| update(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };

    // Keep the selects in step with the buffer after resets and renames
    let source_ref = use_node_ref();
    let type_ref = use_node_ref();
    {
        let source_ref = source_ref.clone();
        let type_ref = type_ref.clone();
        use_effect_with(
            (
                props.form.source.clone(),
                props.form.income_type.clone(),
                props.sources.clone(),
                props.types.clone(),
            ),
            move |(source, income_type, _, _)| {
                if let Some(select) = source_ref.cast::<HtmlSelectElement>() {
                    select.set_value(source);
                }
                if let Some(select) = type_ref.cast::<HtmlSelectElement>() {
                    select.set_value(income_type);
                }
            },
        );
    }

    let on_submit = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatch.emit(AppAction::SubmitEntry {
                category,
                today: today(),
            });
        })
    };

    let select_options = |labels: &[String], selected: &str, placeholder: &str| {
        html! {
            <>
                <option value="" disabled=true selected={selected.is_empty()}>{placeholder}</option>
                {for labels.iter().map(|label| html! {
                    <option value={label.clone()} selected={label == selected}>{label}</option>
                })}
            </>
        }
    };

    html! {
        <section class="card input-card">
            <h2>{format!("Add {} Income", category.label())}</h2>

            <form class="entry-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for={id("amount")}>{"Amount"}</label>
                    <div class="amount-input">
                        <span class="currency-icon">{&props.currency_symbol}</span>
                        <input
                            type="text"
                            inputmode="decimal"
                            id={id("amount")}
                            placeholder="0"
                            value={props.form.amount.clone()}
                            oninput={on_amount_input}
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for={id("date")}>{"Date"}</label>
                    <input
                        type="date"
                        id={id("date")}
                        value={props.form.date.clone()}
                        onchange={on_date_change}
                    />
                </div>

                <div class="form-group">
                    <label for={id("source")}>{"Source"}</label>
                    <select id={id("source")} ref={source_ref} onchange={on_source_change}>
                        {select_options(&props.sources, &props.form.source, "Select Source")}
                    </select>
                </div>

                <div class="form-group">
                    <label for={id("type")}>{"Type"}</label>
                    <select id={id("type")} ref={type_ref} onchange={on_type_change}>
                        {select_options(&props.types, &props.form.income_type, "Select Type")}
                    </select>
                </div>

                <div class="form-group">
                    <label for={id("note")}>{"Note"}</label>
                    <textarea
                        id={id("note")}
                        rows="2"
                        placeholder="Add any relevant notes..."
                        value={props.form.note.clone()}
                        oninput={on_note_input}
                    />
                </div>

                <button type="submit" class="btn btn-primary add-entry-btn">
                    {format!("Add {} Income", category.label())}
                </button>
            </form>
        </section>
    }
}
