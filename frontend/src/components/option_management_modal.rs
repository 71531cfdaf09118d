use backend::domain::OptionEditorState;
use backend::AppAction;
use gloo::dialogs::confirm;
use shared::OptionListKind;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OptionManagementModalProps {
    pub kind: OptionListKind,
    pub labels: Vec<String>,
    pub editor: OptionEditorState,
    pub dispatch: Callback<AppAction>,
}

fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

#[function_component(OptionManagementModal)]
pub fn option_management_modal(props: &OptionManagementModalProps) -> Html {
    let dispatch = props.dispatch.clone();
    let send = move |action: AppAction| {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(action.clone()))
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_new_option_input = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: InputEvent| {
            dispatch.emit(AppAction::UpdateNewOptionDraft(input_value(&e)));
        })
    };

    let on_add_submit = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatch.emit(AppAction::AddOption);
        })
    };

    let render_option = |label: &String| {
        let renaming = props
            .editor
            .renaming
            .as_ref()
            .filter(|rename| &rename.original == label);

        if let Some(rename) = renaming {
            let on_rename_input = {
                let dispatch = props.dispatch.clone();
                Callback::from(move |e: InputEvent| {
                    dispatch.emit(AppAction::UpdateRenameDraft(input_value(&e)));
                })
            };
            let on_rename_keydown = {
                let dispatch = props.dispatch.clone();
                Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
                    "Enter" => dispatch.emit(AppAction::CommitRename),
                    "Escape" => dispatch.emit(AppAction::CancelRename),
                    _ => {}
                })
            };
            html! {
                <li class="option-item editing">
                    <input
                        type="text"
                        class="option-edit-input"
                        value={rename.draft.clone()}
                        oninput={on_rename_input}
                        onkeydown={on_rename_keydown}
                    />
                    <button type="button" class="btn btn-small btn-primary" onclick={send(AppAction::CommitRename)}>
                        {"Save"}
                    </button>
                    <button type="button" class="btn btn-small btn-secondary" onclick={send(AppAction::CancelRename)}>
                        {"Cancel"}
                    </button>
                </li>
            }
        } else {
            let on_delete = {
                let dispatch = props.dispatch.clone();
                let label = label.clone();
                Callback::from(move |_: MouseEvent| {
                    if confirm(&format!("Are you sure you want to delete \"{}\"?", label)) {
                        dispatch.emit(AppAction::DeleteOption(label.clone()));
                    }
                })
            };
            html! {
                <li class="option-item">
                    <span class="option-label">{label}</span>
                    <div class="option-actions">
                        <button
                            type="button"
                            class="btn btn-small btn-secondary"
                            onclick={send(AppAction::BeginRenameOption(label.clone()))}
                        >
                            {"Edit"}
                        </button>
                        <button type="button" class="btn btn-small btn-danger" onclick={on_delete}>
                            {"Delete"}
                        </button>
                    </div>
                </li>
            }
        }
    };

    html! {
        <div class="modal-backdrop" onclick={send(AppAction::CloseOptionManagement)}>
            <div class="modal option-modal" role="dialog" aria-modal="true" onclick={on_modal_click}>
                <div class="modal-header">
                    <h3 class="modal-title">{props.kind.title()}</h3>
                    <button
                        type="button"
                        class="close-btn"
                        aria-label="Close"
                        onclick={send(AppAction::CloseOptionManagement)}
                    >
                        {"×"}
                    </button>
                </div>

                <form class="add-option-form" onsubmit={on_add_submit}>
                    <input
                        type="text"
                        placeholder="New option name"
                        value={props.editor.new_option_draft.clone()}
                        oninput={on_new_option_input}
                    />
                    <button type="submit" class="btn btn-primary">{"Add"}</button>
                </form>

                <ul class="option-list">
                    {for props.labels.iter().map(render_option)}
                </ul>
            </div>
        </div>
    }
}
