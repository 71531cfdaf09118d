use backend::{AppAction, Tab};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub active: Tab,
    pub dispatch: Callback<AppAction>,
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <nav class="tab-bar">
            {for Tab::ALL.into_iter().map(|tab| {
                let onclick = {
                    let dispatch = props.dispatch.clone();
                    Callback::from(move |_: MouseEvent| dispatch.emit(AppAction::SwitchTab(tab)))
                };
                let class = classes!(
                    "tab-button",
                    (tab == Tab::Home).then_some("home-tab"),
                    (tab == props.active).then_some("active"),
                );
                html! {
                    <button type="button" {class} {onclick} aria-label={tab.label()}>
                        {if tab == Tab::Home { "🏠" } else { tab.label() }}
                    </button>
                }
            })}
        </nav>
    }
}
