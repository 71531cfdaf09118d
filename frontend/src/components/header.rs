use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// e.g. "Wednesday, January 1, 2025"
    pub today_label: String,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{"Project 1 Cr"}</h1>
                <p class="header-date">{&props.today_label}</p>
            </div>
        </header>
    }
}
