use backend::domain::formatting::{format_currency, progress_percentage};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    /// "Overall", "Freelancing" or "Selling"
    pub label: String,
    pub current: f64,
    pub target: f64,
    pub currency_symbol: String,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let percentage = progress_percentage(props.current, props.target);
    let target = format_currency(props.target, &props.currency_symbol);

    html! {
        <section class="card progress-card">
            <h3>{format!("{} Goal ({})", props.label, target)}</h3>
            <div
                class="progress-bar-container"
                role="progressbar"
                aria-valuenow={format!("{:.2}", percentage)}
                aria-valuemin="0"
                aria-valuemax="100"
            >
                <div class="progress-bar-fill" style={format!("width: {:.2}%;", percentage)}></div>
            </div>
            <div class="progress-text">
                <span>{format!("Current: {}", format_currency(props.current, &props.currency_symbol))}</span>
                <span>{format!("Target: {} ({:.2}%)", target, percentage)}</span>
            </div>
        </section>
    }
}
