use chrono::{DateTime, Utc};
use yew::prelude::*;

use crate::hooks::use_countdown::use_countdown;

#[derive(Properties, PartialEq)]
pub struct CountdownDisplayProps {
    pub deadline: DateTime<Utc>,
    pub interval_ms: u32,
}

#[function_component(CountdownDisplay)]
pub fn countdown_display(props: &CountdownDisplayProps) -> Html {
    let remaining = use_countdown(props.deadline, props.interval_ms);

    html! {
        <section class="card countdown-card">
            <h3>{"Goal Deadline"}</h3>
            {if remaining.passed {
                html! { <p class="countdown-passed">{"Goal date passed!"}</p> }
            } else {
                let units = [
                    (remaining.days.clone(), "Days"),
                    (remaining.hours.clone(), "Hours"),
                    (remaining.minutes.clone(), "Minutes"),
                    (remaining.seconds.clone(), "Seconds"),
                ];
                html! {
                    <div class="countdown-grid">
                        {for units.into_iter().map(|(value, unit)| html! {
                            <div class="countdown-unit">
                                <span class="countdown-value">{value}</span>
                                <span class="countdown-label">{unit}</span>
                            </div>
                        })}
                    </div>
                }
            }}
        </section>
    }
}
