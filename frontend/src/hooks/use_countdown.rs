use std::cell::Cell;
use std::rc::Rc;

use backend::domain::{calculate_time_remaining, CountdownState};
use backend::CountdownEngine;
use chrono::{DateTime, Utc};
use gloo::timers::future::TimeoutFuture;
use shared::CountdownValue;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::date_utils::now_utc;
use crate::services::logging::Logger;

/// Remaining time until `target`, refreshed every `interval_ms` until the
/// deadline passes. The loop stops on unmount or once passed.
#[hook]
pub fn use_countdown(target: DateTime<Utc>, interval_ms: u32) -> CountdownValue {
    let value = use_state(|| calculate_time_remaining(target, now_utc()));

    {
        let value = value.clone();
        use_effect_with((target, interval_ms), move |(target, interval_ms)| {
            let mut engine = CountdownEngine::new(*target, now_utc());
            value.set(engine.current().clone());

            let active = Rc::new(Cell::new(true));
            if !engine.is_passed() {
                let active = active.clone();
                let interval_ms = *interval_ms;
                spawn_local(async move {
                    loop {
                        TimeoutFuture::new(interval_ms).await;
                        if !active.get() {
                            break;
                        }

                        let state = engine.tick(now_utc());
                        value.set(engine.current().clone());
                        if state == CountdownState::Passed {
                            Logger::info_with_component("countdown-hook", "Goal deadline passed, countdown stopped");
                            break;
                        }
                    }
                });
            }

            move || active.set(false)
        });
    }

    (*value).clone()
}
