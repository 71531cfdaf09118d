use std::cell::RefCell;
use std::rc::Rc;

use backend::{AppAction, AppController, Effect, LedgerError};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::services::date_utils::today;
use crate::services::logging::Logger;
use crate::services::storage::LocalStorageStore;

const COMPONENT: &str = "use-controller";

pub type Controller = AppController<LocalStorageStore>;

/// The controller, or the reason it could not be loaded
pub type SharedController = Rc<RefCell<Result<Controller, String>>>;

pub struct UseControllerResult {
    pub controller: SharedController,
    /// Message of the last rejected action, shown until the next successful one
    pub error: Option<String>,
    pub dispatch: Callback<AppAction>,
    pub dismiss_error: Callback<()>,
}

#[derive(Clone)]
struct Dispatcher {
    controller: SharedController,
    error: UseStateHandle<Option<String>>,
    redraw: UseForceUpdateHandle,
    long_press_timer: Rc<RefCell<Option<Timeout>>>,
}

impl Dispatcher {
    fn apply(&self, action: AppAction) {
        let ends_press = matches!(
            action,
            AppAction::RowPressEnd
                | AppAction::RowPressCancel
                | AppAction::SwitchTab(_)
                | AppAction::OpenHistory(_)
                | AppAction::CloseHistory
        );
        let pointer_only = matches!(
            action,
            AppAction::RowPressStart(_)
                | AppAction::RowLongPressFired(_)
                | AppAction::RowPressEnd
                | AppAction::RowPressCancel
                | AppAction::RowFocus(_)
                | AppAction::RowBlur(_)
        );

        let outcome = {
            let Ok(mut guard) = self.controller.try_borrow_mut() else {
                Logger::warn_with_component(COMPONENT, "Controller busy, action dropped");
                return;
            };
            match guard.as_mut() {
                Ok(controller) => controller.dispatch(action),
                Err(_) => return,
            }
        };

        // A fired timer is never dropped from inside its own callback
        if ends_press {
            self.long_press_timer.borrow_mut().take();
        }

        match outcome {
            Ok(Effect::ScheduleLongPress {
                generation,
                delay_ms,
            }) => {
                let dispatcher = self.clone();
                let timeout = Timeout::new(delay_ms, move || {
                    dispatcher.apply(AppAction::RowLongPressFired(generation));
                });
                *self.long_press_timer.borrow_mut() = Some(timeout);
            }
            Ok(Effect::None) => {
                if !pointer_only {
                    self.error.set(None);
                }
            }
            Err(e) => {
                report(&e);
                self.error.set(Some(e.to_string()));
            }
        }

        self.redraw.force_update();
    }
}

fn report(error: &LedgerError) {
    if error.is_validation() {
        Logger::warn_with_component(COMPONENT, &format!("Action rejected: {}", error));
    } else {
        Logger::error_with_component(COMPONENT, &error.to_string());
    }
}

fn load_controller() -> Result<Controller, String> {
    let store = LocalStorageStore::new().map_err(|e| {
        Logger::error_with_component(COMPONENT, &format!("{:#}", e));
        format!("Saved data is unavailable: {}", e)
    })?;

    match AppController::load(store, today()) {
        Ok(controller) => {
            Logger::info_with_component(COMPONENT, "Ledger loaded from localStorage");
            Ok(controller)
        }
        Err(e) => {
            Logger::error_with_component(COMPONENT, &format!("Failed to load ledger: {}", e));
            Err(format!("Could not load saved data: {}", e))
        }
    }
}

/// Owns the app controller for the lifetime of the page and turns its
/// effects into browser timers
#[hook]
pub fn use_controller() -> UseControllerResult {
    let controller = use_mut_ref(load_controller);
    let error = use_state(|| Option::<String>::None);
    let redraw = use_force_update();
    let long_press_timer = use_mut_ref(|| Option::<Timeout>::None);

    let dispatch = {
        let dispatcher = Dispatcher {
            controller: controller.clone(),
            error: error.clone(),
            redraw,
            long_press_timer,
        };
        Callback::from(move |action: AppAction| dispatcher.apply(action))
    };

    let dismiss_error = {
        let error = error.clone();
        Callback::from(move |_: ()| error.set(None))
    };

    UseControllerResult {
        controller,
        error: (*error).clone(),
        dispatch,
        dismiss_error,
    }
}
