use chrono::Utc;
use gloo::console;
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::models::submission::{SubmissionLedger, SubmissionPayload, SubmissionState};
use crate::services::api;

/// Handle returned by `use_submission` hook
#[derive(Clone, PartialEq)]
pub struct SubmissionHandle {
    pub state: SubmissionState,
    pub submit: Callback<SubmissionPayload>,
}

/// Dispatches one request per `submit` call and tracks the newest one.
#[hook]
pub fn use_submission() -> SubmissionHandle {
    let state = use_state(|| SubmissionState::Idle);
    let ledger = use_mut_ref(SubmissionLedger::default);

    let submit = {
        let state = state.clone();
        Callback::from(move |payload: SubmissionPayload| {
            let ticket = ledger.borrow_mut().issue(Utc::now());
            state.set(SubmissionState::Pending(ticket));
            console::log!(&format!(
                "Submitting request #{}: max_clusters={}",
                ticket.id, payload.max_clusters
            ));

            let state = state.clone();
            let ledger = ledger.clone();
            spawn_local(async move {
                let outcome = match api::submit(payload).await {
                    Ok(result) => {
                        console::log!(&format!(
                            "Request #{} returned {} points and {} centers",
                            ticket.id,
                            result.point_count(),
                            result.center_count()
                        ));
                        SubmissionState::Succeeded(ticket, Rc::new(result))
                    }
                    Err(e) => {
                        console::error!(&format!("Request #{} failed: {e}", ticket.id));
                        SubmissionState::Failed(ticket, e.to_string())
                    }
                };

                if !ledger.borrow().is_current(&ticket) {
                    console::warn!(&format!(
                        "Request #{} superseded, not displaying its result",
                        ticket.id
                    ));
                    return;
                }
                state.set(outcome);

                TimeoutFuture::new(Config::STATUS_RESET_MS).await;
                if ledger.borrow().is_current(&ticket) {
                    state.set(SubmissionState::Idle);
                }
            });
        })
    };

    SubmissionHandle {
        state: (*state).clone(),
        submit,
    }
}
