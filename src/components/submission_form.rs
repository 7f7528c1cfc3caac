use gloo::console;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::status::SubmissionStatus;
use crate::hooks::use_submission::use_submission;
use crate::models::form::FormState;

/// CSV text area plus max-clusters field. Owns its state and its submission.
#[function_component(SubmissionForm)]
pub fn submission_form() -> Html {
    let form = use_state(FormState::default);
    let submission = use_submission();

    let on_text_change = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(form.with_text(target.value()));
        })
    };

    let on_param_change = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            let next = form.with_max_clusters(&target.value());
            if let Some(err) = next.param_error() {
                console::warn!(&format!("Rejected max clusters input: {err}"));
            }
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let submit = submission.submit.clone();
        Callback::from(move |_: MouseEvent| match form.payload() {
            Ok(payload) => submit.emit(payload),
            Err(err) => console::warn!(&format!("Not submitting: {err}")),
        })
    };

    html! {
        <div class="data-entry-wrapper">
            <form onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                <textarea
                    value={form.text.clone()}
                    oninput={on_text_change}
                    aria-label="CSV data"
                />
                <input
                    name="max clusters"
                    type="number"
                    min="1"
                    value={form.max_clusters_input.clone()}
                    oninput={on_param_change}
                    aria-label="Max clusters"
                />
            </form>
            if let Some(err) = form.param_error() {
                <div class="status error field-error">
                    <p>{"❌ "}{err.to_string()}</p>
                </div>
            }
            <button onclick={on_submit} disabled={form.param_error().is_some()}>
                {"Submit Data"}
            </button>
            <SubmissionStatus state={submission.state.clone()} />
        </div>
    }
}
