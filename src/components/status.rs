use chrono::Local;

use crate::models::submission::SubmissionState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub state: SubmissionState,
}

#[function_component(SubmissionStatus)]
pub fn submission_status(props: &StatusProps) -> Html {
    match &props.state {
        SubmissionState::Idle => html! {},
        SubmissionState::Pending(ticket) => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>
                    {format!(
                        "Request #{} sent at {}",
                        ticket.id,
                        ticket.issued_at.with_timezone(&Local).format("%H:%M:%S")
                    )}
                </p>
            </div>
        },
        SubmissionState::Succeeded(ticket, result) => html! {
            <div class="status success">
                <p>
                    {format!(
                        "✅ Request #{}: {} points scaled, {} empty-space centers found",
                        ticket.id,
                        result.point_count(),
                        result.center_count()
                    )}
                </p>
            </div>
        },
        SubmissionState::Failed(ticket, msg) => html! {
            <div class="status error">
                <p>{format!("❌ Request #{} failed: ", ticket.id)}{msg}</p>
            </div>
        },
    }
}
