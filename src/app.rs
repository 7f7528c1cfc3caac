use std::rc::Rc;
use yew::prelude::*;

use crate::components::chart::ScatterChart;
use crate::components::submission_form::SubmissionForm;
use crate::models::plot::initial_points;

#[function_component(App)]
pub fn app() -> Html {
    let points = use_memo((), |_| initial_points());

    html! {
        <div class="app">
            <header class="app-header">
                <h1 class="app-title">{"Empty Space Finder"}</h1>
            </header>

            <main class="app-main">
                <SubmissionForm />
                <ScatterChart points={Rc::clone(&points)} />
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}
