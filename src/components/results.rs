// =============================================================================
// Contact Site - Submission Results Panel
// =============================================================================

use leptos::prelude::*;
use crate::config::SiteConfig;
use crate::validation::Field;

/// Echo of the last accepted submission. Hidden until the controller reveals it.
#[component]
pub fn ResultPanel() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let ids = config.ids;

    let rows = Field::ALL
        .into_iter()
        .map(|field| {
            view! {
                <div class="result-row">
                    <span class="result-label">{field.label()}":"</span>
                    <span id=ids.result(field).to_string() class="result-value"></span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div id=ids.result_panel.clone() class="result-section" style="display: none;">
            <h3>"Submitted Information"</h3>
            <div class="result-row">
                <span class="result-label">"Submitted at:"</span>
                <span id=ids.result_date.clone() class="result-value"></span>
            </div>
            {rows}
        </div>
    }
}
