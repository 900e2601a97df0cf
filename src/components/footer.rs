// =============================================================================
// Contact Site - Footer Component
// =============================================================================

use leptos::prelude::*;

/// Page footer.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© 2026 Contact Site. Built with Leptos + Rust."</p>
        </footer>
    }
}
