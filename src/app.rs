// =============================================================================
// Contact Site - Main App Component
// =============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};

use crate::config::SiteConfig;
use crate::pages::HomePage;

/// Root component. Renders the static page markup; behavior is attached
/// afterwards by [`crate::dom::boot`].
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(config);

    view! {
        <Title text="Welcome" />
        <Meta name="description" content="Get to know us and send a message." />
        <HomePage />
    }
}
