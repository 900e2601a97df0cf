// =============================================================================
// Contact Site - Contact Form
// =============================================================================

use leptos::prelude::*;
use crate::components::FormField;
use crate::config::SiteConfig;
use crate::validation::Field;

/// The contact form. Browser validation is off; the controller validates on submit.
#[component]
pub fn ContactSection() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <form id=config.ids.form.clone() class="contact-form" novalidate=true>
            <FormField field=Field::Name placeholder="Your full name" />
            <FormField field=Field::Email placeholder="you@example.com" />
            <FormField field=Field::Phone placeholder="555-123-4567" />
            <FormField field=Field::Message placeholder="How can we help?" />
            <button type="submit" class="btn btn-primary">"Send Message"</button>
        </form>
    }
}
