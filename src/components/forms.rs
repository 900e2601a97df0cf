// =============================================================================
// Contact Site - Form Components
// =============================================================================
// Table of Contents:
// 1. FormField
// =============================================================================

use leptos::prelude::*;
use crate::config::SiteConfig;
use crate::validation::Field;

// -----------------------------------------------------------------------------
// 1. FormField
// -----------------------------------------------------------------------------

/// Labeled input for one contact field, followed by its error slot.
///
/// The message field renders as a textarea; the rest as inputs.
#[component]
pub fn FormField(
    field: Field,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let input_id = config.ids.input(field).to_string();
    let error_id = config.ids.error(field).to_string();

    let control = match field {
        Field::Message => view! {
            <textarea
                id=input_id.clone()
                name=input_id.clone()
                class="form-textarea"
                rows=5
                placeholder=placeholder
            ></textarea>
        }
        .into_any(),
        _ => {
            let input_type = match field {
                Field::Email => "email",
                Field::Phone => "tel",
                _ => "text",
            };
            view! {
                <input
                    type=input_type
                    id=input_id.clone()
                    name=input_id.clone()
                    class="form-input"
                    placeholder=placeholder
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="form-field">
            <label class="form-label">
                {field.label()}
                <span class="required">"*"</span>
            </label>
            {control}
            <span id=error_id class="error-message"></span>
        </div>
    }
}
