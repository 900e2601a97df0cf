// =============================================================================
// Contact Site - Main Library Entry Point
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// 3. WASM Entry Point
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod dom;
pub mod page;
pub mod pages;
pub mod timestamp;
pub mod validation;

#[cfg(test)]
mod testing;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use app::App;
pub use config::SiteConfig;
pub use controller::{SiteController, Submission, SubmitOutcome};
pub use page::{NameSource, Page, PageError, ScrollBlock};
pub use validation::{ContactForm, Field, FieldError};

// -----------------------------------------------------------------------------
// 3. WASM Entry Point
// -----------------------------------------------------------------------------

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// Mount the page and attach its behavior (for external callers).
#[wasm_bindgen]
pub fn mount() {
    start();
}

/// Install the panic hook and logger, render the page, then boot the controller.
pub fn start() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::from_env();
    // Ignore if a logger is already installed
    let _ = console_log::init_with_level(config.log_level);
    log::info!("Starting contact site...");

    let app_config = config.clone();
    leptos::mount::mount_to_body(move || view! { <App config=app_config /> });

    if let Err(e) = dom::boot(config) {
        log::warn!("Failed to attach page behavior: {e:?}");
    }
}
