// =============================================================================
// Contact Site - Page Capabilities
// =============================================================================
// Table of Contents:
// 1. Errors
// 2. Page Handle
// 3. Name Source
// =============================================================================

use thiserror::Error;

// -----------------------------------------------------------------------------
// 1. Errors
// -----------------------------------------------------------------------------

/// DOM lookup failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("No element with id `{0}`")]
    MissingElement(String),

    #[error("Element `{0}` is not a form control")]
    NotAnInput(String),

    #[error("Element `{0}` has no style")]
    NotStylable(String),
}

// -----------------------------------------------------------------------------
// 2. Page Handle
// -----------------------------------------------------------------------------

/// Where a scrolled element should land in the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBlock {
    /// Align the element's top edge with the top of the viewport.
    Start,
    /// Scroll as little as needed to bring the element into view.
    Nearest,
}

/// Handle to the rendered page. All lookups are by element id.
///
/// Methods take `&self`; the DOM is the only shared state and every handler
/// runs to completion on one thread.
pub trait Page {
    fn contains(&self, id: &str) -> bool;

    /// Current text content. Part of the handle so callers can read back
    /// what the handlers wrote.
    fn text(&self, id: &str) -> Result<String, PageError>;

    fn set_text(&self, id: &str, text: &str) -> Result<(), PageError>;

    /// Current value of an `<input>` or `<textarea>`.
    fn input_value(&self, id: &str) -> Result<String, PageError>;

    fn has_class(&self, id: &str, class: &str) -> Result<bool, PageError>;

    fn add_class(&self, id: &str, class: &str) -> Result<(), PageError>;

    fn remove_class(&self, id: &str, class: &str) -> Result<(), PageError>;

    /// Set the inline `display` style.
    fn set_display(&self, id: &str, display: &str) -> Result<(), PageError>;

    /// Smoothly scroll the element into view.
    fn scroll_into_view(&self, id: &str, block: ScrollBlock) -> Result<(), PageError>;
}

// -----------------------------------------------------------------------------
// 3. Name Source
// -----------------------------------------------------------------------------

/// Asks the visitor for their name. `None` means cancelled or unavailable.
pub trait NameSource {
    fn request_name(&self) -> Option<String>;
}

/// A fixed answer, used when prompting is not wanted.
impl NameSource for Option<String> {
    fn request_name(&self) -> Option<String> {
        self.clone()
    }
}
