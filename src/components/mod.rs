// =============================================================================
// Contact Site - UI Components
// =============================================================================
// Table of Contents:
// 1. Navigation
// 2. Form Components
// 3. Results + Footer
// =============================================================================

pub mod contact;
pub mod footer;
pub mod forms;
pub mod nav;
pub mod results;

pub use contact::ContactSection;
pub use footer::Footer;
pub use forms::FormField;
pub use nav::{NavBar, SECTIONS};
pub use results::ResultPanel;
