// =============================================================================
// Contact Site - Configuration
// =============================================================================
// Table of Contents:
// 1. Element Ids
// 2. Site Config
// =============================================================================

use crate::validation::Field;

// -----------------------------------------------------------------------------
// 1. Element Ids
// -----------------------------------------------------------------------------

/// Identifiers of every element the behavior layer touches.
///
/// The markup in `components` renders these ids and the controller looks
/// them up, so both sides read from the same struct.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementIds {
    pub greeting: String,
    pub menu_trigger: String,
    pub menu: String,
    pub form: String,
    pub name_input: String,
    pub email_input: String,
    pub phone_input: String,
    pub message_input: String,
    pub name_error: String,
    pub email_error: String,
    pub phone_error: String,
    pub message_error: String,
    pub result_panel: String,
    pub result_date: String,
    pub result_name: String,
    pub result_email: String,
    pub result_phone: String,
    pub result_message: String,
}

impl ElementIds {
    /// Id of the input element for `field`.
    pub fn input(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name_input,
            Field::Email => &self.email_input,
            Field::Phone => &self.phone_input,
            Field::Message => &self.message_input,
        }
    }

    /// Id of the error-display element for `field`.
    pub fn error(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name_error,
            Field::Email => &self.email_error,
            Field::Phone => &self.phone_error,
            Field::Message => &self.message_error,
        }
    }

    /// Id of the results sub-element echoing `field`.
    pub fn result(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.result_name,
            Field::Email => &self.result_email,
            Field::Phone => &self.result_phone,
            Field::Message => &self.result_message,
        }
    }
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            greeting: "userName".into(),
            menu_trigger: "hamburger".into(),
            menu: "navMenu".into(),
            form: "contactForm".into(),
            name_input: "name".into(),
            email_input: "email".into(),
            phone_input: "phone".into(),
            message_input: "message".into(),
            name_error: "nameError".into(),
            email_error: "emailError".into(),
            phone_error: "phoneError".into(),
            message_error: "messageError".into(),
            result_panel: "result".into(),
            result_date: "resultDate".into(),
            result_name: "resultName".into(),
            result_email: "resultEmail".into(),
            result_phone: "resultPhone".into(),
            result_message: "resultMessage".into(),
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Site Config
// -----------------------------------------------------------------------------

/// Site-wide settings shared by the markup and the controller.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub ids: ElementIds,

    /// Class selecting the in-page navigation links.
    pub nav_link_class: String,

    /// Marker class for the open menu, set on trigger and container.
    pub open_class: String,

    /// Marker class for a visible results panel.
    pub show_class: String,

    /// Name used when the visitor gives none.
    pub default_name: String,

    /// Text shown in the name prompt.
    pub prompt_message: String,

    pub log_level: log::Level,
}

impl SiteConfig {
    /// Build the config for the current build environment.
    ///
    /// `ENVIRONMENT=development` at compile time turns on debug logging.
    pub fn from_env() -> Self {
        let environment = option_env!("ENVIRONMENT").unwrap_or("production");
        Self::for_environment(environment)
    }

    fn for_environment(environment: &str) -> Self {
        let log_level = if environment == "development" {
            log::Level::Debug
        } else {
            log::Level::Info
        };

        Self {
            log_level,
            ..Self::default()
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            nav_link_class: "nav-link".into(),
            open_class: "active".into(),
            show_class: "show".into(),
            default_name: "Guest".into(),
            prompt_message: "Please enter your name:".into(),
            log_level: log::Level::Info,
        }
    }
}
