// =============================================================================
// Contact Site - Site Controller
// =============================================================================
// Table of Contents:
// 1. Submission Types
// 2. Controller
// 3. Greeter
// 4. Menu + Smooth Scroll
// 5. Contact Form
// =============================================================================

use crate::config::SiteConfig;
use crate::page::{NameSource, Page, PageError, ScrollBlock};
use crate::timestamp::{Clock, SystemClock};
use crate::validation::{ContactForm, Field, FieldError};

// -----------------------------------------------------------------------------
// 1. Submission Types
// -----------------------------------------------------------------------------

/// A contact form that passed validation, with the time it was accepted.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub form: ContactForm,
    pub submitted_at: String,
}

/// Result of one submit event.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Every field passed; the results panel shows this submission.
    Accepted(Submission),
    /// At least one field failed; the panel was left untouched.
    Rejected(Vec<(Field, FieldError)>),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

// -----------------------------------------------------------------------------
// 2. Controller
// -----------------------------------------------------------------------------

/// Behavior layer for the page: one instance per page, bound to its DOM.
pub struct SiteController<P: Page> {
    page: P,
    config: SiteConfig,
    names: Box<dyn NameSource>,
    clock: Box<dyn Clock>,
}

impl<P: Page> SiteController<P> {
    /// Create a controller over `page`. Without a name source every visitor is
    /// greeted with the default name.
    pub fn new(page: P, config: SiteConfig) -> Self {
        Self {
            page,
            config,
            names: Box::new(None::<String>),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_name_source(mut self, names: impl NameSource + 'static) -> Self {
        self.names = Box::new(names);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Missing elements are skipped, never fatal.
    fn tolerate<T>(&self, result: Result<T, PageError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                log::debug!("Skipping page update: {e}");
                None
            }
        }
    }

    fn write(&self, id: &str, text: &str) {
        self.tolerate(self.page.set_text(id, text));
    }
}

// -----------------------------------------------------------------------------
// 3. Greeter
// -----------------------------------------------------------------------------

impl<P: Page> SiteController<P> {
    /// Ask for the visitor's name and write it into the greeting.
    ///
    /// Returns the name shown, which is the default when the answer is
    /// missing or blank.
    pub fn greet(&self) -> String {
        let name = self
            .names
            .request_name()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.config.default_name.clone());

        self.write(&self.config.ids.greeting, &name);
        log::info!("Greeting visitor as {name}");
        name
    }
}

// -----------------------------------------------------------------------------
// 4. Menu + Smooth Scroll
// -----------------------------------------------------------------------------

impl<P: Page> SiteController<P> {
    /// The menu is open when the trigger carries the marker class.
    pub fn is_menu_open(&self) -> bool {
        let ids = &self.config.ids;
        self.tolerate(self.page.has_class(&ids.menu_trigger, &self.config.open_class))
            .unwrap_or(false)
    }

    /// Flip the menu state. Returns whether the menu is now open.
    pub fn toggle_menu(&self) -> bool {
        let open = !self.is_menu_open();
        self.set_menu_open(open);
        log::debug!("Menu {}", if open { "opened" } else { "closed" });
        open
    }

    pub fn close_menu(&self) {
        self.set_menu_open(false);
    }

    fn set_menu_open(&self, open: bool) {
        let ids = &self.config.ids;
        let class = &self.config.open_class;
        for id in [&ids.menu_trigger, &ids.menu] {
            let result = if open {
                self.page.add_class(id, class)
            } else {
                self.page.remove_class(id, class)
            };
            self.tolerate(result);
        }
    }

    /// Handle a navigation link: close the menu and scroll to its section.
    ///
    /// Returns `true` when a section was found and scrolled to.
    pub fn follow_link(&self, href: &str) -> bool {
        self.close_menu();

        let Some(section) = section_id(href) else {
            log::debug!("Link `{href}` has no in-page target");
            return false;
        };
        if !self.page.contains(section) {
            log::debug!("No section `{section}` on this page");
            return false;
        }

        log::debug!("Scrolling to `{section}`");
        self.tolerate(self.page.scroll_into_view(section, ScrollBlock::Start))
            .is_some()
    }
}

/// Section id named by a link's fragment, e.g. `#about` -> `about`.
pub fn section_id(href: &str) -> Option<&str> {
    href.split_once('#')
        .map(|(_, fragment)| fragment)
        .filter(|fragment| !fragment.is_empty())
}

// -----------------------------------------------------------------------------
// 5. Contact Form
// -----------------------------------------------------------------------------

impl<P: Page> SiteController<P> {
    /// Read the four inputs, trimmed. A missing input reads as empty.
    pub fn read_form(&self) -> ContactForm {
        let value = |field: Field| {
            self.tolerate(self.page.input_value(self.config.ids.input(field)))
                .unwrap_or_default()
        };
        ContactForm::from_raw(
            &value(Field::Name),
            &value(Field::Email),
            &value(Field::Phone),
            &value(Field::Message),
        )
    }

    /// Blank every field's error message.
    pub fn clear_errors(&self) {
        for field in Field::ALL {
            self.clear_field_error(field);
        }
    }

    /// Blank one field's error message, e.g. as soon as the visitor edits it.
    pub fn clear_field_error(&self, field: Field) {
        self.write(self.config.ids.error(field), "");
    }

    /// Validate the form and, when every field passes, show the results.
    pub fn submit(&self) -> SubmitOutcome {
        self.clear_errors();

        let form = self.read_form();
        let failures = form.validate();

        if !failures.is_empty() {
            for (field, error) in &failures {
                self.write(self.config.ids.error(*field), &error.to_string());
            }
            log::debug!("Contact form rejected: {} invalid field(s)", failures.len());
            return SubmitOutcome::Rejected(failures);
        }

        let submission = Submission {
            submitted_at: self.clock.timestamp(),
            form,
        };
        self.render_results(&submission);
        log::info!("Contact form accepted at {}", submission.submitted_at);
        SubmitOutcome::Accepted(submission)
    }

    fn render_results(&self, submission: &Submission) {
        let ids = &self.config.ids;

        self.write(&ids.result_date, &submission.submitted_at);
        for field in Field::ALL {
            self.write(ids.result(field), submission.form.get(field));
        }

        self.tolerate(self.page.add_class(&ids.result_panel, &self.config.show_class));
        self.tolerate(self.page.set_display(&ids.result_panel, "block"));
        self.tolerate(self.page.scroll_into_view(&ids.result_panel, ScrollBlock::Nearest));
    }
}
