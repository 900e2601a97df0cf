// =============================================================================
// Contact Site - Browser DOM Binding
// =============================================================================
// Table of Contents:
// 1. DomPage
// 2. Prompt Name Source
// 3. Event Wiring
// =============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlInputElement, HtmlTextAreaElement,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::config::SiteConfig;
use crate::controller::SiteController;
use crate::page::{NameSource, Page, PageError, ScrollBlock};
use crate::timestamp::BrowserClock;
use crate::validation::Field;

// -----------------------------------------------------------------------------
// 1. DomPage
// -----------------------------------------------------------------------------

/// [`Page`] over the live browser document.
#[derive(Clone)]
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, id: &str) -> Result<Element, PageError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| PageError::MissingElement(id.to_string()))
    }
}

impl Page for DomPage {
    fn contains(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn text(&self, id: &str) -> Result<String, PageError> {
        Ok(self.element(id)?.text_content().unwrap_or_default())
    }

    fn set_text(&self, id: &str, text: &str) -> Result<(), PageError> {
        self.element(id)?.set_text_content(Some(text));
        Ok(())
    }

    fn input_value(&self, id: &str) -> Result<String, PageError> {
        let element = self.element(id)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            Ok(input.value())
        } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
            Ok(textarea.value())
        } else {
            Err(PageError::NotAnInput(id.to_string()))
        }
    }

    fn has_class(&self, id: &str, class: &str) -> Result<bool, PageError> {
        Ok(self.element(id)?.class_list().contains(class))
    }

    fn add_class(&self, id: &str, class: &str) -> Result<(), PageError> {
        // DOMTokenList only throws for empty or whitespace tokens.
        let _ = self.element(id)?.class_list().add_1(class);
        Ok(())
    }

    fn remove_class(&self, id: &str, class: &str) -> Result<(), PageError> {
        let _ = self.element(id)?.class_list().remove_1(class);
        Ok(())
    }

    fn set_display(&self, id: &str, display: &str) -> Result<(), PageError> {
        let element = self.element(id)?;
        let html = element
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| PageError::NotStylable(id.to_string()))?;
        let _ = html.style().set_property("display", display);
        Ok(())
    }

    fn scroll_into_view(&self, id: &str, block: ScrollBlock) -> Result<(), PageError> {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(match block {
            ScrollBlock::Start => ScrollLogicalPosition::Start,
            ScrollBlock::Nearest => ScrollLogicalPosition::Nearest,
        });
        self.element(id)?
            .scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// 2. Prompt Name Source
// -----------------------------------------------------------------------------

/// Asks for the visitor's name with the browser's blocking `prompt()`.
pub struct PromptNameSource {
    window: Window,
    message: String,
}

impl PromptNameSource {
    pub fn new(window: Window, message: impl Into<String>) -> Self {
        Self {
            window,
            message: message.into(),
        }
    }
}

impl NameSource for PromptNameSource {
    fn request_name(&self) -> Option<String> {
        match self.window.prompt_with_message(&self.message) {
            Ok(answer) => answer,
            Err(e) => {
                log::warn!("Name prompt failed: {e:?}");
                None
            }
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Event Wiring
// -----------------------------------------------------------------------------

type Controller = Rc<SiteController<DomPage>>;

/// Greet the visitor and attach every handler to the rendered page.
///
/// Expects the markup to be mounted already. Elements that are missing are
/// skipped with a debug log.
pub fn boot(config: SiteConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window object available"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document on window"))?;

    let names = PromptNameSource::new(window, config.prompt_message.clone());
    let controller: Controller = Rc::new(
        SiteController::new(DomPage::new(document.clone()), config)
            .with_name_source(names)
            .with_clock(BrowserClock),
    );

    controller.greet();
    bind_menu(&document, &controller)?;
    bind_nav_links(&document, &controller)?;
    bind_form(&document, &controller)?;
    bind_live_error_clearing(&document, &controller)?;

    log::info!("Contact site behavior attached");
    Ok(())
}

/// Attach `handler` for `event` on the element with `id`, for the page lifetime.
fn listen(
    document: &Document,
    id: &str,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let Some(target) = document.get_element_by_id(id) else {
        log::debug!("No element `{id}` to bind `{event}` to");
        return Ok(());
    };
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

fn bind_menu(document: &Document, controller: &Controller) -> Result<(), JsValue> {
    let c = controller.clone();
    listen(document, &controller.config().ids.menu_trigger, "click", move |_| {
        c.toggle_menu();
    })
}

fn bind_nav_links(document: &Document, controller: &Controller) -> Result<(), JsValue> {
    let selector = format!(".{}", controller.config().nav_link_class);
    let links = document.query_selector_all(&selector)?;

    for index in 0..links.length() {
        let Some(link) = links.get(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        let href = link.get_attribute("href").unwrap_or_default();
        let c = controller.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |e: Event| {
            e.prevent_default();
            c.follow_link(&href);
        });
        link.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
        callback.forget();
    }
    Ok(())
}

fn bind_form(document: &Document, controller: &Controller) -> Result<(), JsValue> {
    let c = controller.clone();
    listen(document, &controller.config().ids.form, "submit", move |e: Event| {
        e.prevent_default();
        c.submit();
    })
}

fn bind_live_error_clearing(document: &Document, controller: &Controller) -> Result<(), JsValue> {
    for field in Field::ALL {
        let c = controller.clone();
        listen(document, controller.config().ids.input(field), "input", move |_| {
            c.clear_field_error(field);
        })?;
    }
    Ok(())
}
