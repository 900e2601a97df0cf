// =============================================================================
// Contact Site - In-Memory Page for Tests
// =============================================================================

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, FixedOffset, TimeZone};

use crate::config::SiteConfig;
use crate::page::{Page, PageError, ScrollBlock};
use crate::timestamp::Clock;
use crate::validation::Field;

#[derive(Clone, Debug, Default)]
struct FakeElement {
    text: String,
    value: Option<String>,
    classes: BTreeSet<String>,
    display: Option<String>,
}

/// A page made of plain elements keyed by id, recording every scroll.
#[derive(Debug, Default)]
pub struct FakePage {
    elements: RefCell<HashMap<String, FakeElement>>,
    scrolls: RefCell<Vec<(String, ScrollBlock)>>,
}

impl FakePage {
    /// Every element the site markup renders for `config`.
    pub fn for_config(config: &SiteConfig) -> Self {
        let page = Self::default();
        let ids = &config.ids;
        for id in [
            &ids.greeting,
            &ids.menu_trigger,
            &ids.menu,
            &ids.form,
            &ids.result_panel,
            &ids.result_date,
        ] {
            page.insert(id, None);
        }
        for field in Field::ALL {
            page.insert(ids.input(field), Some(String::new()));
            page.insert(ids.error(field), None);
            page.insert(ids.result(field), None);
        }
        page
    }

    pub fn with_sections(self, sections: &[&str]) -> Self {
        for section in sections {
            self.insert(section, None);
        }
        self
    }

    fn insert(&self, id: &str, value: Option<String>) {
        let element = FakeElement { value, ..FakeElement::default() };
        self.elements.borrow_mut().insert(id.to_string(), element);
    }

    pub fn remove(&self, id: &str) {
        self.elements.borrow_mut().remove(id);
    }

    /// Set an input's value; missing inputs are ignored.
    pub fn type_into(&self, id: &str, value: &str) {
        if let Some(element) = self.elements.borrow_mut().get_mut(id) {
            element.value = Some(value.to_string());
        }
    }

    pub fn display(&self, id: &str) -> Option<String> {
        self.elements.borrow().get(id).and_then(|e| e.display.clone())
    }

    pub fn scrolls(&self) -> Vec<(String, ScrollBlock)> {
        self.scrolls.borrow().clone()
    }

    fn with_element<T>(&self, id: &str, f: impl FnOnce(&mut FakeElement) -> T) -> Result<T, PageError> {
        self.elements
            .borrow_mut()
            .get_mut(id)
            .map(f)
            .ok_or_else(|| PageError::MissingElement(id.to_string()))
    }
}

impl Page for FakePage {
    fn contains(&self, id: &str) -> bool {
        self.elements.borrow().contains_key(id)
    }

    fn text(&self, id: &str) -> Result<String, PageError> {
        self.with_element(id, |e| e.text.clone())
    }

    fn set_text(&self, id: &str, text: &str) -> Result<(), PageError> {
        self.with_element(id, |e| e.text = text.to_string())
    }

    fn input_value(&self, id: &str) -> Result<String, PageError> {
        self.with_element(id, |e| e.value.clone())?
            .ok_or_else(|| PageError::NotAnInput(id.to_string()))
    }

    fn has_class(&self, id: &str, class: &str) -> Result<bool, PageError> {
        self.with_element(id, |e| e.classes.contains(class))
    }

    fn add_class(&self, id: &str, class: &str) -> Result<(), PageError> {
        self.with_element(id, |e| {
            e.classes.insert(class.to_string());
        })
    }

    fn remove_class(&self, id: &str, class: &str) -> Result<(), PageError> {
        self.with_element(id, |e| {
            e.classes.remove(class);
        })
    }

    fn set_display(&self, id: &str, display: &str) -> Result<(), PageError> {
        self.with_element(id, |e| e.display = Some(display.to_string()))
    }

    fn scroll_into_view(&self, id: &str, block: ScrollBlock) -> Result<(), PageError> {
        self.with_element(id, |_| ())?;
        self.scrolls.borrow_mut().push((id.to_string(), block));
        Ok(())
    }
}

/// A clock stuck at one instant.
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    pub fn utc(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        let utc = FixedOffset::east_opt(0).unwrap();
        Self(utc.with_ymd_and_hms(year, month, day, hour, min, sec).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_page_reports_missing_elements() {
        let page = FakePage::default();
        assert_eq!(page.text("nope"), Err(PageError::MissingElement("nope".into())));
        assert!(page.scroll_into_view("nope", ScrollBlock::Start).is_err());
        assert!(page.scrolls().is_empty());
    }

    #[test]
    fn test_fake_page_text_is_not_an_input() {
        let page = FakePage::for_config(&SiteConfig::default());
        assert_eq!(page.input_value("userName"), Err(PageError::NotAnInput("userName".into())));
        assert_eq!(page.input_value("email"), Ok(String::new()));
    }
}
