//! Screen-reader live region backed by a DOM element

use caja_common::LiveRegion;
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use web_sys::{Document, HtmlElement};

/// Polite, atomic live region; created on the body when the page lacks one
pub struct DomLiveRegion {
    element: HtmlElement,
    pending_clear: RefCell<Option<Timeout>>,
}

impl DomLiveRegion {
    pub fn attach(document: &Document, id: &str) -> Option<Self> {
        let element = match super::by_id::<HtmlElement>(id) {
            Some(element) => element,
            None => {
                let element = super::create(document, "div", "visually-hidden")?;
                element.set_id(id);
                element.set_attribute("aria-live", "polite").ok()?;
                element.set_attribute("aria-atomic", "true").ok()?;
                document.body()?.append_child(&element).ok()?;
                element
            }
        };
        Some(Self {
            element,
            pending_clear: RefCell::new(None),
        })
    }
}

impl LiveRegion for DomLiveRegion {
    fn set_text(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    fn clear_after(&self, delay_ms: u32) {
        let element = self.element.clone();
        let timeout = Timeout::new(delay_ms, move || element.set_text_content(Some("")));
        // Replacing the handle cancels the previous clear
        self.pending_clear.replace(Some(timeout));
    }
}
