//! DOM implementations of the core view-port traits
//!
//! Lookups that miss return `None`; callers treat a missing element as a
//! silent no-op.

pub mod animation;
pub mod card;
pub mod grid;
pub mod image;
pub mod live_region;
pub mod modal;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Element by id, cast to `T`
pub fn by_id<T: JsCast>(id: &str) -> Option<T> {
    document()?.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// First match of `selector` under `root`
pub fn query(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Create `<tag class="...">`
pub fn create(document: &Document, tag: &str, class: &str) -> Option<HtmlElement> {
    let element = document.create_element(tag).ok()?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    element.dyn_into::<HtmlElement>().ok()
}

/// `<span class="material-icons-outlined {class}" aria-hidden="true">icon</span>`
pub fn icon(document: &Document, name: &str, class: &str) -> Option<HtmlElement> {
    let span = create(document, "span", &format!("material-icons-outlined {}", class))?;
    span.set_attribute("aria-hidden", "true").ok()?;
    span.set_text_content(Some(name));
    Some(span)
}

/// Remove every child of `element`
pub fn clear_children(element: &Element) {
    while let Some(child) = element.first_child() {
        let _ = element.remove_child(&child);
    }
}
