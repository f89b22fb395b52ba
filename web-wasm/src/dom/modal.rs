//! Detail dialog over the DOM

use super::{by_id, clear_children, create, icon, query};
use crate::config::{
    FOCUSABLE_SELECTOR, MAIN_CONTENT_ID, MODAL_DESCRIPTION_ID, MODAL_ID, MODAL_IMAGE_ID,
    MODAL_LOADER_ID, MODAL_MATERIALS_ID, MODAL_OBJECTIVE_ID, MODAL_STEPS_ID, MODAL_TAG_ROW_IDS,
    MODAL_TITLE_ID,
};
use caja_common::{FocusLocation, FocusTarget, ModalContent, ModalPort, TagRow, Visual};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

struct Parts {
    document: Document,
    root: HtmlElement,
    title: HtmlElement,
    close: HtmlElement,
    image: HtmlElement,
    loader: Option<HtmlElement>,
    tag_rows: Vec<HtmlElement>,
    description: HtmlElement,
    objective: HtmlElement,
    materials: HtmlElement,
    steps: HtmlElement,
}

impl Parts {
    fn find(document: Document) -> Option<Self> {
        let root: HtmlElement = by_id(MODAL_ID)?;
        let close = query(&root, ".modal-close")?;
        Some(Self {
            title: by_id(MODAL_TITLE_ID)?,
            image: by_id(MODAL_IMAGE_ID)?,
            loader: by_id(MODAL_LOADER_ID),
            tag_rows: MODAL_TAG_ROW_IDS.iter().filter_map(|id| by_id(id)).collect(),
            description: by_id(MODAL_DESCRIPTION_ID)?,
            objective: by_id(MODAL_OBJECTIVE_ID)?,
            materials: by_id(MODAL_MATERIALS_ID)?,
            steps: by_id(MODAL_STEPS_ID)?,
            document,
            root,
            close,
        })
    }

    /// Landmarks hidden from assistive technology while the dialog is open
    fn landmarks(&self) -> Vec<Element> {
        let mut out = Vec::new();
        if let Some(main) = self.document.get_element_by_id(MAIN_CONTENT_ID) {
            out.push(main);
        }
        for selector in [".header", ".footer"] {
            if let Ok(Some(el)) = self.document.query_selector(selector) {
                out.push(el);
            }
        }
        out
    }

    /// Focusable descendants that are rendered and not aria-hidden
    fn focusables(&self) -> Vec<HtmlElement> {
        let Ok(nodes) = self.root.query_selector_all(FOCUSABLE_SELECTOR) else {
            return Vec::new();
        };
        let window = web_sys::window();
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
            .filter(|el| el.get_attribute("aria-hidden").as_deref() != Some("true"))
            .filter(|el| match window.as_ref().and_then(|w| w.get_computed_style(el).ok().flatten()) {
                Some(style) => {
                    let prop = |name: &str| style.get_property_value(name).unwrap_or_default();
                    prop("display") != "none"
                        && prop("visibility") != "hidden"
                        && prop("opacity") != "0"
                }
                None => true,
            })
            .collect()
    }

    fn fill_row(&self, row: &HtmlElement, tags: Option<&TagRow>) {
        clear_children(row);
        let Some(tags) = tags else {
            let _ = row.style().set_property("display", "none");
            return;
        };
        let _ = row.style().remove_property("display");

        if let Some(label) = create(&self.document, "span", "modal-tag-label") {
            if let Some(i) = icon(&self.document, tags.icon, "tag-icon") {
                let _ = label.append_child(&i);
            }
            let _ = label.append_child(&self.document.create_text_node(tags.label));
            let _ = row.append_child(&label);
        }
        for tag in &tags.tags {
            if let Some(chip) = create(&self.document, "span", &format!("modal-tag {}", tags.class)) {
                chip.set_text_content(Some(tag));
                let _ = row.append_child(&chip);
            }
        }
    }

    fn fill_list(&self, list: &HtmlElement, entries: &[String]) {
        clear_children(list);
        for entry in entries {
            if let Some(li) = create(&self.document, "li", "") {
                li.set_text_content(Some(entry));
                let _ = list.append_child(&li);
            }
        }
    }
}

/// Dialog port; without the template every call is a no-op
pub struct DomModal {
    parts: Option<Parts>,
}

impl DomModal {
    pub fn find(document: Document) -> Self {
        Self {
            parts: Parts::find(document),
        }
    }

    pub fn root(&self) -> Option<HtmlElement> {
        self.parts.as_ref().map(|p| p.root.clone())
    }

    pub fn close_button(&self) -> Option<HtmlElement> {
        self.parts.as_ref().map(|p| p.close.clone())
    }

    pub fn overlay(&self) -> Option<HtmlElement> {
        self.parts
            .as_ref()
            .and_then(|p| query(&p.root, ".modal-overlay"))
    }
}

impl ModalPort for DomModal {
    type Origin = HtmlElement;

    fn is_available(&self) -> bool {
        self.parts.is_some()
    }

    fn set_dialog_visible(&mut self, visible: bool) {
        let Some(p) = &self.parts else { return };
        if visible {
            let _ = p.root.style().set_property("display", "flex");
            let _ = p.root.remove_attribute("aria-hidden");
            let _ = p.root.set_attribute("aria-modal", "true");
        } else {
            let _ = p.root.style().set_property("display", "none");
            let _ = p.root.set_attribute("aria-hidden", "true");
            let _ = p.root.remove_attribute("aria-modal");
        }
    }

    fn set_background_hidden(&mut self, hidden: bool) {
        let Some(p) = &self.parts else { return };
        for landmark in p.landmarks() {
            let _ = if hidden {
                landmark.set_attribute("aria-hidden", "true")
            } else {
                landmark.remove_attribute("aria-hidden")
            };
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        let Some(body) = self.parts.as_ref().and_then(|p| p.document.body()) else {
            return;
        };
        let _ = if locked {
            body.style().set_property("overflow", "hidden")
        } else {
            body.style().remove_property("overflow").map(|_| ())
        };
    }

    fn set_loader_visible(&mut self, visible: bool) {
        if let Some(loader) = self.parts.as_ref().and_then(|p| p.loader.as_ref()) {
            let display = if visible { "flex" } else { "none" };
            let _ = loader.style().set_property("display", display);
        }
    }

    fn populate(&mut self, content: &ModalContent) {
        let Some(p) = &self.parts else { return };

        p.title.set_text_content(Some(&content.title));
        for (i, row) in p.tag_rows.iter().enumerate() {
            p.fill_row(row, content.rows.get(i));
        }
        p.description.set_text_content(Some(&content.description));
        p.objective.set_text_content(Some(&content.objective));
        p.fill_list(&p.materials, &content.materials);
        p.fill_list(&p.steps, &content.steps);

        // Previous item's visual must not linger while the new one loads
        clear_children(&p.image);
        let _ = p.image.style().set_property("background-color", content.color);
    }

    fn show_visual(&mut self, visual: &Visual, alt: &str, color: &str) {
        let Some(p) = &self.parts else { return };
        clear_children(&p.image);
        let _ = p.image.style().set_property("background-color", color);

        let child = match visual {
            Visual::Image { url, .. } => p
                .document
                .create_element("img")
                .ok()
                .and_then(|img| {
                    img.set_class_name("modal-image");
                    img.set_attribute("src", url).ok()?;
                    img.set_attribute("alt", alt).ok()?;
                    Some(img)
                }),
            Visual::Icon(name) => icon(&p.document, name, "modal-icon").map(Element::from),
        };
        if let Some(child) = child {
            let _ = p.image.append_child(&child);
        }
    }

    fn focusable_count(&self) -> usize {
        self.parts.as_ref().map_or(0, |p| p.focusables().len())
    }

    fn focus_location(&self) -> FocusLocation {
        let Some(p) = &self.parts else {
            return FocusLocation::Outside;
        };
        let Some(active) = p.document.active_element() else {
            return FocusLocation::Outside;
        };
        if let Some(index) = p
            .focusables()
            .iter()
            .position(|el| AsRef::<Element>::as_ref(el) == &active)
        {
            return FocusLocation::Focusable(index);
        }
        let node: &web_sys::Node = &active;
        if p.root.contains(Some(node)) {
            FocusLocation::Inside
        } else {
            FocusLocation::Outside
        }
    }

    fn focus(&mut self, target: FocusTarget) {
        let Some(p) = &self.parts else { return };
        match target {
            FocusTarget::Heading => {
                let _ = p.title.set_attribute("tabindex", "-1");
                let _ = p.title.focus();
            }
            FocusTarget::CloseButton => {
                let _ = p.title.remove_attribute("tabindex");
                let _ = p.close.focus();
            }
            FocusTarget::Focusable(index) => {
                if let Some(el) = p.focusables().get(index) {
                    let _ = el.focus();
                }
            }
        }
    }

    fn restore_focus(&mut self, origin: &HtmlElement) -> bool {
        if !origin.is_connected() {
            return false;
        }
        origin.focus().is_ok()
    }
}
