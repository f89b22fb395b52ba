//! Card grid over the DOM
//!
//! Mounted cards are keyed by item id. A card's click listener and image load
//! live as long as the card is mounted.

use super::card::render_card;
use super::image::ImageLoad;
use caja_common::{CardView, GridPort, Item, ItemId};
use gloo::console;
use gloo::events::EventListener;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// Card activation: item id and the card element (focus origin)
pub type Activate = Rc<dyn Fn(ItemId, HtmlElement)>;

struct MountedCard {
    element: HtmlElement,
    _click: EventListener,
    _image: Option<ImageLoad>,
}

pub struct DomGrid {
    document: Document,
    grid: HtmlElement,
    no_results: Option<HtmlElement>,
    cards: HashMap<ItemId, MountedCard>,
    on_activate: Activate,
}

impl DomGrid {
    pub fn new(
        document: Document,
        grid: HtmlElement,
        no_results: Option<HtmlElement>,
        on_activate: Activate,
    ) -> Self {
        Self {
            document,
            grid,
            no_results,
            cards: HashMap::new(),
            on_activate,
        }
    }
}

impl GridPort for DomGrid {
    fn rendered_ids(&self) -> Vec<ItemId> {
        let children = self.grid.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .filter_map(|el| el.get_attribute("data-id"))
            .filter_map(|id| id.parse().ok())
            .collect()
    }

    fn insert_card(&mut self, item: &Item, card: &CardView, before: Option<ItemId>) {
        let Some(rendered) = render_card(&self.document, card) else {
            console::error!(format!("card {} could not be rendered", item.id));
            return;
        };

        let anchor = before.and_then(|id| self.cards.get(&id)).map(|c| &c.element);
        let inserted = match anchor {
            Some(anchor) => self.grid.insert_before(&rendered.element, Some(anchor)),
            None => self.grid.append_child(&rendered.element),
        };
        if inserted.is_err() {
            return;
        }

        let id = item.id;
        let on_activate = Rc::clone(&self.on_activate);
        let _click = EventListener::new(&rendered.element, "click", move |event| {
            if let Some(card) = event
                .current_target()
                .and_then(|t| t.dyn_into::<HtmlElement>().ok())
            {
                on_activate(id, card);
            }
        });

        self.cards.insert(
            id,
            MountedCard {
                element: rendered.element,
                _click,
                _image: rendered.image,
            },
        );
    }

    fn remove_card(&mut self, id: ItemId) {
        if let Some(card) = self.cards.remove(&id) {
            card.element.remove();
        }
    }

    fn set_no_results(&mut self, visible: bool) {
        if let Some(no_results) = &self.no_results {
            let display = if visible { "block" } else { "none" };
            let _ = no_results.style().set_property("display", display);
        }
    }
}
