//! Page host
//!
//! Wires the core session and modal controller to the DOM ports once the
//! catalog is loaded, and owns the listeners and timers they need.

use crate::config::{
    FOCUS_SETTLE_MS, GRID_ID, LIVE_REGION_ID, NO_RESULTS_ID, TRAP_INTERVAL_MS,
};
use crate::dom::animation;
use crate::dom::grid::{Activate, DomGrid};
use crate::dom::image::ImageLoad;
use crate::dom::live_region::DomLiveRegion;
use crate::dom::modal::DomModal;
use crate::dom::{self, by_id};
use caja_common::card::IMAGE_TIMEOUT_MS;
use caja_common::{
    Catalog, CatalogSession, FilterContract, ImageRequest, Item, Modal, OpenOutcome, Selection,
    TabOutcome,
};
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlImageElement, KeyboardEvent};

// ============================================
// Modal
// ============================================

#[derive(Default)]
struct ModalTimers {
    settle: Option<Timeout>,
    trap: Option<Interval>,
    image: Option<ImageLoad>,
}

/// Modal controller plus the timers driving its focus steps
#[derive(Clone)]
pub struct ModalHost {
    modal: Modal<DomModal>,
    timers: Rc<RefCell<ModalTimers>>,
}

impl ModalHost {
    fn new(modal: Modal<DomModal>) -> Self {
        Self {
            modal,
            timers: Rc::default(),
        }
    }

    pub fn open(&self, item: &Item, origin: HtmlElement) {
        match self.modal.open(item, Some(origin)) {
            OpenOutcome::Opened { image, replaced } => {
                if let Some(request) = image {
                    self.load_image(request);
                }
                if !replaced {
                    self.schedule_settle();
                }
            }
            OpenOutcome::Ignored => {}
            OpenOutcome::Unavailable => console::warn!("modal template missing"),
        }
    }

    pub fn close(&self) {
        if self.modal.close() {
            self.disarm();
        }
    }

    /// Drop pending focus steps, the trap interval and any image load
    fn disarm(&self) {
        let mut timers = self.timers.borrow_mut();
        timers.settle = None;
        timers.trap = None;
        timers.image = None;
    }

    fn load_image(&self, request: ImageRequest) {
        let Ok(img) = HtmlImageElement::new() else {
            return;
        };
        let modal = self.modal.clone();
        let generation = request.generation;
        let load = ImageLoad::start(&img, &request.url, IMAGE_TIMEOUT_MS, move |outcome| {
            modal.image_settled(generation, outcome);
        });
        self.timers.borrow_mut().image = Some(load);
    }

    fn schedule_settle(&self) {
        let modal = self.modal.clone();
        let timers: Weak<RefCell<ModalTimers>> = Rc::downgrade(&self.timers);
        let settle = Timeout::new(FOCUS_SETTLE_MS, move || {
            if !modal.settle_focus() {
                return;
            }
            let Some(timers) = timers.upgrade() else {
                return;
            };
            let trap_modal = modal.clone();
            let interval = Interval::new(TRAP_INTERVAL_MS, move || {
                trap_modal.reconcile_focus();
            });
            timers.borrow_mut().trap = Some(interval);
        });
        self.timers.borrow_mut().settle = Some(settle);
    }

    /// Capture-phase keydown: Escape closes, Tab wraps
    fn on_keydown(&self, event: &KeyboardEvent) {
        match event.key().as_str() {
            "Escape" | "Esc" => {
                if self.modal.handle_escape() {
                    event.prevent_default();
                    event.stop_propagation();
                    self.disarm();
                }
            }
            "Tab" => {
                if let TabOutcome::Redirected(_) = self.modal.handle_tab(event.shift_key()) {
                    event.prevent_default();
                }
            }
            _ => {}
        }
    }
}

// ============================================
// Page
// ============================================

/// Everything alive for one page load
pub struct PageHost {
    session: CatalogSession<DomGrid, DomLiveRegion>,
    _modal: ModalHost,
    _listeners: Vec<EventListener>,
}

impl PageHost {
    /// Mount the catalog into the rendered page shell
    pub fn mount(catalog: Catalog) -> Option<Self> {
        let document = dom::document()?;
        let Some(grid_el) = by_id::<HtmlElement>(GRID_ID) else {
            console::warn!("grid container missing");
            return None;
        };

        let dom_modal = DomModal::find(document.clone());
        let animator = animation::for_page(grid_el.clone(), dom_modal.root());
        let close_button = dom_modal.close_button();
        let overlay = dom_modal.overlay();
        let modal_host = ModalHost::new(Modal::new(dom_modal, Rc::clone(&animator)));

        let lookup = catalog.clone();
        let opener = modal_host.clone();
        let on_activate: Activate = Rc::new(move |id, card| {
            if let Some(item) = lookup.by_id(id) {
                opener.open(item, card);
            }
        });

        let grid = DomGrid::new(
            document.clone(),
            grid_el,
            by_id(NO_RESULTS_ID),
            on_activate,
        );
        let region = DomLiveRegion::attach(&document, LIVE_REGION_ID)?;

        let session =
            CatalogSession::new(catalog, grid, region, animator, FilterContract::Faceted);
        session.render_initial();

        let mut listeners = Vec::new();
        for target in [close_button, overlay].into_iter().flatten() {
            let host = modal_host.clone();
            listeners.push(EventListener::new(&target, "click", move |_| host.close()));
        }

        let host = modal_host.clone();
        let capture = EventListenerOptions {
            phase: EventListenerPhase::Capture,
            passive: false,
        };
        listeners.push(EventListener::new_with_options(
            &document,
            "keydown",
            capture,
            move |event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    host.on_keydown(event);
                }
            },
        ));

        Some(Self {
            session,
            _modal: modal_host,
            _listeners: listeners,
        })
    }

    pub fn apply(&self, selection: Selection) -> usize {
        self.session.apply(selection)
    }
}
