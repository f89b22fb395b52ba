//! Modal controller
//!
//! One shared detail dialog. State machine:
//!
//! ```text
//! Closed --open--> Opening --focus settled--> Open --close/Escape--> Closing --transition done--> Closed
//! ```
//!
//! While the dialog is visible the background is hidden from assistive
//! technology and page scroll is locked. Tab and Shift+Tab wrap inside the
//! dialog; focus found outside is pulled back in. Closing returns focus to
//! the element that opened the dialog when it still exists.

use crate::card::{self, Visual};
use crate::image::ImageOutcome;
use crate::types::{ExactGroup, FacetGroup, Item, ItemId};
use crate::viewport::{Animator, FocusLocation, FocusTarget, ModalPort};
use std::cell::RefCell;
use std::rc::Rc;

// ============================================
// Content
// ============================================

/// One labelled row of tags in the dialog header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRow {
    pub label: &'static str,
    pub icon: &'static str,
    pub class: &'static str,
    pub tags: Vec<String>,
}

/// Text content of the dialog for one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub id: ItemId,
    pub title: String,
    pub rows: Vec<TagRow>,
    pub description: String,
    pub objective: String,
    pub materials: Vec<String>,
    pub steps: Vec<String>,
    pub color: &'static str,
    pub visual: Visual,
}

impl ModalContent {
    pub fn from_item(item: &Item) -> Self {
        let faceted = FacetGroup::ALL.iter().any(|g| !item.tags(*g).is_empty());

        let rows = if faceted {
            FacetGroup::ALL
                .iter()
                .map(|&group| TagRow {
                    label: group.label(),
                    icon: group.icon(),
                    class: group.class(),
                    tags: item.tags(group).to_vec(),
                })
                .collect()
        } else {
            ExactGroup::ALL
                .iter()
                .filter_map(|&group| {
                    item.scalar(group).map(|tag| TagRow {
                        label: group.label(),
                        icon: group.icon(),
                        class: group.class(),
                        tags: vec![tag.to_string()],
                    })
                })
                .collect()
        };

        let card = card::build(item);

        Self {
            id: item.id,
            title: item.title.clone(),
            rows,
            description: item.description.clone(),
            objective: item.objective.clone(),
            materials: item.materials.clone(),
            steps: item.steps.clone(),
            color: card.color,
            visual: card.visual,
        }
    }
}

// ============================================
// State machine
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Image the host must load for the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub url: String,
    /// Tags the load; outcomes carrying an older generation are dropped
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// Content shown. `replaced` when the dialog was already open.
    Opened {
        image: Option<ImageRequest>,
        replaced: bool,
    },
    /// A transition is in flight
    Ignored,
    /// Dialog template missing from the document
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabOutcome {
    /// Trap not armed
    Inactive,
    /// Let the browser move focus
    Default,
    /// Focus moved to the n-th focusable; suppress the default action
    Redirected(usize),
}

struct Controller<P: ModalPort> {
    port: P,
    state: ModalState,
    active: Option<Item>,
    origin: Option<P::Origin>,
    content_loaded: bool,
    generation: u64,
}

impl<P: ModalPort> Controller<P> {
    fn begin_open(&mut self, item: &Item, origin: Option<P::Origin>) -> OpenOutcome {
        if matches!(self.state, ModalState::Opening | ModalState::Closing) {
            return OpenOutcome::Ignored;
        }
        if !self.port.is_available() {
            return OpenOutcome::Unavailable;
        }

        let replaced = self.state == ModalState::Open;
        self.generation += 1;
        self.content_loaded = false;
        self.active = Some(item.clone());
        if origin.is_some() || !replaced {
            self.origin = origin;
        }

        if !replaced {
            self.port.set_dialog_visible(true);
            self.port.set_background_hidden(true);
            self.port.set_scroll_locked(true);
            self.state = ModalState::Opening;
        }

        self.port.set_loader_visible(true);
        let content = ModalContent::from_item(item);
        self.port.populate(&content);

        let image = match &content.visual {
            Visual::Image { url, .. } => Some(ImageRequest {
                url: url.clone(),
                generation: self.generation,
            }),
            Visual::Icon(_) => {
                self.port
                    .show_visual(&content.visual, &content.title, content.color);
                self.mark_loaded();
                None
            }
        };

        if !replaced {
            self.port.focus(FocusTarget::Heading);
        }

        OpenOutcome::Opened { image, replaced }
    }

    fn mark_loaded(&mut self) {
        if !self.content_loaded {
            self.content_loaded = true;
            self.port.set_loader_visible(false);
        }
    }

    fn image_settled(&mut self, generation: u64, outcome: ImageOutcome) -> bool {
        if generation != self.generation
            || !matches!(self.state, ModalState::Opening | ModalState::Open)
        {
            return false;
        }
        let Some(item) = &self.active else {
            return false;
        };

        let icon = card::icon_for(item.primary_tag());
        let visual = match (outcome.shows_image(), item.image_url()) {
            (true, Some(url)) => Visual::Image {
                url: url.to_string(),
                fallback: icon,
            },
            _ => Visual::Icon(icon),
        };
        self.port
            .show_visual(&visual, &item.title, card::color_for(item.id));
        self.mark_loaded();
        true
    }

    fn settle_focus(&mut self) -> bool {
        if self.state != ModalState::Opening {
            return false;
        }
        self.port.focus(FocusTarget::CloseButton);
        self.state = ModalState::Open;
        true
    }

    fn trap_tab(&mut self, shift: bool) -> TabOutcome {
        if self.state != ModalState::Open {
            return TabOutcome::Inactive;
        }
        let count = self.port.focusable_count();
        if count == 0 {
            return TabOutcome::Default;
        }
        let last = count - 1;

        let target = match self.port.focus_location() {
            FocusLocation::Focusable(i) if !shift && i >= last => Some(0),
            FocusLocation::Focusable(0) if shift => Some(last),
            FocusLocation::Outside => Some(0),
            _ => None,
        };

        match target {
            Some(index) => {
                self.port.focus(FocusTarget::Focusable(index));
                TabOutcome::Redirected(index)
            }
            None => TabOutcome::Default,
        }
    }

    fn reclaim_focus(&mut self) -> bool {
        if self.state != ModalState::Open
            || self.port.focus_location() != FocusLocation::Outside
            || self.port.focusable_count() == 0
        {
            return false;
        }
        self.port.focus(FocusTarget::Focusable(0));
        true
    }

    fn begin_close(&mut self) -> bool {
        if !matches!(self.state, ModalState::Opening | ModalState::Open) {
            return false;
        }
        self.port.set_loader_visible(false);
        self.state = ModalState::Closing;
        true
    }

    fn finish_close(&mut self) {
        if self.state != ModalState::Closing {
            return;
        }
        self.port.set_scroll_locked(false);
        self.port.set_dialog_visible(false);
        self.port.set_background_hidden(false);
        if let Some(origin) = self.origin.take() {
            self.port.restore_focus(&origin);
        }
        self.active = None;
        self.content_loaded = false;
        self.state = ModalState::Closed;
    }
}

/// Dialog handle; clones share the same controller
pub struct Modal<P: ModalPort> {
    inner: Rc<RefCell<Controller<P>>>,
    animator: Rc<dyn Animator>,
}

impl<P: ModalPort> Clone for Modal<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            animator: Rc::clone(&self.animator),
        }
    }
}

impl<P: ModalPort + 'static> Modal<P> {
    pub fn new(port: P, animator: Rc<dyn Animator>) -> Self {
        let controller = Controller {
            port,
            state: ModalState::Closed,
            active: None,
            origin: None,
            content_loaded: false,
            generation: 0,
        };
        Self {
            inner: Rc::new(RefCell::new(controller)),
            animator,
        }
    }

    pub fn state(&self) -> ModalState {
        self.inner.borrow().state
    }

    pub fn active_id(&self) -> Option<ItemId> {
        self.inner.borrow().active.as_ref().map(|i| i.id)
    }

    pub fn is_content_loaded(&self) -> bool {
        self.inner.borrow().content_loaded
    }

    /// Show `item`. When an image is requested the host races its load
    /// against the timeout and reports back through [`Modal::image_settled`].
    pub fn open(&self, item: &Item, origin: Option<P::Origin>) -> OpenOutcome {
        let outcome = self.inner.borrow_mut().begin_open(item, origin);
        if let OpenOutcome::Opened { replaced: false, .. } = outcome {
            self.animator.open_transition();
        }
        outcome
    }

    /// Second focus step after opening: move to the close button and arm the trap
    pub fn settle_focus(&self) -> bool {
        self.inner.borrow_mut().settle_focus()
    }

    pub fn image_settled(&self, generation: u64, outcome: ImageOutcome) -> bool {
        self.inner.borrow_mut().image_settled(generation, outcome)
    }

    pub fn handle_tab(&self, shift: bool) -> TabOutcome {
        self.inner.borrow_mut().trap_tab(shift)
    }

    /// Pull focus back when it escaped the dialog; `true` if moved
    pub fn reconcile_focus(&self) -> bool {
        self.inner.borrow_mut().reclaim_focus()
    }

    /// Escape key; `true` when it started a close
    pub fn handle_escape(&self) -> bool {
        self.close()
    }

    pub fn close(&self) -> bool {
        if !self.inner.borrow_mut().begin_close() {
            return false;
        }
        let inner = Rc::clone(&self.inner);
        self.animator
            .close_transition(Box::new(move || inner.borrow_mut().finish_close()));
        true
    }

    /// Inspect the dialog port
    pub fn with_port<T>(&self, f: impl FnOnce(&P) -> T) -> T {
        f(&self.inner.borrow().port)
    }
}
