//! View-port traits
//!
//! The core never touches a document directly. The web crate implements
//! these traits over the DOM; tests implement them over plain vectors.

use crate::card::{CardView, Visual};
use crate::modal::ModalContent;
use crate::types::{Item, ItemId};

/// The card grid
pub trait GridPort {
    /// Ids of the mounted cards, in document order
    fn rendered_ids(&self) -> Vec<ItemId>;

    /// Mount a card in front of `before`, or at the end
    fn insert_card(&mut self, item: &Item, card: &CardView, before: Option<ItemId>);

    fn remove_card(&mut self, id: ItemId);

    fn set_no_results(&mut self, visible: bool);
}

/// Visual transitions. Purely decorative: final DOM state never depends on it.
pub trait Animator {
    fn fade_in(&self, ids: &[ItemId]);

    /// Must call `on_complete` exactly once
    fn fade_out(&self, ids: &[ItemId], on_complete: Box<dyn FnOnce()>);

    fn open_transition(&self);

    /// Must call `on_complete` exactly once
    fn close_transition(&self, on_complete: Box<dyn FnOnce()>);
}

/// Fallback used when animation is unavailable or motion is reduced
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAnimation;

impl Animator for NoAnimation {
    fn fade_in(&self, _ids: &[ItemId]) {}

    fn fade_out(&self, _ids: &[ItemId], on_complete: Box<dyn FnOnce()>) {
        on_complete();
    }

    fn open_transition(&self) {}

    fn close_transition(&self, on_complete: Box<dyn FnOnce()>) {
        on_complete();
    }
}

/// Element the modal can move focus to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Heading,
    CloseButton,
    /// Index into the focusable descendants, as computed right now
    Focusable(usize),
}

/// Where document focus currently is, relative to the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusLocation {
    /// On the n-th focusable descendant
    Focusable(usize),
    /// Inside the dialog but not on a tabbable element (e.g. the heading)
    Inside,
    Outside,
}

/// The shared detail dialog
pub trait ModalPort {
    /// Handle of the element that opened the dialog
    type Origin;

    /// Dialog template present in the document
    fn is_available(&self) -> bool;

    /// Show/hide the dialog and toggle its modal ARIA state
    fn set_dialog_visible(&mut self, visible: bool);

    /// Hide page landmarks from assistive technology
    fn set_background_hidden(&mut self, hidden: bool);

    fn set_scroll_locked(&mut self, locked: bool);

    fn set_loader_visible(&mut self, visible: bool);

    fn populate(&mut self, content: &ModalContent);

    /// Fill the image area with a settled image or icon
    fn show_visual(&mut self, visual: &Visual, alt: &str, color: &str);

    /// Focusable descendants, recomputed on each call
    fn focusable_count(&self) -> usize;

    fn focus_location(&self) -> FocusLocation;

    fn focus(&mut self, target: FocusTarget);

    /// Focus the origin; `false` when it is no longer in the document
    fn restore_focus(&mut self, origin: &Self::Origin) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_no_animation_completes_synchronously() {
        let done = Rc::new(Cell::new(0));

        let d = done.clone();
        NoAnimation.fade_out(&[1, 2], Box::new(move || d.set(d.get() + 1)));
        assert_eq!(done.get(), 1);

        let d = done.clone();
        NoAnimation.close_transition(Box::new(move || d.set(d.get() + 1)));
        assert_eq!(done.get(), 2);
    }
}
