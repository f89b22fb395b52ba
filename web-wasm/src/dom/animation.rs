//! CSS-class transitions
//!
//! Classes are added here and animated by the stylesheet. Timers stand in
//! for `animationend` so completions always fire, even when the stylesheet
//! defines no animation for a class.

use crate::config::{ENTER_TRANSITION_MS, EXIT_TRANSITION_MS, REDUCED_MOTION_QUERY};
use caja_common::{Animator, ItemId, NoAnimation};
use gloo::timers::callback::Timeout;
use std::rc::Rc;
use web_sys::HtmlElement;

const CARD_ENTER: &str = "card-enter";
const CARD_EXIT: &str = "card-exit";
const MODAL_ENTER: &str = "modal-enter";
const MODAL_EXIT: &str = "modal-exit";

pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// `NoAnimation` under reduced motion, CSS transitions otherwise
pub fn for_page(grid: HtmlElement, dialog: Option<HtmlElement>) -> Rc<dyn Animator> {
    if prefers_reduced_motion() {
        Rc::new(NoAnimation)
    } else {
        Rc::new(CssAnimator { grid, dialog })
    }
}

pub struct CssAnimator {
    grid: HtmlElement,
    dialog: Option<HtmlElement>,
}

impl CssAnimator {
    fn cards(&self, ids: &[ItemId]) -> Vec<HtmlElement> {
        ids.iter()
            .filter_map(|id| super::query(&self.grid, &format!("[data-id=\"{}\"]", id)))
            .collect()
    }
}

fn flash(elements: Vec<HtmlElement>, class: &'static str, ms: u32) {
    for el in &elements {
        let _ = el.class_list().add_1(class);
    }
    Timeout::new(ms, move || {
        for el in &elements {
            let _ = el.class_list().remove_1(class);
        }
    })
    .forget();
}

impl Animator for CssAnimator {
    fn fade_in(&self, ids: &[ItemId]) {
        let cards = self.cards(ids);
        for card in &cards {
            let _ = card.class_list().remove_1(CARD_EXIT);
        }
        flash(cards, CARD_ENTER, ENTER_TRANSITION_MS);
    }

    fn fade_out(&self, ids: &[ItemId], on_complete: Box<dyn FnOnce()>) {
        for card in self.cards(ids) {
            let _ = card.class_list().add_1(CARD_EXIT);
        }
        Timeout::new(EXIT_TRANSITION_MS, on_complete).forget();
    }

    fn open_transition(&self) {
        if let Some(dialog) = &self.dialog {
            flash(vec![dialog.clone()], MODAL_ENTER, ENTER_TRANSITION_MS);
        }
    }

    fn close_transition(&self, on_complete: Box<dyn FnOnce()>) {
        let Some(dialog) = self.dialog.clone() else {
            on_complete();
            return;
        };
        let _ = dialog.class_list().add_1(MODAL_EXIT);
        Timeout::new(EXIT_TRANSITION_MS, move || {
            let _ = dialog.class_list().remove_1(MODAL_EXIT);
            on_complete();
        })
        .forget();
    }
}
