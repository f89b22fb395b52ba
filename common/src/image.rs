//! Image load race
//!
//! An image load resolves through `onload`, `onerror` or a timeout, whichever
//! fires first. [`ImageRace`] is the single-assignment slot shared by the
//! three callbacks; only the first `settle` takes effect.

use std::cell::OnceCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOutcome {
    Loaded,
    Failed,
    TimedOut,
}

impl ImageOutcome {
    /// Whether the image itself should be shown (otherwise the icon)
    pub fn shows_image(&self) -> bool {
        matches!(self, ImageOutcome::Loaded)
    }
}

/// First-writer-wins slot for one image load
#[derive(Debug, Clone, Default)]
pub struct ImageRace {
    slot: Rc<OnceCell<ImageOutcome>>,
}

impl ImageRace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an outcome; `true` only for the first call
    pub fn settle(&self, outcome: ImageOutcome) -> bool {
        self.slot.set(outcome).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_outcome_wins() {
        let race = ImageRace::new();
        assert!(race.slot.get().is_none());
        assert!(race.settle(ImageOutcome::Failed));
        assert!(!race.settle(ImageOutcome::TimedOut));
        assert!(!race.settle(ImageOutcome::Loaded));
        assert_eq!(race.slot.get().copied(), Some(ImageOutcome::Failed));
    }

    #[test]
    fn test_clones_share_the_slot() {
        let race = ImageRace::new();
        let on_load = race.clone();
        let on_timeout = race.clone();

        assert!(on_timeout.settle(ImageOutcome::TimedOut));
        assert!(!on_load.settle(ImageOutcome::Loaded));
        assert_eq!(race.slot.get().copied(), Some(ImageOutcome::TimedOut));
    }

    #[test]
    fn test_shows_image() {
        assert!(ImageOutcome::Loaded.shows_image());
        assert!(!ImageOutcome::Failed.shows_image());
        assert!(!ImageOutcome::TimedOut.shows_image());
    }
}
