//! Image load with timeout
//!
//! `onload`, `onerror` and a timer race through one [`ImageRace`]; the
//! callback runs once with whichever fired first. Dropping the handle
//! detaches the listeners and cancels the timer.

use caja_common::{ImageOutcome, ImageRace};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use std::rc::Rc;
use web_sys::HtmlImageElement;

pub struct ImageLoad {
    _on_load: EventListener,
    _on_error: EventListener,
    _timeout: Timeout,
}

impl ImageLoad {
    /// Start loading `url` into `img`
    pub fn start(
        img: &HtmlImageElement,
        url: &str,
        timeout_ms: u32,
        on_settled: impl Fn(ImageOutcome) + 'static,
    ) -> Self {
        let race = ImageRace::new();
        let on_settled: Rc<dyn Fn(ImageOutcome)> = Rc::new(on_settled);

        let settle = move |outcome: ImageOutcome| {
            let race = race.clone();
            let on_settled = Rc::clone(&on_settled);
            move || {
                if race.settle(outcome) {
                    on_settled(outcome);
                }
            }
        };

        let loaded = settle(ImageOutcome::Loaded);
        let failed = settle(ImageOutcome::Failed);
        let timed_out = settle(ImageOutcome::TimedOut);

        let _on_load = EventListener::once(img, "load", move |_| loaded());
        let _on_error = EventListener::once(img, "error", move |_| failed());
        let _timeout = Timeout::new(timeout_ms, timed_out);

        img.set_src(url);

        Self {
            _on_load,
            _on_error,
            _timeout,
        }
    }
}
