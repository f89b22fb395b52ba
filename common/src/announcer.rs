//! Result-count announcements for screen readers
//!
//! Text goes into a polite live region and is cleared shortly after, so the
//! same sentence is spoken again on the next filter action.

/// Delay before the live region is emptied
pub const CLEAR_DELAY_MS: u32 = 1_000;

/// Sentence for a result count
pub fn message(count: usize) -> String {
    match count {
        0 => "No se encontraron herramientas para los criterios seleccionados. \
              Prueba combinando diferentes roles, propósitos o tipos de recurso."
            .to_string(),
        1 => "Se encontró 1 herramienta para los criterios seleccionados.".to_string(),
        n => format!("Se encontraron {} herramientas para los criterios seleccionados.", n),
    }
}

/// Polite live region
pub trait LiveRegion {
    fn set_text(&self, text: &str);

    /// Empty the region after `delay_ms`, replacing any pending clear
    fn clear_after(&self, delay_ms: u32);
}

pub struct Announcer<R: LiveRegion> {
    region: R,
}

impl<R: LiveRegion> Announcer<R> {
    pub fn new(region: R) -> Self {
        Self { region }
    }

    pub fn announce(&self, count: usize) {
        self.region.set_text(&message(count));
        self.region.clear_after(CLEAR_DELAY_MS);
    }

    pub fn region(&self) -> &R {
        &self.region
    }
}
