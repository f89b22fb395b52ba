//! Page configuration

/// Catalog resource, relative to the page
pub const DATA_URL: &str = "./data/herramientas.json";

/// Shown in the grid when the catalog cannot be loaded
pub const LOAD_ERROR_MESSAGE: &str =
    "No se pudieron cargar las herramientas. Por favor, recarga la página.";

/// Page loader release after a successful load
pub const LOADER_HIDE_OK_MS: u32 = 300;
/// Page loader release after a failed load
pub const LOADER_HIDE_ERROR_MS: u32 = 500;

/// Delay between focusing the dialog heading and the close button
pub const FOCUS_SETTLE_MS: u32 = 100;
/// Focus trap reconciliation period while the dialog is open
pub const TRAP_INTERVAL_MS: u32 = 100;

/// Card and dialog exit transitions
pub const EXIT_TRANSITION_MS: u32 = 350;
/// Card and dialog entrance transitions
pub const ENTER_TRANSITION_MS: u32 = 400;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Focusable descendants of the dialog
pub const FOCUSABLE_SELECTOR: &str = "button:not([disabled]), a[href], input:not([disabled]), \
     select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex=\"-1\"])";

// Element ids shared by the page markup and the DOM ports
pub const GRID_ID: &str = "tools-grid";
pub const NO_RESULTS_ID: &str = "no-results";
pub const LIVE_REGION_ID: &str = "a11y-filtro-anuncio";
pub const MODAL_ID: &str = "modal";
pub const MODAL_TITLE_ID: &str = "modal-titulo";
pub const MODAL_LOADER_ID: &str = "modalLoader";
pub const MODAL_IMAGE_ID: &str = "modal-image-container";
pub const MODAL_TAG_ROW_IDS: [&str; 3] = ["modal-usuarios", "modal-uso", "modal-tipo"];
pub const MODAL_DESCRIPTION_ID: &str = "modal-descripcion";
pub const MODAL_OBJECTIVE_ID: &str = "modal-objetivo";
pub const MODAL_MATERIALS_ID: &str = "modal-materiales";
pub const MODAL_STEPS_ID: &str = "modal-pasos";
pub const MAIN_CONTENT_ID: &str = "mainContent";
