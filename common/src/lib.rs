//! Caja de Herramientas common library
//!
//! Catalog, filter engine, render differ, card factory, modal controller and
//! announcer, shared by the CLI and the Web (WASM) front end.

pub mod types;
pub mod error;
pub mod catalog;
pub mod filter;
pub mod differ;
pub mod card;
pub mod image;
pub mod announcer;
pub mod viewport;
pub mod modal;
pub mod session;

pub use types::{ExactGroup, FacetGroup, Item, ItemId};
pub use error::{Error, Result};
pub use catalog::{validate, Catalog, Issue};
pub use filter::{ExactSelection, FacetSelection, Filter, FilterContract, Selection};
pub use differ::{reconcile, Insertion, RenderPlan};
pub use card::{Badge, CardView, Visual};
pub use image::{ImageOutcome, ImageRace};
pub use announcer::{Announcer, LiveRegion};
pub use viewport::{Animator, FocusLocation, FocusTarget, GridPort, ModalPort, NoAnimation};
pub use modal::{ImageRequest, Modal, ModalContent, ModalState, OpenOutcome, TabOutcome, TagRow};
pub use session::CatalogSession;
