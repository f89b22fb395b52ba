//! Detail dialog template
//!
//! Static markup only; content, visibility and focus are driven by the modal
//! controller through `dom::modal::DomModal`.

use crate::config::{
    MODAL_DESCRIPTION_ID, MODAL_ID, MODAL_IMAGE_ID, MODAL_LOADER_ID, MODAL_MATERIALS_ID,
    MODAL_OBJECTIVE_ID, MODAL_STEPS_ID, MODAL_TAG_ROW_IDS, MODAL_TITLE_ID,
};
use leptos::prelude::*;

#[component]
pub fn ToolModal() -> impl IntoView {
    let [users_id, usage_id, kind_id] = MODAL_TAG_ROW_IDS;

    view! {
        <div
            id=MODAL_ID
            class="modal"
            role="dialog"
            aria-labelledby=MODAL_TITLE_ID
            aria-hidden="true"
            style="display: none"
        >
            <div class="modal-overlay"></div>
            <div class="modal-content">
                <div id=MODAL_LOADER_ID class="modal-loader" style="display: none" aria-hidden="true">
                    <div class="modal-loader-spinner"></div>
                </div>
                <button type="button" class="modal-close" aria-label="Cerrar">
                    <span class="material-icons-outlined" aria-hidden="true">"close"</span>
                </button>
                <div id=MODAL_IMAGE_ID class="modal-image-container" aria-hidden="true"></div>
                <div class="modal-body">
                    <h2 id=MODAL_TITLE_ID class="modal-titulo"></h2>
                    <div class="modal-tags">
                        <div id=users_id class="modal-tag-row"></div>
                        <div id=usage_id class="modal-tag-row"></div>
                        <div id=kind_id class="modal-tag-row"></div>
                    </div>
                    <section class="modal-section">
                        <h3>"Descripción"</h3>
                        <p id=MODAL_DESCRIPTION_ID></p>
                    </section>
                    <section class="modal-section">
                        <h3>"Objetivo"</h3>
                        <p id=MODAL_OBJECTIVE_ID></p>
                    </section>
                    <section class="modal-section">
                        <h3>"Materiales"</h3>
                        <ul id=MODAL_MATERIALS_ID></ul>
                    </section>
                    <section class="modal-section">
                        <h3>"Pasos"</h3>
                        <ol id=MODAL_STEPS_ID></ol>
                    </section>
                </div>
            </div>
        </div>
    }
}
