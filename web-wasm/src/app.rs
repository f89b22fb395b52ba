//! Main application component

use crate::api::catalog::fetch_catalog;
use crate::components::{
    filter_bar::{FilterBar, FilterOptions},
    footer::Footer,
    header::Header,
    page_loader::PageLoader,
    tool_modal::ToolModal,
};
use crate::config::{
    DATA_URL, GRID_ID, LIVE_REGION_ID, LOADER_HIDE_ERROR_MS, LOADER_HIDE_OK_MS,
    LOAD_ERROR_MESSAGE, MAIN_CONTENT_ID, NO_RESULTS_ID,
};
use crate::host::PageHost;
use caja_common::{FacetSelection, Selection};
use gloo::console;
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn release_loader(set_loading: WriteSignal<bool>, delay_ms: u32) {
    Timeout::new(delay_ms, move || set_loading.set(false)).forget();
}

#[component]
pub fn App() -> impl IntoView {
    let host: StoredValue<Option<PageHost>, LocalStorage> = StoredValue::new_local(None);
    let (options, set_options) = signal(Vec::<FilterOptions>::new());
    let (load_error, set_load_error) = signal(None::<String>);
    let (loading, set_loading) = signal(true);

    // The shell is mounted before this future first runs
    spawn_local(async move {
        match fetch_catalog(DATA_URL).await {
            Ok(catalog) => {
                set_options.set(FilterOptions::from_catalog(&catalog));
                host.set_value(PageHost::mount(catalog));
                release_loader(set_loading, LOADER_HIDE_OK_MS);
            }
            Err(err) => {
                console::error!(format!("Error al cargar herramientas: {}", err));
                set_load_error.set(Some(LOAD_ERROR_MESSAGE.to_string()));
                release_loader(set_loading, LOADER_HIDE_ERROR_MS);
            }
        }
    });

    let on_filter_change = move |selection: FacetSelection| {
        host.with_value(|host| {
            if let Some(host) = host {
                host.apply(Selection::Faceted(selection));
            }
        });
    };

    view! {
        <PageLoader visible=loading />
        <Header />

        <main id=MAIN_CONTENT_ID class="main-content">
            <FilterBar options=options on_change=on_filter_change />

            <section class="tools-section" aria-label="Herramientas">
                <Show when=move || load_error.get().is_some()>
                    <div class="load-error" role="alert" aria-live="assertive">
                        <p>{move || load_error.get().unwrap_or_default()}</p>
                    </div>
                </Show>
                <div id=GRID_ID class="tools-grid"></div>
                <p id=NO_RESULTS_ID class="no-results" style="display: none">
                    "No se encontraron herramientas para los criterios seleccionados."
                </p>
            </section>
        </main>

        <Footer />
        <ToolModal />

        <div
            id=LIVE_REGION_ID
            class="visually-hidden"
            aria-live="polite"
            aria-atomic="true"
        ></div>
    }
}
