//! Page footer with the current year

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <p>"© " <span id="current-year">{year}</span> " Caja de Herramientas"</p>
        </footer>
    }
}
