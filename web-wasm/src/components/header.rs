//! Page header

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Caja de Herramientas"</h1>
            <p class="header-subtitle">
                "Encuentra la herramienta adecuada para tu equipo y tu propósito."
            </p>
        </header>
    }
}
