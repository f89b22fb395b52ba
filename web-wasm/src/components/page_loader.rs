//! Initial page loader

use leptos::prelude::*;

#[component]
pub fn PageLoader(visible: ReadSignal<bool>) -> impl IntoView {
    view! {
        <div
            class="page-loader"
            class:hidden=move || !visible.get()
            aria-hidden="true"
        >
            <div class="page-loader-spinner"></div>
        </div>
    }
}
