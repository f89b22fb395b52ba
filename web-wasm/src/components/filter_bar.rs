//! Filter dropdowns
//!
//! One dropdown of checkboxes per facet group. At most one dropdown is open;
//! a click anywhere outside the bar closes it.

use caja_common::{Catalog, FacetGroup, FacetSelection};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Checkbox values offered for one group
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOptions {
    pub group: FacetGroup,
    pub values: Vec<String>,
}

impl FilterOptions {
    pub fn from_catalog(catalog: &Catalog) -> Vec<Self> {
        FacetGroup::ALL
            .iter()
            .map(|&group| Self {
                group,
                values: catalog.tags(group),
            })
            .filter(|o| !o.values.is_empty())
            .collect()
    }
}

#[component]
pub fn FilterBar<F>(options: ReadSignal<Vec<FilterOptions>>, on_change: F) -> impl IntoView
where
    F: Fn(FacetSelection) + 'static + Clone + Send + Sync,
{
    let selection = RwSignal::new(FacetSelection::new());
    let open = RwSignal::new(None::<FacetGroup>);

    let _outside_click = window_event_listener(ev::click, move |event| {
        let inside = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(".filter-dropdown").ok().flatten())
            .is_some();
        if !inside {
            open.set(None);
        }
    });

    let on_clear = {
        let on_change = on_change.clone();
        move |_| {
            selection.set(FacetSelection::new());
            open.set(None);
            on_change(FacetSelection::new());
        }
    };

    view! {
        <div class="filters-bar" role="group" aria-label="Filtros de herramientas">
            <For
                each=move || options.get()
                key=|o| o.group
                children=move |o| {
                    let on_change = on_change.clone();
                    view! {
                        <FilterDropdown
                            options=o
                            selection=selection
                            open=open
                            on_change=on_change
                        />
                    }
                }
            />
            <button
                type="button"
                id="btn-limpiar-filtros"
                class="btn-limpiar-filtros"
                style:display=move || if selection.with(|s| s.total() > 0) { "flex" } else { "none" }
                on:click=on_clear
            >
                <span class="material-icons-outlined" aria-hidden="true">"filter_alt_off"</span>
                "Limpiar filtros"
            </button>
        </div>
    }
}

#[component]
fn FilterDropdown<F>(
    options: FilterOptions,
    selection: RwSignal<FacetSelection>,
    open: RwSignal<Option<FacetGroup>>,
    on_change: F,
) -> impl IntoView
where
    F: Fn(FacetSelection) + 'static + Clone + Send + Sync,
{
    let group = options.group;
    let is_open = move || open.get() == Some(group);
    let count = move || selection.with(|s| s.count(group));
    let menu_id = format!("filter-menu-{}", group.key());

    let class = move || {
        let mut class = String::from("filter-dropdown");
        if is_open() {
            class.push_str(" open");
        }
        if count() > 0 {
            class.push_str(" has-selection");
        }
        class
    };

    let on_toggle = move |_| {
        open.update(|current| {
            *current = if *current == Some(group) { None } else { Some(group) };
        });
    };

    let on_keydown = move |event: ev::KeyboardEvent| {
        if event.key() == "Escape" {
            open.set(None);
        }
    };

    view! {
        <div class=class data-filter=group.key()>
            <button
                type="button"
                class="filter-dropdown-toggle"
                aria-haspopup="true"
                aria-controls=menu_id.clone()
                aria-expanded=move || is_open().to_string()
                on:click=on_toggle
                on:keydown=on_keydown
            >
                <span class="filter-dropdown-label">{group.question()}</span>
                <span class="filter-dropdown-count">
                    {move || match count() {
                        0 => String::new(),
                        n => n.to_string(),
                    }}
                </span>
                <span class="material-icons-outlined" aria-hidden="true">"expand_more"</span>
            </button>
            <div class="filter-dropdown-menu" id=menu_id>
                {options
                    .values
                    .into_iter()
                    .map(|value| {
                        let on_change = on_change.clone();
                        let checked_value = value.clone();
                        let change_value = value.clone();
                        view! {
                            <label class="filter-option">
                                <input
                                    type="checkbox"
                                    class="filter-checkbox"
                                    name=group.key()
                                    value=value.clone()
                                    prop:checked=move || {
                                        selection.with(|s| s.is_selected(group, &checked_value))
                                    }
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        selection.update(|s| s.set(group, &change_value, checked));
                                        on_change(selection.get_untracked());
                                    }
                                />
                                <span>{value}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
