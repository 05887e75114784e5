use leptos::prelude::*;
use showroom_core::models::FilterKey;

use crate::models::CatalogState;

/// Collapsible checkbox list for one catalog filter key.
#[component]
pub fn DropdownFilter(filter_key: FilterKey, open: bool) -> impl IntoView {
    let state = use_context::<CatalogState>().expect("CatalogState context missing");
    let is_open = RwSignal::new(open);

    let names: Vec<String> = state.schema.with_value(|schema| {
        schema
            .names(filter_key)
            .into_iter()
            .map(str::to_string)
            .collect()
    });

    let items = names
        .into_iter()
        .map(|name| {
            let input_id = format!("{filter_key}-{}", name.to_lowercase().replace(' ', "-"));
            let label_for = input_id.clone();
            let checked_name = name.clone();
            let toggle_name = name.clone();
            view! {
                <li>
                    <label for=label_for>
                        <input
                            type="checkbox"
                            id=input_id
                            prop:checked=move || state.is_selected(filter_key, &checked_name)
                            on:change=move |_| state.toggle_filter(filter_key, &toggle_name)
                        />
                        <span>{name}</span>
                    </label>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="dropdown-filter" class:open=move || is_open.get()>
            <button
                class="dropdown-filter-header"
                aria-expanded=move || is_open.get().to_string()
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                <span>{filter_key.title()}</span>
            </button>
            <ul class="dropdown-filter-items" class:hidden=move || !is_open.get()>
                {items}
            </ul>
        </div>
    }
}
