use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use showroom_core::models::Product;
use showroom_core::{CatalogPage, SortMode};

use crate::components::{DropdownFilter, PaginationTool, ProductCard};
use crate::models::{use_app_data, use_site_data, CatalogState};

/// Filter sidebar plus the paged product grid.
///
/// Filter state lives in a [`CatalogState`] created per mount; the optional
/// `?commodity=<slug>` query parameter pre-selects one commodity.
#[component]
pub fn CatalogSplit() -> impl IntoView {
    let app = use_app_data();
    let data = use_site_data();

    let schema = app.catalog_filters();
    let commodity = use_query_map().with_untracked(|query| query.get("commodity"));
    let state = CatalogState::new(schema, commodity.as_deref());
    provide_context(state);

    let products: Memo<Vec<Product>> = Memo::new(move |_| data.catalog());
    let page: Memo<CatalogPage> = Memo::new(move |_| {
        products.with(|products| state.query.with(|query| query.evaluate(products).to_page()))
    });
    let pagination = Signal::derive(move || page.with(|p| p.pagination));

    let has_schema = state.schema.with_value(|schema| !schema.is_empty());
    let visible = move || has_schema && products.with(|p| !p.is_empty());

    let first_open = app.is_desktop_untracked();
    let filters = move || {
        state.schema.with_value(|schema| {
            schema
                .keys()
                .enumerate()
                .map(|(index, key)| {
                    let open = index == 0 && first_open;
                    view! { <DropdownFilter filter_key=key open=open /> }
                })
                .collect_view()
        })
    };

    view! {
        <Show when=visible>
            <section class="catalog-split">
                <aside class="catalog-filters">
                    <div class="catalog-filters-header">
                        <h3>"Filters"</h3>
                        <button class="catalog-refresh" on:click=move |_| state.refresh()>
                            "Refresh"
                        </button>
                    </div>
                    {filters}
                </aside>
                <div class="catalog-main">
                    <div class="catalog-toolbar">
                        <input
                            type="search"
                            class="catalog-search"
                            placeholder="Search products"
                            prop:value=move || state.query.with(|q| q.keyword().to_string())
                            on:input=move |ev| state.set_keyword(event_target_value(&ev))
                        />
                        <select
                            class="catalog-sort"
                            prop:value=move || state.query.with(|q| q.sort().as_str())
                            on:change=move |ev| {
                                match event_target_value(&ev).parse::<SortMode>() {
                                    Ok(mode) => state.set_sort(mode),
                                    Err(e) => tracing::warn!("{e}"),
                                }
                            }
                        >
                            {SortMode::ALL
                                .into_iter()
                                .map(|mode| view! { <option value=mode.as_str()>{mode.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="catalog-summary">
                        <p>
                            {move || {
                                page.with(|p| {
                                    format!(
                                        "Showing {} results from {} products",
                                        p.result_count,
                                        p.source_count,
                                    )
                                })
                            }}
                        </p>
                        <label class="catalog-product-info">
                            <input
                                type="checkbox"
                                prop:checked=move || state.with_product_info.get()
                                on:change=move |ev| state.with_product_info.set(event_target_checked(&ev))
                            />
                            <span>"With Product Info"</span>
                        </label>
                    </div>
                    <Show
                        when=move || page.with(|p| p.result_count > 0)
                        fallback=|| view! { <p class="catalog-empty">"No products found"</p> }
                    >
                        <div class="catalog-grid">
                            <For
                                each=move || page.with(|p| p.items.clone())
                                key=|product| product.id
                                children=|product| view! { <ProductCard product=product /> }
                            />
                        </div>
                        <PaginationTool pagination=pagination />
                    </Show>
                </div>
            </section>
        </Show>
    }
}
