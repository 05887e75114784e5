use leptos::prelude::*;
use leptos::tachys::dom::window;
use showroom_core::catalog::MAX_VISIBLE_PAGES;
use showroom_core::{PageTarget, Pagination};

use crate::models::CatalogState;

/// Previous / numbered / next page controls for the catalog.
#[component]
pub fn PaginationTool(#[prop(into)] pagination: Signal<Pagination>) -> impl IntoView {
    let state = use_context::<CatalogState>().expect("CatalogState context missing");

    let go = move |target: PageTarget| {
        window().scroll_to_with_x_and_y(0.0, 0.0);
        state.navigate(target, pagination.get_untracked().item_count());
    };

    let pages = move || {
        let current = pagination.get();
        current
            .visible_pages(MAX_VISIBLE_PAGES)
            .map(|page| {
                view! {
                    <li>
                        <button
                            class="pagination-page"
                            class:active={page == current.current()}
                            on:click=move |_| go(PageTarget::Index(page))
                        >
                            {page}
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="pagination" aria-label="Catalog pages">
            <button
                class="pagination-previous"
                prop:disabled=move || pagination.get().is_first()
                on:click=move |_| go(PageTarget::Previous)
            >
                "Previous"
            </button>
            <ul class="pagination-pages">{pages}</ul>
            <button
                class="pagination-next"
                prop:disabled=move || pagination.get().is_last()
                on:click=move |_| go(PageTarget::Next)
            >
                "Next"
            </button>
        </nav>
    }
}
