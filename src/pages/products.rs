use leptos::prelude::*;
use showroom_core::models::PageContent;

use crate::components::CatalogSplit;
use crate::models::use_app_data;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let app = use_app_data();
    let title = app
        .text(PageContent::PRODUCTS, "title")
        .unwrap_or_else(|| "Our Products".to_string());
    let subtitle = app.text(PageContent::PRODUCTS, "subtitle");

    view! {
        <header class="page-header">
            <h1>{title}</h1>
            {subtitle.map(|text| view! { <p>{text}</p> })}
        </header>
        <CatalogSplit />
    }
}
