use leptos::prelude::*;
use showroom_core::models::{FilterKey, Product};

use crate::models::CatalogState;

/// Catalog card: image background, name and description, plus commodity and
/// region details when "With Product Info" is checked.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let state = use_context::<CatalogState>().expect("CatalogState context missing");

    let style = product
        .image
        .as_ref()
        .map(|url| format!("--backgroundImage: url({url})"));
    let commodities = product.commodity_names().collect::<Vec<_>>().join(", ");
    let regions = product.region_names().join(", ");
    let show_commodities = state.has_filter(FilterKey::Commodities);
    let show_regions = state.has_filter(FilterKey::Regions);

    view! {
        <article class="product-card" style=style>
            <div class="product-card-content">
                <h3>{product.name}</h3>
                <p>{product.description}</p>
            </div>
            <Show when=move || state.with_product_info.get()>
                <div class="product-card-info">
                    {show_commodities
                        .then(|| {
                            view! {
                                <div class="product-comodities">
                                    <span class="bold">"Comodities:"</span>
                                    <span>{commodities.clone()}</span>
                                </div>
                            }
                        })}
                    {show_regions
                        .then(|| {
                            view! {
                                <div class="comodity-regions">
                                    <span class="bold">"Regions:"</span>
                                    <span>{regions.clone()}</span>
                                </div>
                            }
                        })}
                </div>
            </Show>
        </article>
    }
}
