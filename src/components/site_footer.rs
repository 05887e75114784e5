use leptos::prelude::*;
use showroom_core::Resource;

use crate::models::use_site_data;

/// Company details and social links, shown on every page.
#[component]
pub fn SiteFooter() -> impl IntoView {
    let data = use_site_data();

    let company = move || data.first(Resource::MyCompany);
    let address = move || data.field(Resource::MyCompany, "address");
    let socials = move || {
        data.items(Resource::Socials)
            .into_iter()
            .filter_map(|social| {
                let href = social.link?;
                let label = social.title.unwrap_or_else(|| href.clone());
                Some(view! {
                    <li>
                        <a href=href target="_blank" rel="noopener noreferrer">{label}</a>
                    </li>
                })
            })
            .collect_view()
    };

    view! {
        <footer class="site-footer">
            <div class="site-footer-company">
                {move || company().and_then(|c| c.title).map(|name| view! { <h2>{name}</h2> })}
                {move || address().map(|text| view! { <address>{text}</address> })}
            </div>
            <ul class="site-footer-socials">{socials}</ul>
        </footer>
    }
}
