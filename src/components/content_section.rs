use leptos::prelude::*;
use showroom_core::models::{ContentItem, PageContent};
use showroom_core::Resource;

use crate::models::{use_app_data, use_site_data};

/// A home page section listing the records of one resource as cards.
///
/// The heading comes from `main.<id>_title` in the page content when present.
/// With `link_prefix`, cards link to `<link_prefix><item link>`.
#[component]
pub fn ContentSection(
    id: &'static str,
    heading: &'static str,
    resource: Resource,
    #[prop(optional)] link_prefix: Option<&'static str>,
) -> impl IntoView {
    let app = use_app_data();
    let data = use_site_data();

    let title = app
        .text(PageContent::MAIN, &format!("{id}_title"))
        .unwrap_or_else(|| heading.to_string());
    let subtitle = app.text(PageContent::MAIN, &format!("{id}_subtitle"));

    let cards = data
        .items(resource)
        .into_iter()
        .map(|item| {
            let href = link_prefix.zip(item.link.clone()).map(|(prefix, link)| format!("{prefix}{link}"));
            view! { <ContentCard item=item href=href /> }
        })
        .collect_view();

    view! {
        <section id=id class="content-section">
            <header class="content-section-header">
                <h2>{title}</h2>
                {subtitle.map(|text| view! { <p>{text}</p> })}
            </header>
            <div class="content-section-cards">{cards}</div>
        </section>
    }
}

/// One record rendered as a card.
#[component]
pub fn ContentCard(item: ContentItem, href: Option<String>) -> impl IntoView {
    let ContentItem { title, body, image, .. } = item;
    let alt = title.clone().unwrap_or_default();

    let content = view! {
        {image.map(|src| view! { <img src=src alt=alt loading="lazy" /> })}
        <div class="content-card-text">
            {title.map(|text| view! { <h3>{text}</h3> })}
            {body.map(|text| view! { <p>{text}</p> })}
        </div>
    };

    match href {
        Some(href) => view! { <a class="content-card" href=href>{content}</a> }.into_any(),
        None => view! { <article class="content-card">{content}</article> }.into_any(),
    }
}
