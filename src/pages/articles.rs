use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use showroom_core::models::PageContent;
use showroom_core::Resource;

use crate::components::ContentCard;
use crate::models::{use_app_data, use_site_data};

/// Every post from the `blog` entry, linking to its detail page.
#[component]
pub fn ArticlesPage() -> impl IntoView {
    let app = use_app_data();
    let data = use_site_data();

    let title = app
        .text(PageContent::ARTICLES, "title")
        .unwrap_or_else(|| "Articles".to_string());
    let subtitle = app.text(PageContent::ARTICLES, "subtitle");

    let cards = move || {
        data.items(Resource::Blog)
            .into_iter()
            .map(|item| {
                let href = item.link.as_ref().map(|slug| format!("/articles/{slug}"));
                view! { <ContentCard item=item href=href /> }
            })
            .collect_view()
    };

    view! {
        <header class="page-header">
            <h1>{title}</h1>
            {subtitle.map(|text| view! { <p>{text}</p> })}
        </header>
        <section class="articles">{cards}</section>
    }
}

#[component]
pub fn ArticleDetail() -> impl IntoView {
    let data = use_site_data();
    let params = use_params_map();

    let article = move || {
        let slug = params.with(|p| p.get("slug")).unwrap_or_default();
        data.items(Resource::Blog)
            .into_iter()
            .find(|item| item.link.as_deref() == Some(slug.as_str()))
    };

    view! {
        {move || match article() {
            Some(item) => {
                view! {
                    <article class="article-detail">
                        {item.title.map(|text| view! { <h1>{text}</h1> })}
                        {item.image.map(|src| view! { <img src=src alt="" /> })}
                        {item.body.map(|text| view! { <p>{text}</p> })}
                        <a href="/articles">"Back to articles"</a>
                    </article>
                }
                    .into_any()
            }
            None => {
                view! {
                    <section class="article-missing">
                        <p>"Article not found"</p>
                        <a href="/articles">"Back to articles"</a>
                    </section>
                }
                    .into_any()
            }
        }}
    }
}
