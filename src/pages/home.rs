use leptos::prelude::*;
use showroom_core::models::PageContent;
use showroom_core::Resource;

use crate::components::ContentSection;
use crate::models::{use_app_data, use_site_data};

#[component]
pub fn HomePage() -> impl IntoView {
    let app = use_app_data();

    view! {
        <Hero />
        {move || {
            if app.is_mobile() {
                view! { <HighlightedRegions /> }.into_any()
            } else {
                view! { <Pinpoints /> }.into_any()
            }
        }}
        <About />
        <ContentSection id="visions" heading="Visions" resource=Resource::Visions />
        <ContentSection id="benefits" heading="Benefits" resource=Resource::Benefits />
        <ContentSection id="products" heading="Products" resource=Resource::Products />
        <ContentSection
            id="comodities"
            heading="Commodities"
            resource=Resource::Commodities
            link_prefix="/products?commodity="
        />
        <ContentSection id="team_members" heading="Our Teams" resource=Resource::TeamMembers />
        <ContentSection id="clients" heading="Clients" resource=Resource::Clients />
        <ContentSection
            id="articles"
            heading="Articles"
            resource=Resource::Articles
            link_prefix="/articles/"
        />
        <ContentSection
            id="certifications"
            heading="Certifications"
            resource=Resource::Certifications
        />
        <Location />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let app = use_app_data();
    let data = use_site_data();

    let title = app
        .text(PageContent::MAIN, "hero_title")
        .or_else(|| data.first(Resource::MyCompany).and_then(|c| c.title))
        .unwrap_or_default();
    let subtitle = app.text(PageContent::MAIN, "hero_subtitle");

    view! {
        <section id="hero" class="hero">
            <h1>{title}</h1>
            {subtitle.map(|text| view! { <p>{text}</p> })}
            <a class="hero-action" href="/products">"Explore Products"</a>
        </section>
    }
}

/// Full pinpoint map cards, for wide screens.
#[component]
fn Pinpoints() -> impl IntoView {
    view! { <ContentSection id="pinpoints" heading="Pinpoints" resource=Resource::Pinpoints /> }
}

/// Compact list of pinpoint names, for narrow screens.
#[component]
fn HighlightedRegions() -> impl IntoView {
    let data = use_site_data();
    let regions = data
        .items(Resource::Pinpoints)
        .into_iter()
        .filter_map(|item| item.title)
        .map(|name| view! { <li>{name}</li> })
        .collect_view();

    view! {
        <section id="highlighted-regions" class="highlighted-regions">
            <ul>{regions}</ul>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    let app = use_app_data();
    let data = use_site_data();

    let title = app
        .text(PageContent::MAIN, "about_title")
        .unwrap_or_else(|| "About".to_string());
    let company = data.first(Resource::MyCompany).unwrap_or_default();
    let body = app
        .text(PageContent::MAIN, "about_description")
        .or(company.body);

    view! {
        <section id="about" class="about">
            <h2>{title}</h2>
            {body.map(|text| view! { <p>{text}</p> })}
            {company.image.map(|src| view! { <img src=src alt="" loading="lazy" /> })}
        </section>
    }
}

#[component]
fn Location() -> impl IntoView {
    let app = use_app_data();
    let data = use_site_data();

    let title = app
        .text(PageContent::MAIN, "location_title")
        .unwrap_or_else(|| "Location".to_string());
    let address = data.field(Resource::MyCompany, "address");
    let map = data.field(Resource::MyCompany, "map_url");

    view! {
        <section id="location" class="location">
            <h2>{title}</h2>
            {address.map(|text| view! { <address>{text}</address> })}
            {map.map(|src| view! { <iframe src=src title="Company location"></iframe> })}
        </section>
    }
}

