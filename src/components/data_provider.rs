use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::tachys::dom::window;
use leptos_router::hooks::use_location;
use showroom_core::{DataLoader, HttpFetcher, Resource, Route, SiteConfig};

use crate::components::LoadingAnimation;
use crate::models::SiteState;

/// Loads site data once and exposes it to descendants through the
/// [`AppData`](crate::models::AppData) and [`SiteData`](crate::models::SiteData)
/// contexts. Shows the loading animation until the current route's data is in.
#[component]
pub fn DataProvider(children: ChildrenFn) -> impl IntoView {
    let state = SiteState::new(current_window_width());

    provide_context(state.app_data());
    provide_context(state.site_data());

    // Start fetching on mount - run only once per provider instance
    let fetch_started = std::cell::Cell::new(false);
    Effect::new(move |_| {
        if !fetch_started.get() {
            fetch_started.set(true);
            load_site_data(state);
        }
    });

    let _resize = window_event_listener(leptos::ev::resize, move |_| {
        state.window_width.set(current_window_width());
    });

    let pathname = use_location().pathname;
    let ready = Memo::new(move |_| {
        let path = pathname.get();
        let route = Route::classify(&path);
        let readiness = state
            .page_content
            .with(|content| state.store.with(|store| route.readiness(content.as_ref(), store)));

        if !readiness.is_ready() {
            tracing::debug!(
                ?route,
                missing_section = ?readiness.missing_section,
                missing = ?readiness.missing,
                failed = state.failures.with(Vec::len),
                "Waiting for route data"
            );
        }
        readiness.is_ready()
    });

    view! {
        <Show when=move || ready.get() fallback=|| view! { <LoadingAnimation /> }>
            {children()}
        </Show>
    }
}

/// Fire one independent fetch for the page copy and for each resource.
/// Every completion updates the store on its own; failures are logged and
/// leave their key unset.
fn load_site_data(state: SiteState) {
    let config = SiteConfig::from_build_env();
    let config = match window().location().origin() {
        Ok(origin) => config.resolve_against(&origin),
        Err(e) => {
            tracing::warn!("Failed to read window origin: {e:?}");
            config
        }
    };
    tracing::info!(api = config.api_base_url(), "Loading site data");

    let loader = DataLoader::new(HttpFetcher::new(config));

    let page_loader = loader.clone();
    spawn_local(async move {
        match page_loader.fetch_page_contents().await {
            Ok(content) => state.page_content.set(Some(content)),
            Err(e) => state.record_failure(&e),
        }
    });

    for resource in Resource::ALL {
        let loader = loader.clone();
        spawn_local(async move {
            match loader.fetch_resource(resource).await {
                Ok(entry) => state.insert(entry),
                Err(e) => state.record_failure(&e),
            }
        });
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn current_window_width() -> u32 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map_or(0, |w| w as u32)
}
