use leptos::prelude::*;
use showroom_core::config::{DESKTOP_BREAKPOINT, MOBILE_BREAKPOINT};
use showroom_core::models::{ContentItem, FilterSchema, PageContent, Product};
use showroom_core::{DataStore, FetchError, Resource, StoreEntry};

/// Data owned by the provider. Only read-only views of it ([`AppData`] and
/// [`SiteData`]) are handed to the rest of the app.
#[derive(Clone, Copy)]
pub struct SiteState {
    /// Page copy (`page_contents`), once loaded
    pub page_content: RwSignal<Option<PageContent>>,
    /// Fetched resources
    pub store: RwSignal<DataStore>,
    /// `window.innerWidth` in CSS pixels
    pub window_width: RwSignal<u32>,
    /// Messages of fetches that failed this session
    pub failures: RwSignal<Vec<String>>,
}

impl SiteState {
    pub fn new(window_width: u32) -> Self {
        Self {
            page_content: RwSignal::new(None),
            store: RwSignal::new(DataStore::new()),
            window_width: RwSignal::new(window_width),
            failures: RwSignal::new(Vec::new()),
        }
    }

    /// Merge a fetched resource into the store
    pub fn insert(&self, entry: StoreEntry) {
        self.store.update(|store| {
            store.insert(entry);
        });
    }

    pub fn record_failure(&self, error: &FetchError) {
        self.failures.update(|f| f.push(error.to_string()));
    }

    pub fn app_data(&self) -> AppData {
        AppData {
            content: self.page_content.read_only(),
            window_width: self.window_width.read_only(),
        }
    }

    pub fn site_data(&self) -> SiteData {
        SiteData {
            store: self.store.read_only(),
        }
    }
}

/// Page copy plus window size.
#[derive(Clone, Copy)]
pub struct AppData {
    pub content: ReadSignal<Option<PageContent>>,
    pub window_width: ReadSignal<u32>,
}

impl AppData {
    pub fn is_mobile(&self) -> bool {
        self.window_width.get() <= MOBILE_BREAKPOINT
    }

    /// Width check at call time, without subscribing to resizes.
    pub fn is_desktop_untracked(&self) -> bool {
        self.window_width.get_untracked() > DESKTOP_BREAKPOINT
    }

    /// String field of a page section.
    pub fn text(&self, section: &str, field: &str) -> Option<String> {
        self.content.with(|content| {
            content
                .as_ref()
                .and_then(|c| c.text(section, field))
                .map(str::to_string)
        })
    }

    pub fn catalog_filters(&self) -> FilterSchema {
        self.content.with(|content| {
            content
                .as_ref()
                .and_then(PageContent::catalog_filters)
                .unwrap_or_default()
        })
    }
}

/// Raw entity data fetched from the API.
#[derive(Clone, Copy)]
pub struct SiteData {
    pub store: ReadSignal<DataStore>,
}

impl SiteData {
    pub fn items(&self, resource: Resource) -> Vec<ContentItem> {
        self.store.with(|store| store.items(resource))
    }

    /// The first record of a resource (e.g. `my_company`).
    pub fn first(&self, resource: Resource) -> Option<ContentItem> {
        self.items(resource).into_iter().next()
    }

    /// String field of a single-object resource.
    pub fn field(&self, resource: Resource, field: &str) -> Option<String> {
        self.store.with(|store| {
            store
                .get(resource)?
                .get(field)?
                .as_str()
                .map(str::to_string)
        })
    }

    /// Products of the `catalog` resource; empty if missing or malformed.
    pub fn catalog(&self) -> Vec<Product> {
        self.store.with(|store| match store.decode::<Vec<Product>>(Resource::Catalog) {
            Ok(products) => products.unwrap_or_default(),
            Err(e) => {
                tracing::error!("{e}");
                Vec::new()
            }
        })
    }
}

pub fn use_app_data() -> AppData {
    use_context::<AppData>().expect("AppData context missing")
}

pub fn use_site_data() -> SiteData {
    use_context::<SiteData>().expect("SiteData context missing")
}
