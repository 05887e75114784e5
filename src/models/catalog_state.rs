use leptos::prelude::*;
use showroom_core::models::{FilterKey, FilterSchema};
use showroom_core::{CatalogQuery, PageTarget, SortMode};

/// Local state of the catalog view, shared with its child components via
/// `use_context()`. Created fresh each time the catalog mounts.
#[derive(Clone, Copy)]
pub struct CatalogState {
    /// Filters, keyword, sort mode and current page
    pub query: RwSignal<CatalogQuery>,
    /// Filter keys and candidates from the products page content
    pub schema: StoredValue<FilterSchema>,
    /// Show commodity/region details on product cards
    pub with_product_info: RwSignal<bool>,
}

impl CatalogState {
    pub fn new(schema: FilterSchema, commodity_param: Option<&str>) -> Self {
        let query = CatalogQuery::new(&schema, commodity_param);
        Self {
            query: RwSignal::new(query),
            schema: StoredValue::new(schema),
            with_product_info: RwSignal::new(false),
        }
    }

    pub fn is_selected(&self, key: FilterKey, name: &str) -> bool {
        self.query.with(|q| q.selection().is_selected(key, name))
    }

    pub fn toggle_filter(&self, key: FilterKey, name: &str) {
        self.schema.with_value(|schema| {
            self.query.update(|q| q.toggle_filter(schema, key, name));
        });
    }

    pub fn set_keyword(&self, keyword: String) {
        self.query.update(|q| q.set_keyword(keyword));
    }

    pub fn set_sort(&self, sort: SortMode) {
        self.query.update(|q| q.set_sort(sort));
    }

    /// Clear every filter and the keyword; sort mode stays.
    pub fn refresh(&self) {
        self.query.update(CatalogQuery::refresh);
    }

    pub fn navigate(&self, target: PageTarget, result_count: usize) {
        let mut moved = false;
        self.query.update(|q| moved = q.navigate(target, result_count));
        if moved {
            tracing::debug!(?target, "Catalog page changed");
        }
    }

    pub fn has_filter(&self, key: FilterKey) -> bool {
        self.schema.with_value(|schema| schema.has_key(key))
    }
}
