use crate::models::{FilterKey, FilterSchema, Product};

use super::filter::FilterSelection;
use super::pagination::{PageTarget, Pagination};
use super::search::matches_lowercase;
use super::sort::SortMode;

/// User inputs of the catalog view: filter selection, search keyword, sort
/// mode and current page.
///
/// Changing the selection, keyword or sort mode sends the view back to
/// page 1. [`refresh`](Self::refresh) clears selection and keyword but keeps
/// the sort mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    selection: FilterSelection,
    keyword: String,
    sort: SortMode,
    page: usize,
}

impl CatalogQuery {
    /// Initial query for a schema, honoring the `commodity` query parameter.
    pub fn new(schema: &FilterSchema, commodity_param: Option<&str>) -> Self {
        Self {
            selection: FilterSelection::initial(schema, commodity_param),
            keyword: String::new(),
            sort: SortMode::default(),
            page: 1,
        }
    }

    pub const fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub const fn sort(&self) -> SortMode {
        self.sort
    }

    /// Requested page; [`evaluate`](Self::evaluate) clamps it to the results.
    pub const fn page(&self) -> usize {
        self.page
    }

    pub fn set_filter<I, S>(&mut self, schema: &FilterSchema, key: FilterKey, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.selection.set(schema, key, values) {
            self.page = 1;
        }
    }

    pub fn toggle_filter(&mut self, schema: &FilterSchema, key: FilterKey, name: &str) {
        if self.selection.toggle(schema, key, name) {
            self.page = 1;
        }
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        let keyword = keyword.into();
        if keyword != self.keyword {
            self.keyword = keyword;
            self.page = 1;
        }
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        if sort != self.sort {
            self.sort = sort;
            self.page = 1;
        }
    }

    /// Clear every filter and the keyword. Sort mode is kept.
    pub fn refresh(&mut self) {
        self.selection.clear();
        self.keyword.clear();
        self.page = 1;
    }

    /// Move to another page of a result set with `result_count` items.
    /// Returns false when the request is a no-op.
    pub fn navigate(&mut self, target: PageTarget, result_count: usize) -> bool {
        match Pagination::new(result_count, self.page).resolve(target) {
            Some(page) => {
                self.page = page;
                true
            }
            None => false,
        }
    }

    /// Run filter → search → sort over `products` and paginate the result.
    pub fn evaluate<'a>(&self, products: &'a [Product]) -> CatalogSnapshot<'a> {
        let needle = self.keyword.to_lowercase();
        let mut items: Vec<&Product> = products
            .iter()
            .filter(|p| self.selection.matches(p))
            .filter(|p| matches_lowercase(p, &needle))
            .collect();
        self.sort.sort(&mut items);

        tracing::debug!(
            source = products.len(),
            results = items.len(),
            sort = %self.sort,
            "Catalog filtered"
        );

        let pagination = Pagination::new(items.len(), self.page);
        CatalogSnapshot {
            items,
            source_count: products.len(),
            pagination,
        }
    }
}

/// Derived catalog view borrowed from the source product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSnapshot<'a> {
    items: Vec<&'a Product>,
    source_count: usize,
    pagination: Pagination,
}

impl<'a> CatalogSnapshot<'a> {
    /// Every matching product, in sort order.
    pub fn items(&self) -> &[&'a Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub const fn source_count(&self) -> usize {
        self.source_count
    }

    pub const fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Products on the current page.
    pub fn page_items(&self) -> &[&'a Product] {
        &self.items[self.pagination.range()]
    }

    /// Owned copy of the current page, for handing to reactive views.
    pub fn to_page(&self) -> CatalogPage {
        CatalogPage {
            items: self.page_items().iter().map(|p| (*p).clone()).collect(),
            result_count: self.len(),
            source_count: self.source_count,
            pagination: self.pagination,
        }
    }
}

/// One page of catalog results, detached from the source list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPage {
    pub items: Vec<Product>,
    pub result_count: usize,
    pub source_count: usize,
    pub pagination: Pagination,
}
