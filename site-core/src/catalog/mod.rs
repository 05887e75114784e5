//! Catalog filter → search → sort → paginate pipeline.
//!
//! [`CatalogQuery`] holds the user's inputs; [`CatalogQuery::evaluate`] turns
//! the full product list into a [`CatalogSnapshot`] for display.

pub mod filter;
pub mod pagination;
pub mod query;
pub mod search;
pub mod sort;

pub use filter::FilterSelection;
pub use pagination::{PageTarget, Pagination, MAX_VISIBLE_PAGES, PRODUCTS_PER_PAGE};
pub use query::{CatalogPage, CatalogQuery, CatalogSnapshot};
pub use search::matches_keyword;
pub use sort::{ParseSortModeError, SortMode};
