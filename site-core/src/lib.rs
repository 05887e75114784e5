//! Platform-independent core of the Showroom marketing site.
//!
//! Everything the browser app needs that does not touch the DOM lives here:
//! the wire data model, the backend resource table and loader, the shared
//! data store with per-route readiness checks, and the catalog
//! filter/search/sort/paginate pipeline.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{ApiResponse, DataLoader, Fetch, HttpFetcher, LoadReport, Resource, StoreEntry};
pub use catalog::{CatalogPage, CatalogQuery, CatalogSnapshot, PageTarget, Pagination, SortMode};
pub use config::SiteConfig;
pub use error::FetchError;
pub use models::{ContentItem, FilterKey, FilterOption, FilterSchema, PageContent, Product};
pub use store::{DataStore, Readiness, Route};
