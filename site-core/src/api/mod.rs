pub mod client;
pub mod loader;
pub mod resource;

pub use client::{ApiResponse, Fetch, HttpFetcher};
pub use loader::{DataLoader, LoadReport, StoreEntry};
pub use resource::{Resource, PAGE_CONTENTS_PATH};
