pub mod content;
pub mod filter;
pub mod product;

pub use content::{ContentItem, PageContent};
pub use filter::{FilterKey, FilterOption, FilterSchema};
pub use product::{Commodity, Product, Region};
