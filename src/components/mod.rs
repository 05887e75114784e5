pub mod catalog_split;
pub mod content_section;
pub mod data_provider;
pub mod dropdown_filter;
pub mod loading_animation;
pub mod pagination_tool;
pub mod product_card;
pub mod site_footer;

pub use catalog_split::CatalogSplit;
pub use content_section::{ContentCard, ContentSection};
pub use data_provider::DataProvider;
pub use dropdown_filter::DropdownFilter;
pub use loading_animation::LoadingAnimation;
pub use pagination_tool::PaginationTool;
pub use product_card::ProductCard;
pub use site_footer::SiteFooter;
