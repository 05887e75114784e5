pub mod catalog_state;
pub mod site_state;

pub use catalog_state::CatalogState;
pub use site_state::{use_app_data, use_site_data, SiteState};
