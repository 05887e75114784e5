pub mod articles;
pub mod home;
pub mod not_found;
pub mod products;

pub use articles::{ArticleDetail, ArticlesPage};
pub use home::HomePage;
pub use not_found::NotFound;
pub use products::ProductsPage;
