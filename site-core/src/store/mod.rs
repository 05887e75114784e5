pub mod data_store;
pub mod route;

pub use data_store::DataStore;
pub use route::{Readiness, Route};
