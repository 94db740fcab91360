// Catalog module: products, promotions and their activation calendar

pub mod models;
pub mod repositories;

pub use models::{Product, ProductPromotion, Promotion};
pub use repositories::CatalogRepository;
