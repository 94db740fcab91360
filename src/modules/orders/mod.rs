// Orders module

pub mod models;
pub mod repositories;

pub use models::{Order, OrderLine};
pub use repositories::OrderRepository;
