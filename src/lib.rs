//! ShopMetrics Daily Sales Reporting Service
//!
//! This library provides the core functionality for the ShopMetrics order
//! analytics system: storage access for the shop dataset, the daily report
//! aggregation pipeline, and the HTTP surface that serves it.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;
pub mod seeding;

// Re-export commonly used types
pub use modules::catalog;
pub use modules::commissions;
pub use modules::orders;
pub use modules::reports;
