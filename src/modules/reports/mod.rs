pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{CommissionSummary, DailyReport};
pub use repositories::{ReportRepository, SqliteReportRepository};
pub use services::{DailyAggregator, ReportService};
