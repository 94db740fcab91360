pub mod daily_aggregator;
pub mod report_service;

pub use daily_aggregator::DailyAggregator;
pub use report_service::ReportService;
