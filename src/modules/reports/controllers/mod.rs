mod report_controller;

pub use report_controller::{configure, get_daily_report};
