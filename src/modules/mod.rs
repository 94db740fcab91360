pub mod catalog;
pub mod commissions;
pub mod health;
pub mod orders;
pub mod reports;
