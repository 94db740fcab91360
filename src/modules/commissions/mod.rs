// Commissions module: per-vendor, per-date commission rates

pub mod models;
pub mod repositories;

pub use models::VendorCommission;
pub use repositories::CommissionRepository;
