mod vendor_commission;

pub use vendor_commission::VendorCommission;
