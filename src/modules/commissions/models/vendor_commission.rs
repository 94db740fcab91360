use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The commission rate applicable to a vendor on a given date.
///
/// The report requires exactly one row per vendor and date; zero or
/// several rows for a commissioned vendor fail report generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorCommission {
    pub id: i64,

    pub date: NaiveDate,

    pub vendor_id: i64,

    /// Commission as a fraction of an order line's total amount
    pub rate: Decimal,
}
