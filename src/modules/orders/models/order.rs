use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A customer order as recorded by the shop.
///
/// Vendor and customer may both be absent: imported historical orders are
/// not always attributable. An order with lines but no vendor cannot be
/// commissioned and fails report generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,

    /// Creation timestamp; the report scopes orders by its calendar date
    pub created_at: NaiveDateTime,

    pub vendor_id: Option<i64>,

    pub customer_id: Option<i64>,
}

impl Order {
    /// Whether this order was created on the given calendar date
    pub fn created_on(&self, date: NaiveDate) -> bool {
        self.created_at.date() == date
    }
}
