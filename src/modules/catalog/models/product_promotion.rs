use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An activation record: this product was under this promotion on this date.
///
/// The schema allows several activations for one product and date; the
/// report attributes commission to at most one of them (lowest promotion
/// id wins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPromotion {
    pub id: i64,
    pub date: NaiveDate,
    pub product_id: i64,
    pub promotion_id: i64,
}
