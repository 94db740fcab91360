use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Daily order report returned by `GET /reports/daily/{date}`.
///
/// Field names and nesting are a compatibility contract with existing
/// consumers; monetary values serialize as plain JSON numbers, not strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReport {
    /// Count of distinct customer ids among the day's orders; an order
    /// without a customer contributes one shared "unknown" value
    pub customers: usize,

    /// Sum of absolute discounts across all order lines
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_discount_amount: Decimal,

    /// Sum of quantities across all order lines
    pub items: i64,

    /// Average order-line total per order, 0 for a day without orders
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub order_total_avg: Decimal,

    /// Quantity-weighted average discount rate, 0 for a day without items
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub discount_rate_avg: Decimal,

    pub commissions: CommissionSummary,
}

/// Commission block of the daily report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionSummary {
    /// Commission earned on lines of promoted products, keyed by promotion id
    #[serde(with = "promotion_totals")]
    pub promotions: BTreeMap<i64, Decimal>,

    /// Commission earned across all order lines
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total: Decimal,

    /// Average commission per order, 0 for a day without orders
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub order_average: Decimal,
}

impl DailyReport {
    /// The canonical "no data" report: every numeric field 0, no buckets
    pub fn empty() -> Self {
        Self {
            customers: 0,
            total_discount_amount: Decimal::ZERO,
            items: 0,
            order_total_avg: Decimal::ZERO,
            discount_rate_avg: Decimal::ZERO,
            commissions: CommissionSummary {
                promotions: BTreeMap::new(),
                total: Decimal::ZERO,
                order_average: Decimal::ZERO,
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::empty()
    }
}

/// Serialize promotion buckets as `{"<promotion_id>": <number>, ...}`.
///
/// Keys are stringified ids (JSON object keys are strings); values use the
/// same raw-number representation as the other monetary fields.
mod promotion_totals {
    use rust_decimal::Decimal;
    use serde::de::{Deserializer, Error as _};
    use serde::ser::{SerializeMap, Serializer};
    use serde::Deserialize;
    use std::collections::BTreeMap;

    struct RawDecimal(Decimal);

    impl serde::Serialize for RawDecimal {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            rust_decimal::serde::arbitrary_precision::serialize(&self.0, serializer)
        }
    }

    pub fn serialize<S>(map: &BTreeMap<i64, Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut out = serializer.serialize_map(Some(map.len()))?;
        for (promotion_id, amount) in map {
            out.serialize_entry(&promotion_id.to_string(), &RawDecimal(*amount))?;
        }
        out.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<i64, Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: BTreeMap<String, serde_json::Value> = BTreeMap::deserialize(deserializer)?;
        let mut map = BTreeMap::new();
        for (key, value) in raw {
            let promotion_id: i64 = key
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid promotion id '{}'", key)))?;
            let amount: Decimal = serde_json::from_value(value).map_err(D::Error::custom)?;
            map.insert(promotion_id, amount);
        }
        Ok(map)
    }
}
