use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::core::{IntegrityError, Result};
use crate::modules::catalog::models::ProductPromotion;
use crate::modules::commissions::models::VendorCommission;
use crate::modules::orders::models::{Order, OrderLine};
use crate::modules::reports::models::{CommissionSummary, DailyReport};

/// Folds one date's scoped records into the daily report.
///
/// The fold is pure: it reads the four collections, builds lookup indexes
/// once, and walks the order lines a single time. Iteration order never
/// affects the result. Integrity problems in the scoped data (a line
/// whose order is missing, an order with lines but no vendor, a vendor
/// without exactly one commission rate) fail the whole report instead of
/// skewing totals.
pub struct DailyAggregator;

impl DailyAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate the scoped collections for `date` into a report.
    ///
    /// `orders` are the orders created on `date`, `lines` all lines of those
    /// orders, `commissions` and `activations` the records effective on
    /// `date`. With no orders the canonical zero report comes back.
    pub fn aggregate(
        &self,
        date: NaiveDate,
        orders: &[Order],
        lines: &[OrderLine],
        commissions: &[VendorCommission],
        activations: &[ProductPromotion],
    ) -> Result<DailyReport> {
        let rates = Self::vendor_rates(date, commissions)?;
        let promoted = Self::active_promotions(activations);
        let orders_by_id: HashMap<i64, &Order> =
            orders.iter().map(|order| (order.id, order)).collect();

        let mut items: i64 = 0;
        let mut total_discount = Decimal::ZERO;
        let mut discount_rate_sum = Decimal::ZERO;
        let mut order_total_sum = Decimal::ZERO;
        let mut commission_sum = Decimal::ZERO;
        let mut promotion_totals: BTreeMap<i64, Decimal> = BTreeMap::new();

        for line in lines {
            let order = orders_by_id
                .get(&line.order_id)
                .ok_or(IntegrityError::UnknownOrder {
                    order_id: line.order_id,
                })?;
            let vendor_id = order.vendor_id.ok_or(IntegrityError::UnassignedVendor {
                order_id: order.id,
            })?;
            let rate = *rates
                .get(&vendor_id)
                .ok_or(IntegrityError::MissingCommission { vendor_id, date })?;

            items += line.quantity;
            total_discount += line.discount_amount();
            discount_rate_sum += line.discount_rate * Decimal::from(line.quantity);
            order_total_sum += line.total_amount;

            let commission = rate * line.total_amount;
            commission_sum += commission;

            if let Some(&promotion_id) = promoted.get(&line.product_id) {
                *promotion_totals.entry(promotion_id).or_insert(Decimal::ZERO) += commission;
            }
        }

        let order_count = orders.len() as i64;

        Ok(DailyReport {
            customers: Self::distinct_customers(orders),
            total_discount_amount: total_discount.normalize(),
            items,
            order_total_avg: safe_divide(order_total_sum, order_count).normalize(),
            discount_rate_avg: safe_divide(discount_rate_sum, items).normalize(),
            commissions: CommissionSummary {
                promotions: promotion_totals
                    .into_iter()
                    .map(|(id, total)| (id, total.normalize()))
                    .collect(),
                total: commission_sum.normalize(),
                order_average: safe_divide(commission_sum, order_count).normalize(),
            },
        })
    }

    /// Index commission rates by vendor, requiring exactly one row per vendor.
    fn vendor_rates(
        date: NaiveDate,
        commissions: &[VendorCommission],
    ) -> std::result::Result<HashMap<i64, Decimal>, IntegrityError> {
        let mut rates = HashMap::with_capacity(commissions.len());
        for commission in commissions {
            if rates.insert(commission.vendor_id, commission.rate).is_some() {
                let count = commissions
                    .iter()
                    .filter(|c| c.vendor_id == commission.vendor_id)
                    .count();
                return Err(IntegrityError::AmbiguousCommission {
                    vendor_id: commission.vendor_id,
                    date,
                    count,
                });
            }
        }
        Ok(rates)
    }

    /// Index activations by product. When a product has several activations
    /// on the same date, the lowest promotion id wins, independent of input
    /// order.
    fn active_promotions(activations: &[ProductPromotion]) -> HashMap<i64, i64> {
        let mut promoted: HashMap<i64, i64> = HashMap::new();
        for activation in activations {
            promoted
                .entry(activation.product_id)
                .and_modify(|id| *id = (*id).min(activation.promotion_id))
                .or_insert(activation.promotion_id);
        }
        promoted
    }

    /// Distinct customer values among the day's orders. Orders without a
    /// customer share the single `None` value, so they count once.
    fn distinct_customers(orders: &[Order]) -> usize {
        orders
            .iter()
            .map(|order| order.customer_id)
            .collect::<HashSet<_>>()
            .len()
    }
}

impl Default for DailyAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Division that yields zero for an empty denominator instead of failing.
/// Used for every averaged report field on days without orders or items.
fn safe_divide(numerator: Decimal, denominator: i64) -> Decimal {
    if denominator == 0 {
        Decimal::ZERO
    } else {
        numerator / Decimal::from(denominator)
    }
}
