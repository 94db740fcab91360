use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product entry within an order.
///
/// Carries its own price, discount and VAT snapshot, taken when the order
/// was placed; the current product record is never consulted again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: i64,

    pub order_id: i64,

    pub product_id: i64,

    /// Product description at time of sale
    pub product_description: String,

    /// Unit price at time of sale
    pub product_price: Decimal,

    /// VAT rate of the product at time of sale
    pub product_vat_rate: Decimal,

    /// Discount applied to this line, as a fraction of full price
    pub discount_rate: Decimal,

    pub quantity: i64,

    /// quantity × unit price before discount
    pub full_price_amount: Decimal,

    /// Full price after the discount rate was applied
    pub discounted_amount: Decimal,

    /// VAT charged on the discounted amount
    pub vat_amount: Decimal,

    /// Discounted amount plus VAT; the line's final price
    pub total_amount: Decimal,
}

impl OrderLine {
    /// Absolute discount granted on this line
    pub fn discount_amount(&self) -> Decimal {
        self.full_price_amount - self.discounted_amount
    }
}
