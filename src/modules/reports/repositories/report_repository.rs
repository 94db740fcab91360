use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::str::FromStr;

use crate::core::{AppError, Result};
use crate::modules::catalog::models::ProductPromotion;
use crate::modules::commissions::models::VendorCommission;
use crate::modules::orders::models::{Order, OrderLine};

/// Read-side queries that scope one calendar date's data for the report.
///
/// Collections come back unordered as far as callers are concerned; the
/// aggregation must not depend on row order.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Orders whose creation timestamp falls on the given date
    async fn orders_created_on(&self, date: NaiveDate) -> Result<Vec<Order>>;

    /// All lines belonging to the given orders; empty input yields empty output
    async fn order_lines_for_orders(&self, order_ids: &[i64]) -> Result<Vec<OrderLine>>;

    /// Commission rates effective on the given date
    async fn vendor_commissions_on(&self, date: NaiveDate) -> Result<Vec<VendorCommission>>;

    /// Promotion activations effective on the given date
    async fn promotion_activations_on(&self, date: NaiveDate) -> Result<Vec<ProductPromotion>>;
}

pub struct SqliteReportRepository {
    pool: SqlitePool,
}

impl SqliteReportRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for SqliteReportRepository {
    async fn orders_created_on(&self, date: NaiveDate) -> Result<Vec<Order>> {
        let rows: Vec<OrderRow> = sqlx::query_as(
            "SELECT id, created_at, vendor_id, customer_id
             FROM orders
             WHERE date(created_at) = ?
             ORDER BY id",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(OrderRow::into_order).collect())
    }

    async fn order_lines_for_orders(&self, order_ids: &[i64]) -> Result<Vec<OrderLine>> {
        if order_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = QueryBuilder::<Sqlite>::new(
            "SELECT id, order_id, product_id, product_description, product_price,
                    product_vat_rate, discount_rate, quantity, full_price_amount,
                    discounted_amount, vat_amount, total_amount
             FROM order_lines
             WHERE order_id IN (",
        );
        let mut ids = query.separated(", ");
        for order_id in order_ids {
            ids.push_bind(order_id);
        }
        ids.push_unseparated(") ORDER BY id");

        let rows: Vec<OrderLineRow> = query.build_query_as().fetch_all(&self.pool).await?;

        rows.into_iter().map(OrderLineRow::into_order_line).collect()
    }

    async fn vendor_commissions_on(&self, date: NaiveDate) -> Result<Vec<VendorCommission>> {
        let rows: Vec<VendorCommissionRow> = sqlx::query_as(
            "SELECT id, date, vendor_id, rate
             FROM vendor_commissions
             WHERE date = ?
             ORDER BY id",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(VendorCommissionRow::into_commission)
            .collect()
    }

    async fn promotion_activations_on(&self, date: NaiveDate) -> Result<Vec<ProductPromotion>> {
        let rows: Vec<ProductPromotionRow> = sqlx::query_as(
            "SELECT id, date, product_id, promotion_id
             FROM product_promotions
             WHERE date = ?
             ORDER BY id",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(ProductPromotionRow::into_activation)
            .collect())
    }
}

// Helper structs for database mapping. Monetary columns are TEXT in SQLite
// and parsed into Decimal here, at the storage boundary.

#[derive(Debug, FromRow)]
struct OrderRow {
    id: i64,
    created_at: NaiveDateTime,
    vendor_id: Option<i64>,
    customer_id: Option<i64>,
}

impl OrderRow {
    fn into_order(self) -> Order {
        Order {
            id: self.id,
            created_at: self.created_at,
            vendor_id: self.vendor_id,
            customer_id: self.customer_id,
        }
    }
}

#[derive(Debug, FromRow)]
struct OrderLineRow {
    id: i64,
    order_id: i64,
    product_id: i64,
    product_description: String,
    product_price: String,
    product_vat_rate: String,
    discount_rate: String,
    quantity: i64,
    full_price_amount: String,
    discounted_amount: String,
    vat_amount: String,
    total_amount: String,
}

impl OrderLineRow {
    fn into_order_line(self) -> Result<OrderLine> {
        Ok(OrderLine {
            id: self.id,
            order_id: self.order_id,
            product_id: self.product_id,
            product_description: self.product_description,
            product_price: parse_decimal("product_price", &self.product_price)?,
            product_vat_rate: parse_decimal("product_vat_rate", &self.product_vat_rate)?,
            discount_rate: parse_decimal("discount_rate", &self.discount_rate)?,
            quantity: self.quantity,
            full_price_amount: parse_decimal("full_price_amount", &self.full_price_amount)?,
            discounted_amount: parse_decimal("discounted_amount", &self.discounted_amount)?,
            vat_amount: parse_decimal("vat_amount", &self.vat_amount)?,
            total_amount: parse_decimal("total_amount", &self.total_amount)?,
        })
    }
}

#[derive(Debug, FromRow)]
struct VendorCommissionRow {
    id: i64,
    date: NaiveDate,
    vendor_id: i64,
    rate: String,
}

impl VendorCommissionRow {
    fn into_commission(self) -> Result<VendorCommission> {
        Ok(VendorCommission {
            id: self.id,
            date: self.date,
            vendor_id: self.vendor_id,
            rate: parse_decimal("rate", &self.rate)?,
        })
    }
}

#[derive(Debug, FromRow)]
struct ProductPromotionRow {
    id: i64,
    date: NaiveDate,
    product_id: i64,
    promotion_id: i64,
}

impl ProductPromotionRow {
    fn into_activation(self) -> ProductPromotion {
        ProductPromotion {
            id: self.id,
            date: self.date,
            product_id: self.product_id,
            promotion_id: self.promotion_id,
        }
    }
}

fn parse_decimal(column: &str, raw: &str) -> Result<Decimal> {
    Decimal::from_str(raw)
        .map_err(|e| AppError::Internal(format!("Invalid decimal in column '{}': {}", column, e)))
}
