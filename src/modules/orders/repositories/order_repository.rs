use sqlx::SqlitePool;

use crate::core::Result;
use crate::modules::orders::models::{Order, OrderLine};

/// Write-side repository for orders, used by the bulk loader
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert_order(&self, order: &Order) -> Result<()> {
        sqlx::query("INSERT INTO orders (id, created_at, vendor_id, customer_id) VALUES (?, ?, ?, ?)")
            .bind(order.id)
            .bind(order.created_at)
            .bind(order.vendor_id)
            .bind(order.customer_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn insert_line(&self, line: &OrderLine) -> Result<()> {
        sqlx::query(
            "INSERT INTO order_lines (
                id, order_id, product_id, product_description, product_price,
                product_vat_rate, discount_rate, quantity, full_price_amount,
                discounted_amount, vat_amount, total_amount
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(line.id)
        .bind(line.order_id)
        .bind(line.product_id)
        .bind(&line.product_description)
        .bind(line.product_price.to_string())
        .bind(line.product_vat_rate.to_string())
        .bind(line.discount_rate.to_string())
        .bind(line.quantity)
        .bind(line.full_price_amount.to_string())
        .bind(line.discounted_amount.to_string())
        .bind(line.vat_amount.to_string())
        .bind(line.total_amount.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn count_orders(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn count_lines(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM order_lines")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
