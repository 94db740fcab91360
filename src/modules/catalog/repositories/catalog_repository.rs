use sqlx::SqlitePool;

use crate::core::Result;
use crate::modules::catalog::models::{Product, ProductPromotion, Promotion};

/// Write-side repository for the product catalog and promotion calendar
pub struct CatalogRepository {
    pool: SqlitePool,
}

impl CatalogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert_product(&self, product: &Product) -> Result<()> {
        sqlx::query("INSERT INTO products (id, description) VALUES (?, ?)")
            .bind(product.id)
            .bind(&product.description)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn insert_promotion(&self, promotion: &Promotion) -> Result<()> {
        sqlx::query("INSERT INTO promotions (id, description) VALUES (?, ?)")
            .bind(promotion.id)
            .bind(&promotion.description)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn insert_activation(&self, activation: &ProductPromotion) -> Result<()> {
        sqlx::query(
            "INSERT INTO product_promotions (id, date, product_id, promotion_id) VALUES (?, ?, ?, ?)",
        )
        .bind(activation.id)
        .bind(activation.date)
        .bind(activation.product_id)
        .bind(activation.promotion_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn count_products(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn count_promotions(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM promotions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn count_activations(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM product_promotions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
