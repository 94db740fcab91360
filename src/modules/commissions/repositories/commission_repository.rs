use sqlx::SqlitePool;

use crate::core::Result;
use crate::modules::commissions::models::VendorCommission;

/// Write-side repository for the vendor commission schedule
pub struct CommissionRepository {
    pool: SqlitePool,
}

impl CommissionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, commission: &VendorCommission) -> Result<()> {
        sqlx::query("INSERT INTO vendor_commissions (id, date, vendor_id, rate) VALUES (?, ?, ?, ?)")
            .bind(commission.id)
            .bind(commission.date)
            .bind(commission.vendor_id)
            .bind(commission.rate.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM vendor_commissions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
