use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::catalog::models::{Product, ProductPromotion, Promotion};
use crate::modules::catalog::repositories::CatalogRepository;
use crate::modules::commissions::models::VendorCommission;
use crate::modules::commissions::repositories::CommissionRepository;
use crate::modules::orders::models::{Order, OrderLine};
use crate::modules::orders::repositories::OrderRepository;

/// Bulk loader that seeds the store from a directory of CSV exports.
///
/// Expects six files named `products.csv`, `promotions.csv`,
/// `product_promotions.csv`, `commissions.csv`, `orders.csv` and
/// `order_lines.csv`; they are loaded in that order so foreign keys
/// resolve. Timestamps are `YYYY-MM-DD HH:MM:SS`, dates `YYYY-MM-DD`.
pub struct CsvSeeder {
    catalog: CatalogRepository,
    commissions: CommissionRepository,
    orders: OrderRepository,
}

/// Row counts inserted by one seeding run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub products: u64,
    pub promotions: u64,
    pub activations: u64,
    pub commissions: u64,
    pub orders: u64,
    pub order_lines: u64,
}

impl SeedSummary {
    pub fn total(&self) -> u64 {
        self.products
            + self.promotions
            + self.activations
            + self.commissions
            + self.orders
            + self.order_lines
    }
}

impl CsvSeeder {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            catalog: CatalogRepository::new(pool.clone()),
            commissions: CommissionRepository::new(pool.clone()),
            orders: OrderRepository::new(pool),
        }
    }

    /// Load all six CSV files from `dir` into the store.
    pub async fn seed_dir(&self, dir: &Path) -> Result<SeedSummary> {
        let mut summary = SeedSummary::default();

        self.load_products(&dir.join("products.csv"), &mut summary)
            .await?;
        self.load_promotions(&dir.join("promotions.csv"), &mut summary)
            .await?;
        self.load_activations(&dir.join("product_promotions.csv"), &mut summary)
            .await?;
        self.load_commissions(&dir.join("commissions.csv"), &mut summary)
            .await?;
        self.load_orders(&dir.join("orders.csv"), &mut summary)
            .await?;
        self.load_order_lines(&dir.join("order_lines.csv"), &mut summary)
            .await?;

        info!(rows = summary.total(), "Seeding finished");
        Ok(summary)
    }

    async fn load_products(&self, path: &Path, summary: &mut SeedSummary) -> Result<()> {
        let mut reader = csv::Reader::from_path(path)?;
        for record in reader.deserialize() {
            let record: ProductRecord = record?;
            self.catalog
                .insert_product(&Product {
                    id: record.id,
                    description: record.description,
                })
                .await?;
            summary.products += 1;
        }
        Ok(())
    }

    async fn load_promotions(&self, path: &Path, summary: &mut SeedSummary) -> Result<()> {
        let mut reader = csv::Reader::from_path(path)?;
        for record in reader.deserialize() {
            let record: PromotionRecord = record?;
            self.catalog
                .insert_promotion(&Promotion {
                    id: record.id,
                    description: record.description,
                })
                .await?;
            summary.promotions += 1;
        }
        Ok(())
    }

    async fn load_activations(&self, path: &Path, summary: &mut SeedSummary) -> Result<()> {
        let mut reader = csv::Reader::from_path(path)?;
        for record in reader.deserialize() {
            let record: ActivationRecord = record?;
            self.catalog
                .insert_activation(&ProductPromotion {
                    id: record.id,
                    date: record.date,
                    product_id: record.product_id,
                    promotion_id: record.promotion_id,
                })
                .await?;
            summary.activations += 1;
        }
        Ok(())
    }

    async fn load_commissions(&self, path: &Path, summary: &mut SeedSummary) -> Result<()> {
        let mut reader = csv::Reader::from_path(path)?;
        for record in reader.deserialize() {
            let record: CommissionRecord = record?;
            self.commissions
                .insert(&VendorCommission {
                    id: record.id,
                    date: record.date,
                    vendor_id: record.vendor_id,
                    rate: record.rate,
                })
                .await?;
            summary.commissions += 1;
        }
        Ok(())
    }

    async fn load_orders(&self, path: &Path, summary: &mut SeedSummary) -> Result<()> {
        let mut reader = csv::Reader::from_path(path)?;
        for record in reader.deserialize() {
            let record: OrderRecord = record?;
            self.orders
                .insert_order(&Order {
                    id: record.id,
                    created_at: parse_timestamp(&record.created_at)?,
                    vendor_id: record.vendor_id,
                    customer_id: record.customer_id,
                })
                .await?;
            summary.orders += 1;
        }
        Ok(())
    }

    async fn load_order_lines(&self, path: &Path, summary: &mut SeedSummary) -> Result<()> {
        let mut reader = csv::Reader::from_path(path)?;
        for record in reader.deserialize() {
            let record: OrderLineRecord = record?;
            self.orders
                .insert_line(&OrderLine {
                    id: record.id,
                    order_id: record.order_id,
                    product_id: record.product_id,
                    product_description: record.product_description,
                    product_price: record.product_price,
                    product_vat_rate: record.product_vat_rate,
                    discount_rate: record.discount_rate,
                    quantity: record.quantity,
                    full_price_amount: record.full_price_amount,
                    discounted_amount: record.discounted_amount,
                    vat_amount: record.vat_amount,
                    total_amount: record.total_amount,
                })
                .await?;
            summary.order_lines += 1;
        }
        Ok(())
    }
}

// CSV record shapes; headers match the file columns one to one.

#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: i64,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PromotionRecord {
    id: i64,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ActivationRecord {
    id: i64,
    date: NaiveDate,
    product_id: i64,
    promotion_id: i64,
}

#[derive(Debug, Deserialize)]
struct CommissionRecord {
    id: i64,
    date: NaiveDate,
    vendor_id: i64,
    rate: Decimal,
}

#[derive(Debug, Deserialize)]
struct OrderRecord {
    id: i64,
    created_at: String,
    vendor_id: Option<i64>,
    customer_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct OrderLineRecord {
    id: i64,
    order_id: i64,
    product_id: i64,
    product_description: String,
    product_price: Decimal,
    product_vat_rate: Decimal,
    discount_rate: Decimal,
    quantity: i64,
    full_price_amount: Decimal,
    discounted_amount: Decimal,
    vat_amount: Decimal,
    total_amount: Decimal,
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map_err(|_| {
        AppError::seed(format!(
            "Invalid timestamp '{}': expected YYYY-MM-DD HH:MM:SS",
            raw
        ))
    })
}
