// Integration tests for daily report generation at the service level
//
// Drives ReportService against an in-memory store that mirrors the
// date-scoping the SQL queries perform. Covers the canonical report, the
// zero report, the error taxonomy (permanent integrity failures versus
// transient store failures and timeouts), determinism, and the promotion
// tie-break.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use std::sync::Arc;
use std::time::Duration;

use shopmetrics::core::{AppError, IntegrityError, Result};
use shopmetrics::modules::catalog::models::ProductPromotion;
use shopmetrics::modules::commissions::models::VendorCommission;
use shopmetrics::modules::orders::models::{Order, OrderLine};
use shopmetrics::modules::reports::models::DailyReport;
use shopmetrics::modules::reports::repositories::ReportRepository;
use shopmetrics::modules::reports::services::ReportService;

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::fixtures::{
    broken_commission_date, day_activations, day_commissions, day_lines, day_orders,
    expected_report_json, report_date,
};

/// In-memory store mirroring the date-scoping the SQL queries perform
#[derive(Default)]
struct InMemoryShop {
    orders: Vec<Order>,
    lines: Vec<OrderLine>,
    commissions: Vec<VendorCommission>,
    activations: Vec<ProductPromotion>,
}

#[async_trait]
impl ReportRepository for InMemoryShop {
    async fn orders_created_on(&self, date: NaiveDate) -> Result<Vec<Order>> {
        Ok(self
            .orders
            .iter()
            .filter(|order| order.created_on(date))
            .cloned()
            .collect())
    }

    async fn order_lines_for_orders(&self, order_ids: &[i64]) -> Result<Vec<OrderLine>> {
        Ok(self
            .lines
            .iter()
            .filter(|line| order_ids.contains(&line.order_id))
            .cloned()
            .collect())
    }

    async fn vendor_commissions_on(&self, date: NaiveDate) -> Result<Vec<VendorCommission>> {
        Ok(self
            .commissions
            .iter()
            .filter(|commission| commission.date == date)
            .cloned()
            .collect())
    }

    async fn promotion_activations_on(&self, date: NaiveDate) -> Result<Vec<ProductPromotion>> {
        Ok(self
            .activations
            .iter()
            .filter(|activation| activation.date == date)
            .cloned()
            .collect())
    }
}

/// Store that never answers within a request's patience
struct StalledShop;

#[async_trait]
impl ReportRepository for StalledShop {
    async fn orders_created_on(&self, _date: NaiveDate) -> Result<Vec<Order>> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(Vec::new())
    }

    async fn order_lines_for_orders(&self, _order_ids: &[i64]) -> Result<Vec<OrderLine>> {
        Ok(Vec::new())
    }

    async fn vendor_commissions_on(&self, _date: NaiveDate) -> Result<Vec<VendorCommission>> {
        Ok(Vec::new())
    }

    async fn promotion_activations_on(&self, _date: NaiveDate) -> Result<Vec<ProductPromotion>> {
        Ok(Vec::new())
    }
}

/// Store whose every query fails as a closed pool
struct BrokenShop;

#[async_trait]
impl ReportRepository for BrokenShop {
    async fn orders_created_on(&self, _date: NaiveDate) -> Result<Vec<Order>> {
        Err(AppError::Database(sqlx::Error::PoolClosed))
    }

    async fn order_lines_for_orders(&self, _order_ids: &[i64]) -> Result<Vec<OrderLine>> {
        Err(AppError::Database(sqlx::Error::PoolClosed))
    }

    async fn vendor_commissions_on(&self, _date: NaiveDate) -> Result<Vec<VendorCommission>> {
        Err(AppError::Database(sqlx::Error::PoolClosed))
    }

    async fn promotion_activations_on(&self, _date: NaiveDate) -> Result<Vec<ProductPromotion>> {
        Err(AppError::Database(sqlx::Error::PoolClosed))
    }
}

/// The full sample shop, including the 2019-08-02 order whose vendor has
/// no commission entry for that day
fn sample_shop() -> InMemoryShop {
    let mut orders = day_orders();
    orders.push(Order {
        id: 4,
        created_at: NaiveDate::from_ymd_opt(2019, 8, 2)
            .unwrap()
            .and_hms_opt(13, 21, 1)
            .unwrap(),
        vendor_id: Some(2),
        customer_id: None,
    });

    let mut lines = day_lines();
    lines.push(OrderLine {
        id: 4,
        order_id: 4,
        product_id: 3,
        product_description: "Plant pot".to_string(),
        product_price: dec!(100),
        product_vat_rate: dec!(0.1),
        discount_rate: dec!(0.05),
        quantity: 7,
        full_price_amount: dec!(700),
        discounted_amount: dec!(665),
        vat_amount: dec!(66.5),
        total_amount: dec!(731.5),
    });

    InMemoryShop {
        orders,
        lines,
        commissions: day_commissions(),
        activations: day_activations(),
    }
}

#[tokio::test]
async fn sample_day_produces_the_canonical_report() {
    let service = ReportService::new(Arc::new(sample_shop()));

    let report = service.daily_report(report_date()).await.unwrap();

    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        expected_report_json()
    );
}

#[tokio::test]
async fn quiet_days_yield_the_zero_report() {
    let service = ReportService::new(Arc::new(sample_shop()));
    let quiet_day = NaiveDate::from_ymd_opt(2019, 7, 1).unwrap();

    let report = service.daily_report(quiet_day).await.unwrap();

    assert!(report.is_empty());
    assert_eq!(report, DailyReport::empty());
}

#[tokio::test]
async fn reports_are_deterministic_across_runs() {
    let service = ReportService::new(Arc::new(sample_shop()));

    let first = service.daily_report(report_date()).await.unwrap();
    let second = service.daily_report(report_date()).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn missing_commission_entry_is_a_permanent_failure() {
    let service = ReportService::new(Arc::new(sample_shop()));

    let err = service
        .daily_report(broken_commission_date())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::DataIntegrity(IntegrityError::MissingCommission { vendor_id: 2, .. })
    ));
    assert!(!err.is_transient());
}

#[tokio::test]
async fn orders_without_customers_share_one_bucket() {
    let mut shop = sample_shop();
    // Two more line-less orders with no customer on the report date
    for id in [10, 11] {
        shop.orders.push(Order {
            id,
            created_at: report_date().and_hms_opt(18, 0, 0).unwrap(),
            vendor_id: Some(1),
            customer_id: None,
        });
    }

    let service = ReportService::new(Arc::new(shop));
    let report = service.daily_report(report_date()).await.unwrap();

    // Customers 1 and 2 plus the single "unknown" bucket
    assert_eq!(report.customers, 3);
    // The two extra orders dilute the averages
    assert_eq!(report.order_total_avg, dec!(546));
    assert_eq!(report.commissions.order_average, dec!(273));
}

#[tokio::test]
async fn concurrent_activations_resolve_to_the_lowest_promotion_id() {
    let mut shop = sample_shop();
    // Product 1 gains a second activation with a higher promotion id; the
    // existing promotion 1 must keep the bucket
    shop.activations.push(ProductPromotion {
        id: 9,
        date: report_date(),
        product_id: 1,
        promotion_id: 3,
    });

    let service = ReportService::new(Arc::new(shop));
    let report = service.daily_report(report_date()).await.unwrap();

    assert!(report.commissions.promotions.contains_key(&1));
    assert!(!report.commissions.promotions.contains_key(&3));
}

#[tokio::test]
async fn stalled_stores_trip_the_timeout() {
    let service = ReportService::with_timeout(Arc::new(StalledShop), Duration::from_millis(20));

    let err = service.daily_report(report_date()).await.unwrap_err();

    assert!(matches!(err, AppError::Timeout(_)));
    assert!(err.is_transient());
}

#[tokio::test]
async fn store_failures_surface_as_transient_errors() {
    let service = ReportService::new(Arc::new(BrokenShop));

    let err = service.daily_report(report_date()).await.unwrap_err();

    assert!(matches!(err, AppError::Database(_)));
    assert!(err.is_transient());
}
