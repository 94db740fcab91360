// Test Fixtures
//
// The sample shop dataset shared by the report test suites. Three orders
// fall on 2019-08-01 and produce the canonical report asserted by
// `expected_report_json`; a fourth order on 2019-08-02 belongs to a vendor
// with no commission entry for that day, so reporting on 2019-08-02 must
// fail the integrity checks.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal_macros::dec;
use serde_json::json;
use sqlx::SqlitePool;

use shopmetrics::modules::catalog::models::{Product, ProductPromotion, Promotion};
use shopmetrics::modules::catalog::repositories::CatalogRepository;
use shopmetrics::modules::commissions::models::VendorCommission;
use shopmetrics::modules::commissions::repositories::CommissionRepository;
use shopmetrics::modules::orders::models::{Order, OrderLine};
use shopmetrics::modules::orders::repositories::OrderRepository;

/// The day the canonical report covers
pub fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 8, 1).unwrap()
}

/// The day whose only order belongs to a vendor without a commission entry
pub fn broken_commission_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 8, 2).unwrap()
}

fn timestamp(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").unwrap()
}

/// Orders placed on the report date
pub fn day_orders() -> Vec<Order> {
    vec![
        Order {
            id: 1,
            created_at: timestamp("2019-08-01 09:12:41"),
            vendor_id: Some(1),
            customer_id: Some(1),
        },
        Order {
            id: 2,
            created_at: timestamp("2019-08-01 11:30:05"),
            vendor_id: Some(2),
            customer_id: Some(1),
        },
        Order {
            id: 3,
            created_at: timestamp("2019-08-01 16:47:32"),
            vendor_id: Some(1),
            customer_id: Some(2),
        },
    ]
}

/// Order lines belonging to the report date's orders
pub fn day_lines() -> Vec<OrderLine> {
    vec![
        OrderLine {
            id: 1,
            order_id: 1,
            product_id: 1,
            product_description: "Garden chair".to_string(),
            product_price: dec!(100),
            product_vat_rate: dec!(0.25),
            discount_rate: dec!(0.12),
            quantity: 5,
            full_price_amount: dec!(500),
            discounted_amount: dec!(440),
            vat_amount: dec!(110),
            total_amount: dec!(550),
        },
        OrderLine {
            id: 2,
            order_id: 2,
            product_id: 2,
            product_description: "Watering can".to_string(),
            product_price: dec!(100),
            product_vat_rate: dec!(0.125),
            discount_rate: dec!(0.04),
            quantity: 10,
            full_price_amount: dec!(1000),
            discounted_amount: dec!(960),
            vat_amount: dec!(120),
            total_amount: dec!(1080),
        },
        OrderLine {
            id: 3,
            order_id: 3,
            product_id: 3,
            product_description: "Plant pot".to_string(),
            product_price: dec!(100),
            product_vat_rate: dec!(0.1),
            discount_rate: dec!(0),
            quantity: 10,
            full_price_amount: dec!(1000),
            discounted_amount: dec!(1000),
            vat_amount: dec!(100),
            total_amount: dec!(1100),
        },
    ]
}

/// Commission rates in force on the report date
pub fn day_commissions() -> Vec<VendorCommission> {
    vec![
        VendorCommission {
            id: 1,
            date: report_date(),
            vendor_id: 1,
            rate: dec!(0.5),
        },
        VendorCommission {
            id: 2,
            date: report_date(),
            vendor_id: 2,
            rate: dec!(0.5),
        },
    ]
}

/// Promotion activations in force on the report date
pub fn day_activations() -> Vec<ProductPromotion> {
    vec![
        ProductPromotion {
            id: 1,
            date: report_date(),
            product_id: 1,
            promotion_id: 1,
        },
        ProductPromotion {
            id: 2,
            date: report_date(),
            product_id: 2,
            promotion_id: 2,
        },
    ]
}

/// Seed the full sample shop into the given database
///
/// Inserts 3 products, 3 promotions, 2 activations, 2 commission entries,
/// 4 orders and 4 order lines. The extra order sits on 2019-08-02 with no
/// customer and no matching commission entry.
pub async fn seed_sample_shop(pool: &SqlitePool) {
    let catalog = CatalogRepository::new(pool.clone());
    let commissions = CommissionRepository::new(pool.clone());
    let orders = OrderRepository::new(pool.clone());

    for (id, description) in [(1, "Garden chair"), (2, "Watering can"), (3, "Plant pot")] {
        catalog
            .insert_product(&Product {
                id,
                description: Some(description.to_string()),
            })
            .await
            .expect("product insert should succeed");
    }

    for (id, description) in [(1, "Summer bundle"), (2, "Clearance"), (3, "Loyalty bonus")] {
        catalog
            .insert_promotion(&Promotion {
                id,
                description: Some(description.to_string()),
            })
            .await
            .expect("promotion insert should succeed");
    }

    for activation in day_activations() {
        catalog
            .insert_activation(&activation)
            .await
            .expect("activation insert should succeed");
    }

    for commission in day_commissions() {
        commissions
            .insert(&commission)
            .await
            .expect("commission insert should succeed");
    }

    for order in day_orders() {
        orders
            .insert_order(&order)
            .await
            .expect("order insert should succeed");
    }
    orders
        .insert_order(&Order {
            id: 4,
            created_at: timestamp("2019-08-02 13:21:01"),
            vendor_id: Some(2),
            customer_id: None,
        })
        .await
        .expect("order insert should succeed");

    for line in day_lines() {
        orders
            .insert_line(&line)
            .await
            .expect("order line insert should succeed");
    }
    orders
        .insert_line(&OrderLine {
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
        })
        .await
        .expect("order line insert should succeed");
}

/// The report body expected for the report date
///
/// Worked out by hand from the sample dataset: three orders totalling 2730
/// across 25 items, 100 in discounts, a 0.5 commission rate for both
/// vendors, and promotions active for products 1 and 2.
pub fn expected_report_json() -> serde_json::Value {
    json!({
        "customers": 2,
        "total_discount_amount": 100,
        "items": 25,
        "order_total_avg": 910,
        "discount_rate_avg": 0.04,
        "commissions": {
            "promotions": {
                "1": 275,
                "2": 540
            },
            "total": 1365,
            "order_average": 455
        }
    })
}

/// The report body expected for a day with no orders
pub fn empty_report_json() -> serde_json::Value {
    json!({
        "customers": 0,
        "total_discount_amount": 0,
        "items": 0,
        "order_total_avg": 0,
        "discount_rate_avg": 0,
        "commissions": {
            "promotions": {},
            "total": 0,
            "order_average": 0
        }
    })
}
