use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shopmetrics::config::{run_migrations, DatabaseConfig};
use shopmetrics::seeding::CsvSeeder;

/// Load the shop dataset from CSV exports into the reporting database.
#[derive(Parser)]
#[command(name = "seed", about = "Seed the ShopMetrics database from CSV files", version)]
struct Args {
    /// Directory containing the six CSV exports
    #[arg(long, default_value = "data/sample")]
    path: PathBuf,

    /// Database URL; overrides DATABASE_URL from the environment
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shopmetrics=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut db_config = DatabaseConfig::from_env().context("Failed to load database settings")?;
    if let Some(url) = args.database_url {
        db_config.url = url;
    }

    tracing::info!("Seeding database at {}", db_config.url);

    let pool = db_config
        .create_pool()
        .await
        .context("Failed to create database pool")?;
    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let seeder = CsvSeeder::new(pool);
    let summary = seeder
        .seed_dir(&args.path)
        .await
        .with_context(|| format!("Failed to seed from {}", args.path.display()))?;

    tracing::info!(
        products = summary.products,
        promotions = summary.promotions,
        activations = summary.activations,
        commissions = summary.commissions,
        orders = summary.orders,
        order_lines = summary.order_lines,
        "Seed complete"
    );

    Ok(())
}
