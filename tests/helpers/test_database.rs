// Test Database Helpers
//
// Provides in-memory SQLite databases with the full schema applied.
// Each pool owns a private database, so tests never share state.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use shopmetrics::config::run_migrations;

/// Create an in-memory SQLite pool with all migrations applied
///
/// # Behavior
/// - Opens a fresh `sqlite::memory:` database
/// - Caps the pool at a single connection so the database is never dropped
///   between acquires (an in-memory database lives and dies with its
///   connection)
/// - Applies the embedded migrations
/// - Panics with a clear message if setup fails
pub async fn memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("In-memory SQLite URL should parse")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap_or_else(|e| panic!("Failed to open in-memory test database: {}", e));

    run_migrations(&pool)
        .await
        .unwrap_or_else(|e| panic!("Failed to migrate test database: {}", e));

    pool
}
