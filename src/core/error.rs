use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use chrono::NaiveDate;
use std::time::Duration;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Violations of the "scoped data is internally consistent" invariant.
///
/// These are raised while the aggregation indexes are built or while order
/// lines are folded. They mean the stored data is wrong for the requested
/// date, so the whole report fails rather than misstating totals.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    /// An order line references an order that is not in the scoped set
    #[error("Order line references unknown order {order_id}")]
    UnknownOrder { order_id: i64 },

    /// An order has lines but no vendor to attribute commission to
    #[error("Order {order_id} has order lines but no vendor assigned")]
    UnassignedVendor { order_id: i64 },

    /// No commission rate on record for a vendor on the report date
    #[error("No commission rate for vendor {vendor_id} on {date}")]
    MissingCommission { vendor_id: i64, date: NaiveDate },

    /// More than one commission rate on record for a vendor on the report date
    #[error("Found {count} commission rates for vendor {vendor_id} on {date}")]
    AmbiguousCommission {
        vendor_id: i64,
        date: NaiveDate,
        count: usize,
    },
}

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Report date string does not parse as a calendar date
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Stored data violates a report invariant; not retryable
    #[error("Data integrity error: {0}")]
    DataIntegrity(#[from] IntegrityError),

    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Report generation exceeded its time budget
    #[error("Report generation timed out after {0:?}")]
    Timeout(Duration),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// CSV reading/parsing errors during bulk load
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Semantic errors in seed data (bad timestamps, unknown files)
    #[error("Seed data error: {0}")]
    Seed(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidDate(_) => StatusCode::BAD_REQUEST,
            AppError::DataIntegrity(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Database(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Timeout(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Csv(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Seed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl AppError {
    /// Whether a caller may hope for a different outcome on retry.
    ///
    /// Store failures and timeouts are transient; integrity violations and
    /// input errors are permanent until the data or the request changes.
    pub fn is_transient(&self) -> bool {
        matches!(self, AppError::Database(_) | AppError::Timeout(_))
    }

    pub fn invalid_date(raw: impl Into<String>) -> Self {
        AppError::InvalidDate(raw.into())
    }

    pub fn seed(msg: impl Into<String>) -> Self {
        AppError::Seed(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
