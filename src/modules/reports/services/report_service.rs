use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::core::{AppError, Result};
use crate::modules::reports::models::DailyReport;
use crate::modules::reports::repositories::ReportRepository;
use crate::modules::reports::services::DailyAggregator;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Service producing the daily order report.
///
/// Loads the date-scoped collections through the repository, then hands
/// them to the aggregator. The combined load + fold is bounded by a
/// timeout so a stalled store cannot pin the request forever.
pub struct ReportService {
    repository: Arc<dyn ReportRepository>,
    timeout: Duration,
}

impl ReportService {
    pub fn new(repository: Arc<dyn ReportRepository>) -> Self {
        Self::with_timeout(repository, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(repository: Arc<dyn ReportRepository>, timeout: Duration) -> Self {
        Self {
            repository,
            timeout,
        }
    }

    /// Generate the report for one calendar date.
    ///
    /// # Errors
    /// `AppError::Timeout` when the time budget is exhausted,
    /// `AppError::DataIntegrity` when the scoped data breaks a report
    /// invariant, `AppError::Database` when the store fails.
    pub async fn daily_report(&self, date: NaiveDate) -> Result<DailyReport> {
        match tokio::time::timeout(self.timeout, self.build_report(date)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(%date, timeout = ?self.timeout, "Report generation timed out");
                Err(AppError::Timeout(self.timeout))
            }
        }
    }

    async fn build_report(&self, date: NaiveDate) -> Result<DailyReport> {
        let orders = self.repository.orders_created_on(date).await?;
        let order_ids: Vec<i64> = orders.iter().map(|order| order.id).collect();
        let lines = self.repository.order_lines_for_orders(&order_ids).await?;
        let commissions = self.repository.vendor_commissions_on(date).await?;
        let activations = self.repository.promotion_activations_on(date).await?;

        info!(
            %date,
            orders = orders.len(),
            lines = lines.len(),
            commissions = commissions.len(),
            activations = activations.len(),
            "Scoped data loaded"
        );

        let report =
            DailyAggregator::new().aggregate(date, &orders, &lines, &commissions, &activations)?;

        if report.is_empty() {
            info!(%date, "No order activity, returning zero report");
        }

        Ok(report)
    }
}
