use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::config::ReportSettings;
use crate::core::{AppError, Result};
use crate::modules::reports::repositories::SqliteReportRepository;
use crate::modules::reports::services::ReportService;

/// GET /reports/daily/{date}
///
/// Returns the order report for one calendar date. The date must be
/// `YYYY-MM-DD`; anything else is a client error, not a missing route.
pub async fn get_daily_report(
    pool: web::Data<SqlitePool>,
    settings: web::Data<ReportSettings>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let raw = path.into_inner();
    let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|_| AppError::invalid_date(raw))?;

    let repository = Arc::new(SqliteReportRepository::new(pool.get_ref().clone()));
    let service = ReportService::with_timeout(repository, settings.timeout);

    let report = service.daily_report(date).await?;

    Ok(HttpResponse::Ok().json(report))
}

/// Configure routes for the reports module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/reports").route("/daily/{date}", web::get().to(get_daily_report)));
}
