//! Health check and platform statistics handlers.

use axum::{Extension, http::StatusCode, response::Json};
use tracing::error;

use crate::{
    SharedCounter, config::StatsConfig, errors::AppError, models::Stats,
    stats_service::collect_stats,
};

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "stats",
    responses(
        (status = 200, description = "Health check passed")
    )
)]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Get platform-wide statistics (users, doctors, reminders, emergency contacts).
///
/// When the counts cannot be computed the fixed fallback payload is served
/// with 200, unless the deployment turned `fallback_on_error` off.
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Platform statistics (live or fallback)", body = Stats),
        (status = 500, description = "Counts unavailable and fallback disabled")
    )
)]
pub async fn get_stats(
    Extension(counter): Extension<SharedCounter>,
    Extension(config): Extension<StatsConfig>,
) -> Result<Json<Stats>, AppError> {
    match collect_stats(&*counter, &config).await {
        Ok(stats) => Ok(Json(stats)),
        Err(e) if config.fallback_on_error => {
            error!(kind = e.kind(), "Error fetching statistics: {e}");
            Ok(Json(Stats::FALLBACK))
        }
        Err(e) => Err(e),
    }
}
