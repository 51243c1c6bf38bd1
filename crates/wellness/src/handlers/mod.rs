//! HTTP request handlers for the wellness API.

pub mod stats;

// Re-export handlers (including utoipa __path types for OpenAPI)
pub use stats::{__path_get_stats, __path_health_check, get_stats, health_check};

use crate::errors::AppError;

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
