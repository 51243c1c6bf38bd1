use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::models::Entity;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to count {entity}: {source}")]
    StatsQuery {
        entity: Entity,
        #[source]
        source: sqlx::Error,
    },

    #[error("Not found")]
    NotFound,
}

impl AppError {
    /// Short, stable name of the error variant for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::StatsQuery { .. } => "stats_query",
            AppError::NotFound => "not_found",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::StatsQuery { entity, source } => {
                error!(%entity, "Stats query error: {source}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found"),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
