pub mod config;
pub mod database;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod request_id;
pub mod stats_service;

use std::sync::Arc;

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::get,
};
use sqlx::{PgPool, migrate::Migrator};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

use crate::{
    config::StatsConfig,
    database::{Database, EntityCounter},
    handlers::{get_stats, health_check, not_found},
    openapi::openapi_json,
    request_id::request_id_middleware,
};

/// Schema migrations for every table the API reads.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Counter shared by all request handlers.
pub type SharedCounter = Arc<dyn EntityCounter>;

pub fn create_router(counter: SharedCounter, stats_config: StatsConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/stats", get(get_stats))
        .route("/api-docs/openapi.json", get(openapi_json))
        .fallback(not_found)
        .layer(Extension(counter))
        .layer(Extension(stats_config))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(CompressionLayer::new())
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
}

pub async fn run_server(pool: PgPool, stats_config: StatsConfig, port: u16) -> anyhow::Result<()> {
    let counter: SharedCounter = Arc::new(Database::new(pool));
    let app = create_router(counter, stats_config);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    tracing::info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
