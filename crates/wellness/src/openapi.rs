//! OpenAPI document for the HTTP surface.

use axum::response::Json;
use utoipa::OpenApi;

use crate::{handlers, models::Stats};

#[derive(OpenApi)]
#[openapi(
    info(title = "Wellness API", description = "Platform statistics and health endpoints"),
    paths(handlers::health_check, handlers::get_stats),
    components(schemas(Stats)),
    tags((name = "stats", description = "Health and platform statistics"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
