use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use crate::database::Store;

/// Liveness plus a round-trip to the store
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    /// `healthy`, or `degraded` when the store does not answer
    pub status: String,
    /// `up` or `down`
    pub database: String,
    pub version: String,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service and database are up", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(db: web::Data<dyn Store>) -> HttpResponse {
    let database_up = match db.ping().await {
        Ok(()) => true,
        Err(e) => {
            log::warn!("⚠️  Health check: database unreachable: {}", e);
            false
        }
    };

    let body = HealthResponse {
        status: if database_up { "healthy" } else { "degraded" }.to_string(),
        database: if database_up { "up" } else { "down" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    };

    if database_up {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
