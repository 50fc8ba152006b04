pub mod health;
pub mod drugs;
pub mod interactions;
pub mod users;
pub mod metrics;
pub mod swagger;

use actix_web::{error::InternalError, web, ResponseError};
use crate::utils::AppError;

/// Route table shared by the server and the route tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        // Health check
        .route("/health", web::get().to(health::health_check))
        // Metrics
        .route("/metrics", web::get().to(metrics::get_metrics))
        // Users
        .route("/register", web::post().to(users::register))
        // Drugs: catalog (READ ONLY)
        .service(
            web::scope("/api/drugs")
                .route("", web::get().to(drugs::get_drugs))
                .route("/{name}", web::get().to(drugs::get_drug))
        )
        .route("/check-drugs", web::post().to(drugs::check_drugs))
        // Interactions
        .route("/check-interaction", web::post().to(interactions::check_interaction));
}

/// Malformed JSON bodies answer with the same `{"message"}` shape as every other 400
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = AppError::InvalidRequest(err.to_string()).error_response();
        InternalError::from_response(err, response).into()
    })
}

fn log_failure(context: &str, e: &AppError) {
    match e {
        AppError::DatabaseError(_) => log::error!("❌ {} failed: {}", context, e),
        _ => log::warn!("⚠️ {} rejected: {}", context, e),
    }
}
