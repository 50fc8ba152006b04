use actix_web::{web, HttpResponse, ResponseError};
use crate::{database::Store, services::interaction_service};
use crate::models::Interaction;
use crate::services::interaction_service::CheckInteractionRequest;

#[utoipa::path(
    post,
    path = "/check-interaction",
    tag = "Interactions",
    request_body = CheckInteractionRequest,
    responses(
        (status = 200, description = "One result per drug pair, in pair order", body = [Interaction]),
        (status = 400, description = "Fewer than two drugs"),
        (status = 500, description = "Storage error")
    )
)]
pub async fn check_interaction(
    db: web::Data<dyn Store>,
    request: web::Json<CheckInteractionRequest>,
) -> HttpResponse {
    let drugs = request.drugs.as_deref().unwrap_or_default();
    log::info!("⚗️ POST /check-interaction - drugs: {:?}", drugs);

    match interaction_service::check_interactions(db.get_ref(), drugs).await {
        Ok(results) => {
            log::info!("✅ Checked {} drug pairs", results.len());
            super::metrics::add_pairs_checked(results.len());
            HttpResponse::Ok().json(results)
        }
        Err(e) => {
            super::log_failure("Interaction check", &e);
            e.error_response()
        }
    }
}
