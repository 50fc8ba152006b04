use actix_web::{web, HttpResponse, ResponseError};
use crate::{database::Store, services::drug_service};
use crate::models::Drug;
use crate::services::drug_service::{CheckDrugsRequest, CheckDrugsResponse};

#[utoipa::path(
    get,
    path = "/api/drugs/{name}",
    tag = "Drugs",
    params(
        ("name" = String, Path, description = "Exact drug name (case-sensitive)")
    ),
    responses(
        (status = 200, description = "Drug record", body = Drug),
        (status = 404, description = "Drug not found"),
        (status = 500, description = "Storage error")
    )
)]
pub async fn get_drug(
    db: web::Data<dyn Store>,
    path: web::Path<String>,
) -> HttpResponse {
    let name = path.into_inner();
    log::info!("💊 GET /api/drugs/{}", name);

    match drug_service::get_drug_by_name(db.get_ref(), &name).await {
        Ok(drug) => {
            log::info!("✅ Drug {} found", name);
            HttpResponse::Ok().json(drug)
        }
        Err(e) => {
            super::log_failure(&format!("Drug lookup {}", name), &e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/drugs",
    tag = "Drugs",
    responses(
        (status = 200, description = "Every stored drug", body = [Drug]),
        (status = 500, description = "Storage error")
    )
)]
pub async fn get_drugs(db: web::Data<dyn Store>) -> HttpResponse {
    log::info!("💊 GET /api/drugs - Listing all drugs");

    match drug_service::get_all_drugs(db.get_ref()).await {
        Ok(drugs) => {
            log::info!("✅ Drugs retrieved: {}", drugs.len());
            HttpResponse::Ok().json(drugs)
        }
        Err(e) => {
            super::log_failure("Drug listing", &e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/check-drugs",
    tag = "Drugs",
    request_body = CheckDrugsRequest,
    responses(
        (status = 200, description = "Words that are known drug names", body = CheckDrugsResponse),
        (status = 500, description = "Storage error")
    )
)]
pub async fn check_drugs(
    db: web::Data<dyn Store>,
    request: web::Json<CheckDrugsRequest>,
) -> HttpResponse {
    log::info!("🔍 POST /check-drugs - {} words", request.words.len());

    match drug_service::check_drugs(db.get_ref(), &request).await {
        Ok(response) => {
            log::info!("✅ Recognized {} drugs", response.drugs.len());
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            super::log_failure("Drug check", &e);
            e.error_response()
        }
    }
}
