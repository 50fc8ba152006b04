use actix_web::{web, HttpResponse, ResponseError};
use crate::{database::Store, services::user_service};
use crate::services::user_service::{MessageResponse, RegisterRequest};

#[utoipa::path(
    post,
    path = "/register",
    tag = "Users",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered", body = MessageResponse),
        (status = 400, description = "Missing field or user already exists"),
        (status = 500, description = "Storage error")
    )
)]
pub async fn register(
    db: web::Data<dyn Store>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse {
    let email_str = request.email.as_deref().unwrap_or("N/A");
    log::info!("📝 POST /register - email: {}", email_str);

    match user_service::register(db.get_ref(), &request).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            super::log_failure(&format!("Registration {}", email_str), &e);
            e.error_response()
        }
    }
}
