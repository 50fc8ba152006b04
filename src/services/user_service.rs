use crate::{
    database::Store,
    models::User,
    utils::AppError,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

// Absent and empty fields are both missing
fn required(field: &Option<String>) -> Result<&str, AppError> {
    match field.as_deref() {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::InvalidRequest("All fields are required".to_string())),
    }
}

/// Registers a new user.
///
/// The existence check gives the common-case answer; the unique email index
/// turns a concurrent duplicate insert into a conflict as well. The password
/// is stored as given.
pub async fn register(
    db: &dyn Store,
    request: &RegisterRequest,
) -> Result<MessageResponse, AppError> {
    let first_name = required(&request.first_name)?;
    let last_name = required(&request.last_name)?;
    let email = required(&request.email)?;
    let password = required(&request.password)?;

    if db.email_registered(email).await? {
        return Err(AppError::Conflict("User already exists".to_string()));
    }

    let user = User {
        id: None,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };

    db.insert_user(&user).await?;

    log::info!("✅ User registered successfully: {}", email);

    Ok(MessageResponse {
        message: "User registered successfully".to_string(),
    })
}
