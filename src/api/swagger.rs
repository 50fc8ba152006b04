use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Drug Interaction Service API",
        version = "1.0.0",
        description = "Drug metadata lookup, pairwise drug-interaction checking and user registration.\n\n**Features:**\n- Drug catalog lookup by exact name\n- Interaction check over every pair of a drug list\n- Recognition of drug names in free-text word lists\n- User registration with unique email\n- Health monitoring and metrics"
    ),
    paths(
        // Drugs
        crate::api::drugs::get_drug,
        crate::api::drugs::get_drugs,
        crate::api::drugs::check_drugs,

        // Interactions
        crate::api::interactions::check_interaction,

        // Users
        crate::api::users::register,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::Drug,
            crate::models::FieldValue,
            crate::models::DrugSummary,
            crate::models::Interaction,
            crate::services::drug_service::CheckDrugsRequest,
            crate::services::drug_service::CheckDrugsResponse,
            crate::services::interaction_service::CheckInteractionRequest,
            crate::services::user_service::RegisterRequest,
            crate::services::user_service::MessageResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Drugs", description = "Read-only drug catalog endpoints."),
        (name = "Interactions", description = "Pairwise drug-interaction checks. Matching is case-insensitive and order-independent."),
        (name = "Users", description = "User registration."),
        (name = "Health", description = "Health check and system metrics endpoints for monitoring service status."),
    )
)]
pub struct ApiDoc;
