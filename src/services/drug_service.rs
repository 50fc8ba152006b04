// ==================== READ ONLY CATALOG ====================
// Drug records are imported out-of-band; this service never writes them.

use crate::{
    database::Store,
    models::{Drug, DrugSummary},
    utils::AppError,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CheckDrugsRequest {
    #[serde(default)]
    pub words: Vec<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CheckDrugsResponse {
    pub drugs: Vec<DrugSummary>,
}

/// Exact (case-sensitive) lookup by `drug_name`
pub async fn get_drug_by_name(
    db: &dyn Store,
    name: &str,
) -> Result<Drug, AppError> {
    db.find_drug_by_name(name)
        .await?
        .ok_or_else(|| AppError::NotFound("Drug not found".to_string()))
}

/// Every stored drug, unfiltered and unpaginated
pub async fn get_all_drugs(db: &dyn Store) -> Result<Vec<Drug>, AppError> {
    db.list_drugs().await
}

/// Which of the given words are stored drug names, with a summary of each
pub async fn check_drugs(
    db: &dyn Store,
    request: &CheckDrugsRequest,
) -> Result<CheckDrugsResponse, AppError> {
    let drugs = db
        .find_drugs_by_names(&request.words)
        .await?
        .into_iter()
        .map(DrugSummary::from)
        .collect();

    Ok(CheckDrugsResponse { drugs })
}
