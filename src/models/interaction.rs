use serde::{Deserialize, Serialize};

/// Placeholder description for pairs without a stored record
pub const NO_INTERACTION: &str = "No interaction";

/// Pairwise interaction record from `d2d_collection`.
///
/// The pairing is unordered and case-insensitive: (A, B) also answers a
/// query for (b, a).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, utoipa::ToSchema)]
pub struct Interaction {
    #[serde(rename = "Drug_1")]
    pub drug_1: String,
    #[serde(rename = "Drug_2")]
    pub drug_2: String,
    #[serde(rename = "Interaction_Description")]
    pub description: String,
}

impl Interaction {
    pub fn new(drug_1: impl Into<String>, drug_2: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            drug_1: drug_1.into(),
            drug_2: drug_2.into(),
            description: description.into(),
        }
    }

    pub fn none(drug_1: &str, drug_2: &str) -> Self {
        Self::new(drug_1, drug_2, NO_INTERACTION)
    }
}
