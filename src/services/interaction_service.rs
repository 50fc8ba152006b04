use crate::{
    database::Store,
    models::Interaction,
    utils::AppError,
};
use futures::future::try_join_all;
use serde::Deserialize;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CheckInteractionRequest {
    pub drugs: Option<Vec<String>>,
}

/// Unordered pairs {i, j} with i < j, outer loop over the earlier index
pub fn drug_pairs(drugs: &[String]) -> Vec<(&str, &str)> {
    let mut pairs = Vec::with_capacity(drugs.len() * drugs.len().saturating_sub(1) / 2);
    for (i, first) in drugs.iter().enumerate() {
        for second in &drugs[i + 1..] {
            pairs.push((first.as_str(), second.as_str()));
        }
    }
    pairs
}

/// Resolves every pair of `drugs` against the interaction collection.
///
/// Lookups run concurrently; results come back in pair order. The first
/// storage error fails the whole check.
pub async fn check_interactions(
    db: &dyn Store,
    drugs: &[String],
) -> Result<Vec<Interaction>, AppError> {
    if drugs.len() < 2 {
        return Err(AppError::InvalidRequest(
            "At least two drugs are required to check interactions.".to_string(),
        ));
    }

    let pairs = drug_pairs(drugs);
    log::debug!("Checking {} drug pairs", pairs.len());

    let lookups = pairs.iter().map(|(a, b)| async move {
        let found = db.find_interaction(a, b).await?;
        Ok::<_, AppError>(found.unwrap_or_else(|| Interaction::none(a, b)))
    });

    try_join_all(lookups).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryStore;
    use crate::models::NO_INTERACTION;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_drug_pairs_order() {
        let drugs = names(&["A", "B", "C", "D"]);
        let pairs = drug_pairs(&drugs);
        assert_eq!(
            pairs,
            vec![("A", "B"), ("A", "C"), ("A", "D"), ("B", "C"), ("B", "D"), ("C", "D")]
        );
    }

    #[test]
    fn test_drug_pairs_count() {
        for n in 0..8usize {
            let drugs: Vec<String> = (0..n).map(|i| format!("drug-{}", i)).collect();
            assert_eq!(drug_pairs(&drugs).len(), n * n.saturating_sub(1) / 2);
        }
    }

    #[tokio::test]
    async fn test_scenario_one_stored_interaction() {
        let store = MemoryStore::new()
            .with_interaction(Interaction::new("A", "B", "causes drowsiness"));

        let results = check_interactions(&store, &names(&["A", "B", "C"])).await.unwrap();

        assert_eq!(
            results,
            vec![
                Interaction::new("A", "B", "causes drowsiness"),
                Interaction::new("A", "C", NO_INTERACTION),
                Interaction::new("B", "C", NO_INTERACTION),
            ]
        );
    }

    #[tokio::test]
    async fn test_lookup_is_symmetric_and_case_insensitive() {
        let store = MemoryStore::new()
            .with_interaction(Interaction::new("Aspirin", "Warfarin", "bleeding risk"));

        let results = check_interactions(&store, &names(&["WARFARIN", "aspirin"])).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].description, "bleeding risk");
        // The stored record is returned as-is
        assert_eq!(results[0].drug_1, "Aspirin");
    }

    #[tokio::test]
    async fn test_fewer_than_two_drugs_skips_store() {
        let store = MemoryStore::new();

        for drugs in [names(&[]), names(&["Aspirin"])] {
            let result = check_interactions(&store, &drugs).await;
            assert!(matches!(result, Err(AppError::InvalidRequest(_))));
        }
        assert_eq!(store.queries(), 0);
    }

    #[tokio::test]
    async fn test_storage_error_fails_whole_check() {
        let store = MemoryStore::new().failing();
        let result = check_interactions(&store, &names(&["A", "B", "C"])).await;
        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_duplicate_names_are_paired() {
        let store = MemoryStore::new();
        let results = check_interactions(&store, &names(&["A", "A"])).await.unwrap();
        assert_eq!(results, vec![Interaction::none("A", "A")]);
    }
}
