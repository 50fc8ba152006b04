//! In-memory `Store` used by the service and route tests.

use super::Store;
use crate::models::{Drug, Interaction, User};
use crate::utils::AppError;
use async_trait::async_trait;
use mongodb::bson::{self, Document};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    drugs: RwLock<Vec<Drug>>,
    interactions: RwLock<Vec<Interaction>>,
    // Kept as raw documents, like the users collection
    users: RwLock<Vec<Document>>,
    failing: AtomicBool,
    blind_email_check: AtomicBool,
    queries: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_drug(self, drug: Drug) -> Self {
        self.drugs.write().unwrap().push(drug);
        self
    }

    pub fn with_interaction(self, interaction: Interaction) -> Self {
        self.interactions.write().unwrap().push(interaction);
        self
    }

    /// Every subsequent call fails like a lost connection
    pub fn failing(self) -> Self {
        self.failing.store(true, Ordering::SeqCst);
        self
    }

    /// Stores a user document as-is, e.g. a legacy row missing fields
    pub fn with_user_document(self, user: Document) -> Self {
        self.users.write().unwrap().push(user);
        self
    }

    /// The existence check never sees stored users, as when two
    /// registrations for the same email run concurrently. Inserts still
    /// enforce uniqueness.
    pub fn racing_registrations(self) -> Self {
        self.blind_email_check.store(true, Ordering::SeqCst);
        self
    }

    /// Number of store calls made so far
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn users(&self) -> Vec<User> {
        self.users
            .read()
            .unwrap()
            .iter()
            .map(|user| bson::from_document(user.clone()).unwrap())
            .collect()
    }

    fn email_taken(&self, email: &str) -> bool {
        self.users
            .read()
            .unwrap()
            .iter()
            .any(|user| matches!(user.get_str("email"), Ok(stored) if stored == email))
    }

    fn touch(&self) -> Result<(), AppError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError("connection refused".to_string()));
        }
        Ok(())
    }
}

/// Case-insensitive, order-independent pair equality
fn same_pair(record: &Interaction, a: &str, b: &str) -> bool {
    let (d1, d2) = (record.drug_1.to_lowercase(), record.drug_2.to_lowercase());
    let (a, b) = (a.to_lowercase(), b.to_lowercase());
    (d1 == a && d2 == b) || (d1 == b && d2 == a)
}

pub fn drug_named(name: &str) -> Drug {
    Drug {
        drug_name: Some(name.into()),
        ..Default::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find_drug_by_name(&self, name: &str) -> Result<Option<Drug>, AppError> {
        self.touch()?;
        let drugs = self.drugs.read().unwrap();
        Ok(drugs
            .iter()
            .find(|drug| drug.name() == Some(name))
            .cloned())
    }

    async fn list_drugs(&self) -> Result<Vec<Drug>, AppError> {
        self.touch()?;
        Ok(self.drugs.read().unwrap().clone())
    }

    async fn find_drugs_by_names(&self, names: &[String]) -> Result<Vec<Drug>, AppError> {
        self.touch()?;
        let drugs = self.drugs.read().unwrap();
        Ok(drugs
            .iter()
            .filter(|drug| {
                drug.name()
                    .map(|name| names.iter().any(|wanted| wanted == name))
                    .unwrap_or(false)
            })
            .cloned()
            .collect())
    }

    async fn find_interaction(&self, a: &str, b: &str) -> Result<Option<Interaction>, AppError> {
        self.touch()?;
        let interactions = self.interactions.read().unwrap();
        Ok(interactions.iter().find(|record| same_pair(record, a, b)).cloned())
    }

    async fn email_registered(&self, email: &str) -> Result<bool, AppError> {
        self.touch()?;
        if self.blind_email_check.load(Ordering::SeqCst) {
            return Ok(false);
        }
        Ok(self.email_taken(email))
    }

    async fn insert_user(&self, user: &User) -> Result<(), AppError> {
        self.touch()?;
        // Same contract as the unique email index
        if self.email_taken(&user.email) {
            return Err(AppError::Conflict("User already exists".to_string()));
        }
        let document = bson::to_document(user)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        self.users.write().unwrap().push(document);
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.touch()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_pair_is_symmetric_and_case_insensitive() {
        let record = Interaction::new("Aspirin", "Warfarin", "bleeding risk");
        assert!(same_pair(&record, "aspirin", "WARFARIN"));
        assert!(same_pair(&record, "WARFARIN", "aspirin"));
        assert!(!same_pair(&record, "aspirin", "ibuprofen"));
    }

    #[test]
    fn test_same_pair_treats_special_characters_literally() {
        let record = Interaction::new("Vitamin B12 (oral)", "Metformin", "reduced absorption");
        assert!(same_pair(&record, "vitamin b12 (oral)", "metformin"));
        assert!(!same_pair(&record, "Vitamin B12 .oral.", "metformin"));
        assert!(!same_pair(&record, "Vitamin", "metformin"));
    }
}
