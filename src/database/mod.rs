#[cfg(test)]
pub mod memory;

use crate::models::{Drug, Interaction, User};
use crate::utils::AppError;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::{Collation, CollationStrength, FindOneOptions, IndexOptions};
use mongodb::{Client, Collection, Database, IndexModel};
use std::error::Error;

pub const DRUGS_COLLECTION: &str = "dd_collection";
pub const INTERACTIONS_COLLECTION: &str = "d2d_collection";
pub const USERS_COLLECTION: &str = "users";

const DEFAULT_DATABASE: &str = "dd_interaction";

/// Storage seam between the services and the document store
#[async_trait]
pub trait Store: Send + Sync {
    /// Exact, case-sensitive match on `drug_name`
    async fn find_drug_by_name(&self, name: &str) -> Result<Option<Drug>, AppError>;

    async fn list_drugs(&self) -> Result<Vec<Drug>, AppError>;

    /// Drugs whose `drug_name` is one of `names`
    async fn find_drugs_by_names(&self, names: &[String]) -> Result<Vec<Drug>, AppError>;

    /// Interaction for the unordered pair {a, b}, compared case-insensitively
    async fn find_interaction(&self, a: &str, b: &str) -> Result<Option<Interaction>, AppError>;

    /// Whether any stored user has exactly this email
    async fn email_registered(&self, email: &str) -> Result<bool, AppError>;

    /// Fails with `AppError::Conflict` when the email is already taken
    async fn insert_user(&self, user: &User) -> Result<(), AppError>;

    /// Round-trip to the backing store
    async fn ping(&self) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    /// Builds the pooled client. The server is not contacted here, so an
    /// unreachable server does not fail startup.
    pub async fn new(uri: &str, database: Option<&str>) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let db_name = database
            .map(str::to_string)
            .or_else(|| client_options.default_database.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let client = Client::with_options(client_options)?;
        let db = client.database(&db_name);

        log::info!("📊 Using database: {}", db_name);

        Ok(Self { db })
    }

    /// Creates the indexes the queries rely on, including the unique email
    /// index that backs registration. Each failure is logged on its own and
    /// does not stop the remaining indexes; the count of failures is returned.
    pub async fn ensure_indexes(&self) -> usize {
        log::info!("🔧 Creating database indexes...");
        let mut failed = 0;

        let users = self.collection::<Document>(USERS_COLLECTION);
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        match users.create_index(email_index).await {
            Ok(_) => log::info!("   ✅ Index created: {}(email) unique", USERS_COLLECTION),
            Err(e) => {
                // Usually duplicate emails already stored; registration then
                // relies on the existence check alone
                log::error!("❌ Unique email index not created: {}", e);
                failed += 1;
            }
        }

        let drugs = self.collection::<Document>(DRUGS_COLLECTION);
        let drug_name_index = IndexModel::builder()
            .keys(doc! { "drug_name": 1 })
            .build();

        match drugs.create_index(drug_name_index).await {
            Ok(_) => log::info!("   ✅ Index created: {}(drug_name)", DRUGS_COLLECTION),
            Err(e) => {
                log::warn!("⚠️  Index {}(drug_name) not created: {}", DRUGS_COLLECTION, e);
                failed += 1;
            }
        }

        let interactions = self.collection::<Document>(INTERACTIONS_COLLECTION);
        let pair_index = IndexModel::builder()
            .keys(doc! { "Drug_1": 1, "Drug_2": 1 })
            .options(IndexOptions::builder().collation(case_insensitive()).build())
            .build();

        match interactions.create_index(pair_index).await {
            Ok(_) => log::info!("   ✅ Index created: {}(Drug_1, Drug_2)", INTERACTIONS_COLLECTION),
            Err(e) => {
                log::warn!("⚠️  Index {}(Drug_1, Drug_2) not created: {}", INTERACTIONS_COLLECTION, e);
                failed += 1;
            }
        }

        if failed == 0 {
            log::info!("✅ Database indexes ready");
        }

        failed
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }
}

/// Equality that ignores letter case (strength 2 keeps diacritics significant)
fn case_insensitive() -> Collation {
    Collation::builder()
        .locale("en".to_string())
        .strength(CollationStrength::Secondary)
        .build()
}

#[async_trait]
impl Store for MongoDB {
    async fn find_drug_by_name(&self, name: &str) -> Result<Option<Drug>, AppError> {
        let drug = self
            .collection::<Drug>(DRUGS_COLLECTION)
            .find_one(doc! { "drug_name": name })
            .await?;

        Ok(drug)
    }

    async fn list_drugs(&self) -> Result<Vec<Drug>, AppError> {
        let cursor = self
            .collection::<Drug>(DRUGS_COLLECTION)
            .find(doc! {})
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_drugs_by_names(&self, names: &[String]) -> Result<Vec<Drug>, AppError> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let cursor = self
            .collection::<Drug>(DRUGS_COLLECTION)
            .find(doc! { "drug_name": { "$in": names.to_vec() } })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_interaction(&self, a: &str, b: &str) -> Result<Option<Interaction>, AppError> {
        let filter = doc! {
            "$or": [
                { "Drug_1": a, "Drug_2": b },
                { "Drug_1": b, "Drug_2": a }
            ]
        };
        let options = FindOneOptions::builder()
            .collation(case_insensitive())
            .build();

        let interaction = self
            .collection::<Interaction>(INTERACTIONS_COLLECTION)
            .find_one(filter)
            .with_options(options)
            .await?;

        Ok(interaction)
    }

    async fn email_registered(&self, email: &str) -> Result<bool, AppError> {
        // Only the match matters; legacy rows may not decode as `User`
        let options = FindOneOptions::builder()
            .projection(doc! { "_id": 1 })
            .build();

        let existing = self
            .collection::<Document>(USERS_COLLECTION)
            .find_one(doc! { "email": email })
            .with_options(options)
            .await?;

        Ok(existing.is_some())
    }

    async fn insert_user(&self, user: &User) -> Result<(), AppError> {
        // Duplicate key errors surface as AppError::Conflict
        self.collection::<User>(USERS_COLLECTION)
            .insert_one(user)
            .await?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
