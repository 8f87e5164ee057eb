//! Tutorial persistence.
//!
//! [`TutorialStore`] is the data-access contract. Every operation is a single independent round
//! trip to the backing store; implementations do no caching, batching or retrying.
//!
//! Two implementations are provided:
//! - [`MongoTutorialStore`]: the `tutorials` collection of a MongoDB database.
//! - [`InMemoryTutorialStore`]: a process-local store for tests and local development.
//!
//! [`connect`] picks one from a [`CoreConfig`] and is meant to be called once at startup. The
//! returned handle is shared across requests.

mod memory;
mod mongo;

pub use memory::InMemoryTutorialStore;
pub use mongo::MongoTutorialStore;

use crate::config::{CoreConfig, StoreKind};
use crate::tutorial::{NewTutorial, Tutorial, TutorialPatch};
use crate::TutorialResult;
use async_trait::async_trait;
use std::sync::Arc;
use tutorials_types::TutorialId;

#[async_trait]
pub trait TutorialStore: Send + Sync {
    /// Persists a new record under a freshly assigned id.
    async fn create(&self, new: NewTutorial) -> TutorialResult<Tutorial>;

    /// Every stored record, in natural store order.
    async fn find_all(&self) -> TutorialResult<Vec<Tutorial>>;

    /// # Errors
    ///
    /// [`crate::TutorialError::NotFound`] if no record has this id.
    async fn find_by_id(&self, id: &TutorialId) -> TutorialResult<Tutorial>;

    /// Records whose title contains `needle`, ignoring case. The needle is matched literally.
    async fn find_by_title_contains(&self, needle: &str) -> TutorialResult<Vec<Tutorial>>;

    /// Applies the supplied fields and returns the record as it is after the update.
    async fn update(&self, id: &TutorialId, patch: TutorialPatch) -> TutorialResult<Tutorial>;

    /// Removes a record and returns it.
    async fn delete_by_id(&self, id: &TutorialId) -> TutorialResult<Tutorial>;

    /// Removes every record and returns how many were removed.
    async fn delete_all(&self) -> TutorialResult<u64>;

    async fn find_all_published(&self) -> TutorialResult<Vec<Tutorial>>;

    /// Liveness round trip to the backing store.
    async fn ping(&self) -> TutorialResult<()>;
}

/// Opens the store selected by `cfg`.
///
/// # Errors
///
/// Returns a storage error if the MongoDB connection string cannot be parsed or the server
/// does not answer a ping.
pub async fn connect(cfg: &CoreConfig) -> TutorialResult<Arc<dyn TutorialStore>> {
    match cfg.store_kind() {
        StoreKind::Memory => {
            tracing::info!("using in-memory tutorial store");
            Ok(Arc::new(InMemoryTutorialStore::new()))
        }
        StoreKind::MongoDb => {
            tracing::info!(url = %cfg.redacted_database_url(), "connecting to MongoDB");
            let store = MongoTutorialStore::connect(cfg.database_url()).await?;
            store.ping().await?;
            tracing::info!("connected to MongoDB");
            Ok(Arc::new(store))
        }
    }
}
