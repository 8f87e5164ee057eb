//! MongoDB-backed tutorial store.
//!
//! ## Document layout
//!
//! ```text
//! tutorials {
//!   _id:         ObjectId
//!   title:       string
//!   description: string (absent when never set)
//!   published:   bool
//!   createdAt:   date
//!   updatedAt:   date
//! }
//! ```
//!
//! The driver's `Client` owns a connection pool; one store is opened at startup and shared.
//! Timestamps are truncated to millisecond precision before use so that the record returned by
//! a write matches what a later read produces.

use super::TutorialStore;
use crate::constants::{DEFAULT_DATABASE_NAME, TUTORIALS_COLLECTION};
use crate::tutorial::{NewTutorial, Tutorial, TutorialPatch};
use crate::{TutorialError, TutorialResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::{
    options::{ClientOptions, ReturnDocument},
    Client, Collection, Database,
};
use serde::{Deserialize, Serialize};
use tutorials_types::TutorialId;

#[derive(Debug, Serialize, Deserialize)]
struct TutorialDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    published: bool,
    #[serde(rename = "createdAt")]
    created_at: bson::DateTime,
    #[serde(rename = "updatedAt")]
    updated_at: bson::DateTime,
}

impl From<&Tutorial> for TutorialDocument {
    fn from(t: &Tutorial) -> Self {
        Self {
            id: t.id.object_id(),
            title: t.title.clone(),
            description: t.description.clone(),
            published: t.published,
            created_at: bson::DateTime::from_chrono(t.created_at),
            updated_at: bson::DateTime::from_chrono(t.updated_at),
        }
    }
}

impl From<TutorialDocument> for Tutorial {
    fn from(d: TutorialDocument) -> Self {
        Self {
            id: TutorialId::from(d.id),
            title: d.title,
            description: d.description,
            published: d.published,
            created_at: d.created_at.to_chrono(),
            updated_at: d.updated_at.to_chrono(),
        }
    }
}

fn now_millis() -> DateTime<Utc> {
    bson::DateTime::from_chrono(Utc::now()).to_chrono()
}

fn by_id(id: &TutorialId) -> Document {
    doc! { "_id": id.object_id() }
}

/// Builds the `$set` body for a patch. `updatedAt` is always refreshed.
fn set_document(patch: &TutorialPatch, now: DateTime<Utc>) -> Document {
    let mut set = doc! { "updatedAt": bson::DateTime::from_chrono(now) };
    if let Some(title) = &patch.title {
        set.insert("title", title.as_str());
    }
    if let Some(description) = &patch.description {
        set.insert("description", description.as_str());
    }
    if let Some(published) = patch.published {
        set.insert("published", published);
    }
    doc! { "$set": set }
}

/// Case-insensitive literal substring filter on `title`.
fn title_filter(needle: &str) -> Document {
    doc! { "title": { "$regex": regex::escape(needle), "$options": "i" } }
}

#[derive(Clone, Debug)]
pub struct MongoTutorialStore {
    database: Database,
    collection: Collection<TutorialDocument>,
}

impl MongoTutorialStore {
    /// Parses the connection string and builds a pooled client.
    ///
    /// The driver connects lazily; call [`TutorialStore::ping`] to verify the server is reachable.
    pub async fn connect(database_url: &str) -> TutorialResult<Self> {
        let mut options = ClientOptions::parse(database_url).await?;
        if options.app_name.is_none() {
            options.app_name = Some("tutorials".into());
        }
        let client = Client::with_options(options)?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE_NAME));

        Ok(Self::with_database(database))
    }

    pub fn with_database(database: Database) -> Self {
        let collection = database.collection::<TutorialDocument>(TUTORIALS_COLLECTION);
        Self {
            database,
            collection,
        }
    }

    async fn find_many(&self, filter: Document) -> TutorialResult<Vec<Tutorial>> {
        let cursor = self.collection.find(filter).await?;
        let documents: Vec<TutorialDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(Tutorial::from).collect())
    }
}

#[async_trait]
impl TutorialStore for MongoTutorialStore {
    async fn create(&self, new: NewTutorial) -> TutorialResult<Tutorial> {
        let tutorial = Tutorial::from_new(TutorialId::new(), new, now_millis());
        self.collection
            .insert_one(TutorialDocument::from(&tutorial))
            .await?;
        Ok(tutorial)
    }

    async fn find_all(&self) -> TutorialResult<Vec<Tutorial>> {
        self.find_many(doc! {}).await
    }

    async fn find_by_id(&self, id: &TutorialId) -> TutorialResult<Tutorial> {
        self.collection
            .find_one(by_id(id))
            .await?
            .map(Tutorial::from)
            .ok_or_else(|| TutorialError::NotFound(id.to_string()))
    }

    async fn find_by_title_contains(&self, needle: &str) -> TutorialResult<Vec<Tutorial>> {
        self.find_many(title_filter(needle)).await
    }

    async fn update(&self, id: &TutorialId, patch: TutorialPatch) -> TutorialResult<Tutorial> {
        self.collection
            .find_one_and_update(by_id(id), set_document(&patch, now_millis()))
            .return_document(ReturnDocument::After)
            .await?
            .map(Tutorial::from)
            .ok_or_else(|| TutorialError::NotFound(id.to_string()))
    }

    async fn delete_by_id(&self, id: &TutorialId) -> TutorialResult<Tutorial> {
        self.collection
            .find_one_and_delete(by_id(id))
            .await?
            .map(Tutorial::from)
            .ok_or_else(|| TutorialError::NotFound(id.to_string()))
    }

    async fn delete_all(&self) -> TutorialResult<u64> {
        let result = self.collection.delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }

    async fn find_all_published(&self) -> TutorialResult<Vec<Tutorial>> {
        self.find_many(doc! { "published": true }).await
    }

    async fn ping(&self) -> TutorialResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
