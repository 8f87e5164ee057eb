//! Tutorial operations as exposed to the API layer and CLI.
//!
//! [`TutorialService`] wraps a shared [`TutorialStore`] handle. It applies the input rules the
//! store itself does not know about, parses externally supplied ids, and logs each operation.
//! Store failures are passed through unchanged.

use crate::store::TutorialStore;
use crate::tutorial::{NewTutorial, Tutorial, TutorialPatch};
use crate::{TutorialError, TutorialResult};
use std::sync::Arc;
use tutorials_types::{NonEmptyText, TutorialId};

/// Pure tutorial data operations - no API concerns
#[derive(Clone)]
pub struct TutorialService {
    store: Arc<dyn TutorialStore>,
}

impl TutorialService {
    pub fn new(store: Arc<dyn TutorialStore>) -> Self {
        Self { store }
    }

    /// Parses an id from a path segment or argument.
    ///
    /// A malformed id cannot belong to any record, so it is reported as
    /// [`TutorialError::NotFound`].
    pub fn parse_id(raw: &str) -> TutorialResult<TutorialId> {
        TutorialId::parse(raw).map_err(|_| TutorialError::NotFound(raw.to_owned()))
    }

    /// Creates a tutorial.
    ///
    /// # Errors
    ///
    /// - [`TutorialError::Validation`] if `title` is missing or blank.
    /// - [`TutorialError::Storage`] if the store call fails.
    pub async fn create(
        &self,
        title: Option<String>,
        description: Option<String>,
        published: Option<bool>,
    ) -> TutorialResult<Tutorial> {
        let title = title
            .and_then(|t| NonEmptyText::new(t).ok())
            .ok_or_else(|| TutorialError::Validation("Content can not be empty!".into()))?;

        let tutorial = self
            .store
            .create(NewTutorial::new(title, description, published))
            .await?;
        tracing::info!(id = %tutorial.id, "tutorial created");
        Ok(tutorial)
    }

    /// Lists tutorials, optionally filtered by a case-insensitive title substring.
    pub async fn list(&self, title: Option<&str>) -> TutorialResult<Vec<Tutorial>> {
        match title {
            Some(needle) => self.store.find_by_title_contains(needle).await,
            None => self.store.find_all().await,
        }
    }

    pub async fn list_published(&self) -> TutorialResult<Vec<Tutorial>> {
        self.store.find_all_published().await
    }

    pub async fn get(&self, raw_id: &str) -> TutorialResult<Tutorial> {
        let id = Self::parse_id(raw_id)?;
        self.store.find_by_id(&id).await
    }

    /// Applies a partial update. A supplied title is trimmed the same way as on create.
    ///
    /// # Errors
    ///
    /// - [`TutorialError::Validation`] if the patch sets no field.
    /// - [`TutorialError::NotFound`] if no record has this id.
    pub async fn update(
        &self,
        raw_id: &str,
        mut patch: TutorialPatch,
    ) -> TutorialResult<Tutorial> {
        if patch.is_empty() {
            return Err(TutorialError::Validation(
                "Data to update can not be empty!".into(),
            ));
        }
        let id = Self::parse_id(raw_id)?;
        if let Some(title) = patch.title.as_mut() {
            *title = title.trim().to_owned();
        }
        let tutorial = self.store.update(&id, patch).await?;
        tracing::info!(%id, "tutorial updated");
        Ok(tutorial)
    }

    pub async fn delete(&self, raw_id: &str) -> TutorialResult<Tutorial> {
        let id = Self::parse_id(raw_id)?;
        let tutorial = self.store.delete_by_id(&id).await?;
        tracing::info!(%id, "tutorial deleted");
        Ok(tutorial)
    }

    pub async fn delete_all(&self) -> TutorialResult<u64> {
        let count = self.store.delete_all().await?;
        tracing::info!(count, "all tutorials deleted");
        Ok(count)
    }

    /// Round trip to the backing store, for health checks.
    pub async fn ping(&self) -> TutorialResult<()> {
        self.store.ping().await
    }
}
