use super::TutorialStore;
use crate::tutorial::{NewTutorial, Tutorial, TutorialPatch};
use crate::{TutorialError, TutorialResult};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tutorials_types::TutorialId;

/// Process-local store. Records are kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryTutorialStore {
    records: RwLock<Vec<Tutorial>>,
}

impl InMemoryTutorialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(id: &TutorialId) -> TutorialError {
    TutorialError::NotFound(id.to_string())
}

#[async_trait]
impl TutorialStore for InMemoryTutorialStore {
    async fn create(&self, new: NewTutorial) -> TutorialResult<Tutorial> {
        let tutorial = Tutorial::from_new(TutorialId::new(), new, Utc::now());
        self.records.write().await.push(tutorial.clone());
        Ok(tutorial)
    }

    async fn find_all(&self) -> TutorialResult<Vec<Tutorial>> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(&self, id: &TutorialId) -> TutorialResult<Tutorial> {
        self.records
            .read()
            .await
            .iter()
            .find(|t| &t.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn find_by_title_contains(&self, needle: &str) -> TutorialResult<Vec<Tutorial>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|t| t.title_contains(needle))
            .cloned()
            .collect())
    }

    async fn update(&self, id: &TutorialId, patch: TutorialPatch) -> TutorialResult<Tutorial> {
        let mut records = self.records.write().await;
        let tutorial = records
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| not_found(id))?;
        tutorial.apply(&patch, Utc::now());
        Ok(tutorial.clone())
    }

    async fn delete_by_id(&self, id: &TutorialId) -> TutorialResult<Tutorial> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| not_found(id))?;
        Ok(records.remove(index))
    }

    async fn delete_all(&self) -> TutorialResult<u64> {
        let mut records = self.records.write().await;
        let count = records.len() as u64;
        records.clear();
        Ok(count)
    }

    async fn find_all_published(&self) -> TutorialResult<Vec<Tutorial>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|t| t.published)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> TutorialResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutorials_types::NonEmptyText;

    fn new_tutorial(title: &str, published: Option<bool>) -> NewTutorial {
        NewTutorial::new(NonEmptyText::new(title).unwrap(), None, published)
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_defaults() {
        let store = InMemoryTutorialStore::new();
        let created = store.create(new_tutorial("T1", None)).await.unwrap();

        assert!(!created.published);
        assert_eq!(store.find_by_id(&created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let store = InMemoryTutorialStore::new();
        let result = store.find_by_id(&TutorialId::new()).await;
        assert!(matches!(result, Err(TutorialError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let store = InMemoryTutorialStore::new();
        let a = store.create(new_tutorial("first", None)).await.unwrap();
        let b = store.create(new_tutorial("second", None)).await.unwrap();

        let ids: Vec<_> = store.find_all().await.unwrap().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
    }

    #[tokio::test]
    async fn test_search_empty_needle_matches_all() {
        let store = InMemoryTutorialStore::new();
        store.create(new_tutorial("Angular", None)).await.unwrap();
        store.create(new_tutorial("Rust", None)).await.unwrap();

        let all = store.find_all().await.unwrap();
        let searched = store.find_by_title_contains("").await.unwrap();
        assert_eq!(all, searched);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let store = InMemoryTutorialStore::new();
        let angular = store.create(new_tutorial("Angular", None)).await.unwrap();
        store.create(new_tutorial("Rust", None)).await.unwrap();

        let found = store.find_by_title_contains("ang").await.unwrap();
        assert_eq!(found, vec![angular.clone()]);

        let found = store.find_by_title_contains("GUL").await.unwrap();
        assert_eq!(found, vec![angular]);
    }

    #[tokio::test]
    async fn test_search_treats_metacharacters_literally() {
        let store = InMemoryTutorialStore::new();
        let cpp = store.create(new_tutorial("C++ basics", None)).await.unwrap();
        store.create(new_tutorial("Cobol", None)).await.unwrap();

        assert_eq!(store.find_by_title_contains("c++").await.unwrap(), vec![cpp]);
        assert!(store.find_by_title_contains("c.*").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_changes_only_supplied_fields() {
        let store = InMemoryTutorialStore::new();
        let created = store
            .create(NewTutorial::new(
                NonEmptyText::new("Axum").unwrap(),
                Some("Routing".into()),
                None,
            ))
            .await
            .unwrap();

        let patch = TutorialPatch {
            published: Some(true),
            ..TutorialPatch::default()
        };
        let updated = store.update(&created.id, patch).await.unwrap();

        assert!(updated.published);
        assert_eq!(updated.title, "Axum");
        assert_eq!(updated.description.as_deref(), Some("Routing"));
        assert_eq!(store.find_by_id(&created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing() {
        let store = InMemoryTutorialStore::new();
        let result = store
            .update(&TutorialId::new(), TutorialPatch::default())
            .await;
        assert!(matches!(result, Err(TutorialError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_by_id_then_lookup_fails() {
        let store = InMemoryTutorialStore::new();
        let created = store.create(new_tutorial("T1", None)).await.unwrap();

        let deleted = store.delete_by_id(&created.id).await.unwrap();
        assert_eq!(deleted, created);
        assert!(matches!(
            store.find_by_id(&created.id).await,
            Err(TutorialError::NotFound(_))
        ));
        assert!(matches!(
            store.delete_by_id(&created.id).await,
            Err(TutorialError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_all_returns_count() {
        let store = InMemoryTutorialStore::new();
        store.create(new_tutorial("a", None)).await.unwrap();
        store.create(new_tutorial("b", None)).await.unwrap();

        assert_eq!(store.delete_all().await.unwrap(), 2);
        assert!(store.find_all().await.unwrap().is_empty());
        assert_eq!(store.delete_all().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_find_all_published() {
        let store = InMemoryTutorialStore::new();
        let published = store.create(new_tutorial("live", Some(true))).await.unwrap();
        store.create(new_tutorial("draft", None)).await.unwrap();

        assert_eq!(store.find_all_published().await.unwrap(), vec![published]);
    }
}
