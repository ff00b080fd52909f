use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::StoreError;
use crate::models::{FeedbackCollection, FeedbackEntry, FeedbackId};
use crate::repo::{decode_collection, FeedbackStore};

/// A request observed by a [`MemoryStore`], in arrival order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreRequest {
    Create(FeedbackEntry),
    List,
    Delete(FeedbackId),
}

#[derive(Debug, Default)]
struct Inner {
    entries: FeedbackCollection,
    requests: Vec<StoreRequest>,
    next_id: u64,
    fail_create: Option<StoreError>,
    fail_list: Option<StoreError>,
    fail_delete: Option<StoreError>,
    raw_listing: Option<String>,
}

/// In-memory FeedbackStore for tests.
///
/// Clones share state, so a test can keep one handle for assertions while the
/// view-model owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with existing entries, as if another client had written them.
    pub fn with_entries(entries: impl IntoIterator<Item = (FeedbackId, FeedbackEntry)>) -> Self {
        let store = Self::new();
        store.lock().entries.extend(entries);
        store
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock only means a test panicked mid-request; the data is still usable.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Every request received so far.
    pub fn requests(&self) -> Vec<StoreRequest> {
        self.lock().requests.clone()
    }

    pub fn clear_requests(&self) {
        self.lock().requests.clear();
    }

    /// Current contents, without recording a request.
    pub fn snapshot(&self) -> FeedbackCollection {
        self.lock().entries.clone()
    }

    pub fn fail_create(&self, error: Option<StoreError>) {
        self.lock().fail_create = error;
    }

    pub fn fail_list(&self, error: Option<StoreError>) {
        self.lock().fail_list = error;
    }

    pub fn fail_delete(&self, error: Option<StoreError>) {
        self.lock().fail_delete = error;
    }

    /// Answer listings with this raw body instead of the stored entries.
    pub fn set_raw_listing(&self, body: Option<&str>) {
        self.lock().raw_listing = body.map(str::to_string);
    }
}

impl FeedbackStore for MemoryStore {
    async fn create_entry(&self, entry: &FeedbackEntry) -> Result<Option<FeedbackId>, StoreError> {
        let mut inner = self.lock();
        inner.requests.push(StoreRequest::Create(entry.clone()));
        if let Some(err) = inner.fail_create.clone() {
            return Err(err);
        }
        inner.next_id += 1;
        let id = FeedbackId::new(format!("-N{:08}", inner.next_id));
        inner.entries.insert(id.clone(), entry.clone());
        Ok(Some(id))
    }

    async fn list_entries(&self) -> Result<FeedbackCollection, StoreError> {
        let mut inner = self.lock();
        inner.requests.push(StoreRequest::List);
        if let Some(err) = inner.fail_list.clone() {
            return Err(err);
        }
        match &inner.raw_listing {
            Some(body) => decode_collection(body),
            None => Ok(inner.entries.clone()),
        }
    }

    async fn delete_entry(&self, id: &FeedbackId) -> Result<(), StoreError> {
        let mut inner = self.lock();
        inner.requests.push(StoreRequest::Delete(id.clone()));
        if let Some(err) = inner.fail_delete.clone() {
            return Err(err);
        }
        inner.entries.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> FeedbackEntry {
        FeedbackEntry {
            name: name.to_string(),
            email: format!("{name}@example.com"),
            comment: "hi".to_string(),
            timestamp: "2024-05-01T09:30:00.000Z".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let store = MemoryStore::new();

        assert!(store.list_entries().await.unwrap().is_empty());

        let id = store.create_entry(&entry("ann")).await.unwrap().unwrap();
        let listed = store.list_entries().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[&id].name, "ann");
    }

    #[tokio::test]
    async fn test_ids_sort_in_creation_order() {
        let store = MemoryStore::new();
        store.create_entry(&entry("first")).await.unwrap();
        store.create_entry(&entry("second")).await.unwrap();

        let names: Vec<String> = store
            .list_entries()
            .await
            .unwrap()
            .into_values()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_delete_missing_id_succeeds() {
        let store = MemoryStore::new();
        store.delete_entry(&FeedbackId::from("nope")).await.unwrap();
        assert_eq!(
            store.requests(),
            vec![StoreRequest::Delete(FeedbackId::from("nope"))]
        );
    }

    #[tokio::test]
    async fn test_failed_create_stores_nothing() {
        let store = MemoryStore::new();
        store.fail_create(Some(StoreError::Status(500)));

        let err = store.create_entry(&entry("ann")).await.unwrap_err();
        assert_eq!(err, StoreError::Status(500));
        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_raw_null_listing() {
        let store = MemoryStore::with_entries([(FeedbackId::from("a"), entry("ann"))]);
        store.set_raw_listing(Some("null"));
        assert!(store.list_entries().await.unwrap().is_empty());
    }
}
