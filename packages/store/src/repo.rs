//! # Feedback store — the remote collection contract
//!
//! [`FeedbackStore`] is the seam between the board's view-model and whatever holds
//! the entries. The production implementation (`api::RemoteStore`) speaks the hosted
//! database's REST interface; [`crate::MemoryStore`] keeps everything in process for
//! tests.
//!
//! ## Operations
//!
//! | Method | Request | Success |
//! |--------|---------|---------|
//! | [`create_entry`](FeedbackStore::create_entry) | `POST {base}/{collection}.{ext}` with the JSON entry | any 2xx; returns the assigned id when the store reports one |
//! | [`list_entries`](FeedbackStore::list_entries) | `GET {base}/{collection}.{ext}` | any 2xx; an empty or `null` body is an empty collection |
//! | [`delete_entry`](FeedbackStore::delete_entry) | `DELETE {base}/{collection}/{id}.{ext}` | any 2xx; deleting a missing id is not distinguished |
//!
//! Every method returns a typed [`StoreError`] instead of swallowing the failure, so
//! the caller decides how it becomes visible.
//!
//! ## Decoding
//!
//! [`decode_collection`] turns a raw listing body into a [`FeedbackCollection`]. It is
//! shared by every implementation so that `null`, empty and malformed bodies are
//! treated identically everywhere.

use std::future::Future;

use crate::error::StoreError;
use crate::models::{FeedbackCollection, FeedbackEntry, FeedbackId};

/// Async access to a remote collection of feedback entries.
pub trait FeedbackStore {
    fn create_entry(
        &self,
        entry: &FeedbackEntry,
    ) -> impl Future<Output = Result<Option<FeedbackId>, StoreError>>;
    fn list_entries(&self) -> impl Future<Output = Result<FeedbackCollection, StoreError>>;
    fn delete_entry(&self, id: &FeedbackId) -> impl Future<Output = Result<(), StoreError>>;
}

/// Body the store answers a create with: `{"name": "<assigned id>"}`.
#[derive(serde::Deserialize)]
struct CreatedName {
    name: FeedbackId,
}

/// Decode a listing body. Empty and `null` bodies are an empty collection.
pub fn decode_collection(body: &str) -> Result<FeedbackCollection, StoreError> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(FeedbackCollection::new());
    }
    serde_json::from_str::<Option<FeedbackCollection>>(trimmed)
        .map(Option::unwrap_or_default)
        .map_err(|e| StoreError::MalformedResponse(e.to_string()))
}

/// Extract the assigned id from a create response body, if it carries one.
pub fn decode_created_id(body: &str) -> Option<FeedbackId> {
    serde_json::from_str::<CreatedName>(body)
        .ok()
        .map(|created| created.name)
}
