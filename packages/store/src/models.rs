//! # Domain models for feedback entries
//!
//! Defines the data structures exchanged with the remote document store and
//! held by the board's view-model. These types are `Serialize + Deserialize`
//! so they map directly onto the store's JSON records.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`FeedbackEntry`] | One submission: `name`, `email`, `comment` and the client-stamped ISO-8601 `timestamp`. |
//! | [`FeedbackId`] | The opaque key the store assigned to an entry. Never generated by the client. |
//! | [`FeedbackCollection`] | Every entry the store returned on the last listing, keyed by id. |
//! | [`FeedbackDraft`] | The three fields the user is currently typing, before validation. |
//!
//! The collection enumerates in key order. Store-assigned push ids sort
//! chronologically, so this is also submission order for ids the store made.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single feedback submission as stored remotely.
///
/// Every field defaults to an empty string when decoding, so a sparse record
/// written by another client still renders instead of failing the whole listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub comment: String,
    /// Creation instant, e.g. "2024-05-01T09:30:00.000Z"
    #[serde(default)]
    pub timestamp: String,
}

impl FeedbackEntry {
    pub fn new(draft: &FeedbackDraft, timestamp: impl Into<String>) -> Self {
        Self {
            name: draft.name.clone(),
            email: draft.email.clone(),
            comment: draft.comment.clone(),
            timestamp: timestamp.into(),
        }
    }
}

/// Store-assigned identifier of an entry.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackId(String);

impl FeedbackId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FeedbackId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Mapping of id → entry, mirroring whatever the store returned last.
pub type FeedbackCollection = BTreeMap<FeedbackId, FeedbackEntry>;

/// Form fields as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub name: String,
    pub email: String,
    pub comment: String,
}

impl FeedbackDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            comment: comment.into(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_json_shape() {
        let entry = FeedbackEntry {
            name: "Ann".to_string(),
            email: "a@b.com".to_string(),
            comment: "Great!".to_string(),
            timestamp: "2024-05-01T09:30:00.000Z".to_string(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Ann",
                "email": "a@b.com",
                "comment": "Great!",
                "timestamp": "2024-05-01T09:30:00.000Z",
            })
        );
    }

    #[test]
    fn test_sparse_entry_decodes_with_empty_fields() {
        let entry: FeedbackEntry = serde_json::from_str(r#"{"name":"Bo"}"#).unwrap();
        assert_eq!(entry.name, "Bo");
        assert!(entry.email.is_empty());
        assert!(entry.timestamp.is_empty());
    }

    #[test]
    fn test_collection_decodes_from_id_map() {
        let json = r#"{
            "-Nb2": {"name":"B","email":"b@c.de","comment":"two","timestamp":"t2"},
            "-Na1": {"name":"A","email":"a@b.com","comment":"one","timestamp":"t1"}
        }"#;
        let collection: FeedbackCollection = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = collection.keys().map(FeedbackId::as_str).collect();
        assert_eq!(ids, vec!["-Na1", "-Nb2"]);
        assert_eq!(collection[&FeedbackId::from("-Na1")].comment, "one");
    }

    #[test]
    fn test_entry_from_draft_copies_fields() {
        let draft = FeedbackDraft::new("Ann", "a@b.com", "Great!");
        let entry = FeedbackEntry::new(&draft, "2024-05-01T09:30:00.000Z");
        assert_eq!(entry.name, draft.name);
        assert_eq!(entry.email, draft.email);
        assert_eq!(entry.comment, draft.comment);
    }
}
