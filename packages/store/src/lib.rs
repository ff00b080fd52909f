pub mod config;
pub mod error;
pub mod models;
pub mod prefs;
pub mod repo;
pub mod theme;
pub mod validation;

mod memory;
pub use memory::{MemoryStore, StoreRequest};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStoragePreferences;

pub use config::{BoardConfig, BASE_URL_ENV};
pub use error::{PreferenceError, StoreError};
pub use models::{FeedbackCollection, FeedbackDraft, FeedbackEntry, FeedbackId};
#[cfg(not(target_arch = "wasm32"))]
pub use prefs::FilePreferences;
pub use prefs::{MemoryPreferences, PreferenceStore};
pub use repo::FeedbackStore;
pub use theme::ThemePreference;
pub use validation::{validate_draft, ValidationError};
