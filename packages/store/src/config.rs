//! # Board configuration — `feedback-board.toml`
//!
//! Describes where the remote collection lives and how long transient status
//! messages stay on screen. Every field has a production default, so a missing or
//! empty file is equivalent to the default configuration.
//!
//! ## Structure
//!
//! ```toml
//! [remote]
//! base_url = "https://test-fc88c-default-rtdb.firebaseio.com"
//! collection = "feedbacks"
//! extension = "json"
//!
//! [ui]
//! status_clear_secs = 3
//! ```
//!
//! ## Endpoints
//!
//! | Method | URL |
//! |--------|-----|
//! | [`BoardConfig::collection_url`] | `{base_url}/{collection}.{extension}` |
//! | [`BoardConfig::entry_url`] | `{base_url}/{collection}/{id}.{extension}` |

use serde::{Deserialize, Serialize};

use crate::models::FeedbackId;

/// Environment variable that overrides [`RemoteConfig::base_url`].
pub const BASE_URL_ENV: &str = "FEEDBACK_BOARD_URL";

/// Top-level configuration stored in `feedback-board.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Location of the remote collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_collection")]
    pub collection: String,
    #[serde(default = "default_extension")]
    pub extension: String,
}

/// Presentation timings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Seconds a success message stays visible.
    #[serde(default = "default_status_clear_secs")]
    pub status_clear_secs: u64,
}

fn default_base_url() -> String {
    "https://test-fc88c-default-rtdb.firebaseio.com".to_string()
}

fn default_collection() -> String {
    "feedbacks".to_string()
}

fn default_extension() -> String {
    "json".to_string()
}

fn default_status_clear_secs() -> u64 {
    3
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            collection: default_collection(),
            extension: default_extension(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            status_clear_secs: default_status_clear_secs(),
        }
    }
}

impl BoardConfig {
    /// Builder method to point at another database.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.remote.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "feedback-board.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read the config file at `path`, falling back to defaults when it is
    /// missing or unreadable.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default(path: &std::path::Path) -> Self {
        let Ok(text) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match Self::from_toml(&text) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn base(&self) -> &str {
        self.remote.base_url.trim_end_matches('/')
    }

    /// Endpoint for listing and creating entries.
    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}.{}",
            self.base(),
            self.remote.collection,
            self.remote.extension
        )
    }

    /// Endpoint for a single entry.
    pub fn entry_url(&self, id: &FeedbackId) -> String {
        format!(
            "{}/{}/{}.{}",
            self.base(),
            self.remote.collection,
            id,
            self.remote.extension
        )
    }
}
