//! # Local preference storage
//!
//! A tiny synchronous key-value interface for per-device settings (currently only
//! the theme). Three backends:
//!
//! | Backend | Platform | Where |
//! |---------|----------|-------|
//! | [`MemoryPreferences`] | any | process memory; tests |
//! | [`FilePreferences`] | native | a TOML table in `<data_dir>/feedback-board/preferences.toml` |
//! | `LocalStoragePreferences` | web | `window.localStorage` |
//!
//! ## Platform data directories
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/feedback-board/` |
//! | Linux | `~/.local/share/feedback-board/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\feedback-board\` |

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::error::PreferenceError;

/// Synchronous string key-value storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// In-memory preferences. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferences {
    values: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.values.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FilePreferences;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};

    use super::PreferenceStore;
    use crate::error::PreferenceError;

    const FILENAME: &str = "preferences.toml";

    /// Filesystem-backed preferences for desktop persistence.
    ///
    /// The whole table is re-read on every `get` and rewritten on every `set`,
    /// so two windows never keep a stale copy.
    #[derive(Clone, Debug)]
    pub struct FilePreferences {
        path: PathBuf,
    }

    impl FilePreferences {
        /// Preferences stored in `dir/preferences.toml`.
        pub fn new(dir: impl AsRef<Path>) -> Self {
            Self {
                path: dir.as_ref().join(FILENAME),
            }
        }

        /// Preferences under the platform data directory.
        pub fn in_data_dir() -> Self {
            let base = dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("feedback-board");
            Self::new(base)
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
            match std::fs::read_to_string(&self.path) {
                Ok(text) => Ok(toml::from_str(&text)?),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
                Err(e) => Err(e.into()),
            }
        }
    }

    impl PreferenceStore for FilePreferences {
        fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
            Ok(self.read_all()?.remove(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
            let mut values = self.read_all()?;
            values.insert(key.to_string(), value.to_string());
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&self.path, toml::to_string(&values)?)?;
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_file_preferences_roundtrip() {
            let dir = tempfile::tempdir().unwrap();
            let prefs = FilePreferences::new(dir.path().join("nested"));

            assert_eq!(prefs.get("theme").unwrap(), None);
            prefs.set("theme", "dark").unwrap();

            // Re-open from same directory
            let reopened = FilePreferences::new(dir.path().join("nested"));
            assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        }

        #[test]
        fn test_set_keeps_other_keys() {
            let dir = tempfile::tempdir().unwrap();
            let prefs = FilePreferences::new(dir.path());
            prefs.set("a", "1").unwrap();
            prefs.set("b", "2").unwrap();
            assert_eq!(prefs.get("a").unwrap().as_deref(), Some("1"));
            assert_eq!(prefs.get("b").unwrap().as_deref(), Some("2"));
        }

        #[test]
        fn test_corrupt_file_is_an_error() {
            let dir = tempfile::tempdir().unwrap();
            let prefs = FilePreferences::new(dir.path());
            std::fs::write(prefs.path(), "this is = = not toml").unwrap();
            assert!(matches!(prefs.get("theme"), Err(PreferenceError::Decode(_))));
        }
    }
}
