//! # Browser localStorage preferences
//!
//! [`LocalStoragePreferences`] is the [`PreferenceStore`] used on the **web platform**.
//! Values live in `window.localStorage`, so they survive reloads of the page.
//!
//! The storage handle is looked up on every call; `web_sys::Storage` is not `Clone`
//! and the lookup is cheap. A browser that denies storage access (private mode,
//! sandboxed iframe) surfaces as [`PreferenceError::Unavailable`].

use crate::error::PreferenceError;
use crate::prefs::PreferenceStore;

/// `window.localStorage`-backed preferences.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStoragePreferences;

impl LocalStoragePreferences {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<web_sys::Storage, PreferenceError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(PreferenceError::Unavailable)
    }
}

impl PreferenceStore for LocalStoragePreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        self.storage()?
            .get_item(key)
            .map_err(|_| PreferenceError::Unavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|_| PreferenceError::Unavailable)
    }
}
