//! Shared constructors for all platforms.
//!
//! - [`make_store`] returns the [`api::RemoteStore`] for a configuration.
//! - [`make_preferences`] returns a [`store::PreferenceStore`] backed by the
//!   platform's local storage:
//!   - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStoragePreferences`]
//!   - **Desktop** (native): a TOML file via [`store::FilePreferences`]
//!   - anything else: process memory, so the theme simply resets on restart

use store::BoardConfig;

/// Create the remote store for the given configuration.
pub fn make_store(config: &BoardConfig) -> api::RemoteStore {
    api::RemoteStore::new(config.clone())
}

/// Create the platform-appropriate preference storage.
pub fn make_preferences() -> impl store::PreferenceStore + Clone + 'static {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStoragePreferences::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryPreferences::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        store::FilePreferences::in_data_dir()
    }
}
