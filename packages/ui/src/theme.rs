use store::{PreferenceStore, ThemePreference};

/// Current theme plus the storage it is persisted to.
///
/// The in-memory value is the source of truth for rendering. Every toggle writes
/// through; a failed write is logged and the toggle still takes effect.
#[derive(Clone, Debug)]
pub struct ThemeController<P> {
    prefs: P,
    current: ThemePreference,
}

impl<P: PreferenceStore> ThemeController<P> {
    /// Read the persisted preference (Light when absent).
    pub fn load(prefs: P) -> Self {
        let current = ThemePreference::load(&prefs);
        tracing::debug!("Loaded theme preference: {}", current);
        Self { prefs, current }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// Flip between light and dark and persist the result.
    pub fn toggle(&mut self) -> ThemePreference {
        self.current = self.current.toggled();
        if let Err(e) = self.current.save(&self.prefs) {
            tracing::warn!("Could not persist theme preference: {}", e);
        }
        self.current
    }
}

/// Label of the toggle button for the current theme.
pub fn toggle_label(theme: ThemePreference) -> &'static str {
    match theme {
        ThemePreference::Light => "Switch to Dark Mode",
        ThemePreference::Dark => "Switch to Light Mode",
    }
}
