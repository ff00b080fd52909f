use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PreferenceError;
use crate::prefs::PreferenceStore;

/// Key the theme is persisted under.
pub const THEME_KEY: &str = "theme";

/// Light or dark appearance. Light unless the user chose otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Read the stored preference; absent or unrecognised values mean Light.
    pub fn load(prefs: &impl PreferenceStore) -> Self {
        match prefs.get(THEME_KEY) {
            Ok(Some(value)) => value.parse().unwrap_or_default(),
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("Could not read theme preference: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(self, prefs: &impl PreferenceStore) -> Result<(), PreferenceError> {
        prefs.set(THEME_KEY, self.as_str())
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}
