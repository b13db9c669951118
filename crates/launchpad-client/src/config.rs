//! Client configuration and user preferences.
//!
//! Preferences (theme, locale) are injected, explicitly-scoped state
//! with a defined persistence boundary: loaded once at startup, saved on
//! change. Nothing reads them ambiently.

use launchpad_content::Locale;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default API origin; override with [`ENV_BASE_URL`].
pub const DEFAULT_BASE_URL: &str = "https://api.incubator.uz";

/// Environment variable overriding the API origin.
pub const ENV_BASE_URL: &str = "LAUNCHPAD_API_URL";

/// Default transport timeout, matching the submit bound.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with the base URL taken from [`ENV_BASE_URL`] when
    /// set and parseable; falls back to the default origin otherwise.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(ENV_BASE_URL) {
            match Url::parse(&raw) {
                Ok(url) => config.base_url = url,
                Err(error) => {
                    tracing::warn!(%raw, %error, "ignoring unparseable {ENV_BASE_URL}");
                }
            }
        }
        config
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// User preferences: loaded at startup, saved on change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub locale: Locale,
}

impl Preferences {
    /// Load from disk. A missing or corrupt file yields the defaults;
    /// startup never fails on preferences.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&raw) {
            Ok(prefs) => prefs,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "corrupt preferences, using defaults");
                Self::default()
            }
        }
    }

    /// Persist to disk. Called on every change.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let raw = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, raw)
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_light_and_uz() {
        let prefs = Preferences::default();
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.locale, Locale::Uz);
    }

    #[test]
    fn preferences_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let mut prefs = Preferences::default();
        prefs.toggle_theme();
        prefs.locale = Locale::Ru;
        prefs.save(&path).unwrap();

        let loaded = Preferences::load(&path);
        assert_eq!(loaded.theme, Theme::Dark);
        assert_eq!(loaded.locale, Locale::Ru);
    }

    #[test]
    fn missing_or_corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert_eq!(Preferences::load(&missing), Preferences::default());

        let corrupt = dir.path().join("corrupt.json");
        std::fs::write(&corrupt, "{not json").unwrap();
        assert_eq!(Preferences::load(&corrupt), Preferences::default());
    }

    #[test]
    fn theme_toggles_both_ways() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
