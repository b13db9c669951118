//! Supported locales and localized-field resolution.
//!
//! Content records carry one value per supported language
//! (`title_uz`/`title_en`/`title_ru`); resolution picks the requested
//! variant and falls back to the default locale when it is absent.

use serde::{Deserialize, Serialize};

/// Supported content locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Default locale; the fallback for missing variants.
    #[default]
    Uz,
    En,
    Ru,
}

impl Locale {
    /// Two-letter language code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::Uz => "uz",
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    /// Parse a language code, case-insensitively.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "uz" => Some(Locale::Uz),
            "en" => Some(Locale::En),
            "ru" => Some(Locale::Ru),
            _ => None,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Select the locale-suffixed variant of a field, falling back to the
/// default locale, then to the empty string.
///
/// Blank variants count as absent: an empty `title_en` falls back the
/// same way a missing one does.
#[must_use]
pub fn localized<'a>(
    locale: Locale,
    uz: &'a Option<String>,
    en: &'a Option<String>,
    ru: &'a Option<String>,
) -> &'a str {
    let present = |value: &'a Option<String>| value.as_deref().filter(|s| !s.trim().is_empty());
    let requested = match locale {
        Locale::Uz => present(uz),
        Locale::En => present(en),
        Locale::Ru => present(ru),
    };
    requested.or_else(|| present(uz)).unwrap_or("")
}
