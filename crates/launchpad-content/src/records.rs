//! Content records served by the platform API.
//!
//! Every record is deserialized from camelCase JSON with all fields
//! optional: the backend omits freely and clients must tolerate it.
//! Locale-suffixed variants resolve through [`localized`].

use crate::locale::{localized, Locale};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Portfolio startup shown in the directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Startup {
    pub id: Option<String>,
    pub name_uz: Option<String>,
    pub name_en: Option<String>,
    pub name_ru: Option<String>,
    pub logo_url: Option<String>,
    /// Open-ended industry tag (FinTech, EdTech, ...).
    pub industry: Option<String>,
    /// Funding stage tag (IDEA, MVP, EARLY, GROWTH, SCALE, ...); the
    /// backend set is open-ended, so this stays a string.
    pub stage: Option<String>,
    pub team_size: Option<u32>,
}

impl Startup {
    /// Localized startup name.
    #[must_use]
    pub fn name(&self, locale: Locale) -> &str {
        localized(locale, &self.name_uz, &self.name_en, &self.name_ru)
    }
}

/// Mentor profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Mentor {
    pub id: Option<String>,
    pub full_name: Option<String>,
    pub photo_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub specialization: Option<String>,
    pub position_uz: Option<String>,
    pub position_en: Option<String>,
    pub position_ru: Option<String>,
    pub bio_uz: Option<String>,
    pub bio_en: Option<String>,
    pub bio_ru: Option<String>,
}

impl Mentor {
    /// Display name, empty when the backend omitted it.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or("")
    }

    /// Localized job title.
    #[must_use]
    pub fn position(&self, locale: Locale) -> &str {
        localized(locale, &self.position_uz, &self.position_en, &self.position_ru)
    }

    /// Localized biography.
    #[must_use]
    pub fn bio(&self, locale: Locale) -> &str {
        localized(locale, &self.bio_uz, &self.bio_en, &self.bio_ru)
    }
}

/// Incubator service offering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Service {
    pub id: Option<String>,
    pub title_uz: Option<String>,
    pub title_en: Option<String>,
    pub title_ru: Option<String>,
    pub description_uz: Option<String>,
    pub description_en: Option<String>,
    pub description_ru: Option<String>,
    pub category: Option<String>,
    /// Price in UZS; zero or absent means free.
    pub price: Option<u64>,
    pub is_active: Option<bool>,
    pub is_premium: Option<bool>,
    pub icon: Option<String>,
}

impl Service {
    #[must_use]
    pub fn title(&self, locale: Locale) -> &str {
        localized(locale, &self.title_uz, &self.title_en, &self.title_ru)
    }

    #[must_use]
    pub fn description(&self, locale: Locale) -> &str {
        localized(
            locale,
            &self.description_uz,
            &self.description_en,
            &self.description_ru,
        )
    }

    #[must_use]
    pub fn is_paid(&self) -> bool {
        self.price.is_some_and(|p| p > 0)
    }
}

/// Delivery format of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventFormat {
    Online,
    Offline,
}

/// Scheduled event (training, masterclass, webinar, pitch day, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    pub id: Option<String>,
    pub title_uz: Option<String>,
    pub title_en: Option<String>,
    pub title_ru: Option<String>,
    /// Event category tag (TRAINING, MASTERCLASS, WEBINAR, PITCH_DAY,
    /// WORKSHOP, ...).
    pub category: Option<String>,
    pub format: Option<EventFormat>,
    pub start_date: Option<DateTime<Utc>>,
    pub location_uz: Option<String>,
    pub location_en: Option<String>,
    pub location_ru: Option<String>,
    /// Price in UZS.
    pub price: Option<u64>,
    pub is_free: Option<bool>,
    pub max_participants: Option<u32>,
    pub registered_count: Option<u32>,
    pub cover_url: Option<String>,
    pub is_active: Option<bool>,
}

impl Event {
    #[must_use]
    pub fn title(&self, locale: Locale) -> &str {
        localized(locale, &self.title_uz, &self.title_en, &self.title_ru)
    }

    #[must_use]
    pub fn location(&self, locale: Locale) -> &str {
        localized(locale, &self.location_uz, &self.location_en, &self.location_ru)
    }

    #[must_use]
    pub fn is_online(&self) -> bool {
        self.format == Some(EventFormat::Online)
    }

    /// Free when flagged so or priced at zero.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.is_free == Some(true) || self.price == Some(0)
    }

    /// Remaining capacity; `None` when the event is uncapped.
    #[must_use]
    pub fn spots_left(&self) -> Option<u32> {
        let max = self.max_participants.filter(|m| *m > 0)?;
        Some(max.saturating_sub(self.registered_count.unwrap_or(0)))
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.spots_left() == Some(0)
    }
}

/// Partner organization shown on the home page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Partner {
    pub id: Option<String>,
    pub name: Option<String>,
    pub logo_url: Option<String>,
}

/// Home-page testimonial.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    pub id: Option<String>,
    pub full_name: Option<String>,
    pub company: Option<String>,
    pub avatar_url: Option<String>,
    pub text_uz: Option<String>,
    pub text_en: Option<String>,
    pub text_ru: Option<String>,
}

impl Testimonial {
    #[must_use]
    pub fn text(&self, locale: Locale) -> &str {
        localized(locale, &self.text_uz, &self.text_en, &self.text_ru)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn startup_deserializes_from_camel_case_with_extras() {
        let startup: Startup = serde_json::from_value(serde_json::json!({
            "id": "s1",
            "nameUz": "Tolov",
            "nameEn": "PayFlow",
            "logoUrl": "https://cdn.example.com/payflow.png",
            "industry": "FinTech",
            "stage": "MVP",
            "teamSize": 4,
            "someFutureField": {"ignored": true}
        }))
        .unwrap();

        assert_eq!(startup.name(Locale::En), "PayFlow");
        assert_eq!(startup.name(Locale::Ru), "Tolov", "falls back to default locale");
        assert_eq!(startup.team_size, Some(4));
    }

    #[test]
    fn missing_fields_default_to_none() {
        let mentor: Mentor = serde_json::from_value(serde_json::json!({
            "fullName": "Dilnoza Karimova"
        }))
        .unwrap();
        assert_eq!(mentor.display_name(), "Dilnoza Karimova");
        assert_eq!(mentor.position(Locale::En), "");
        assert_eq!(mentor.linkedin_url, None);
    }

    #[test]
    fn event_spots_left() {
        let event = Event {
            max_participants: Some(30),
            registered_count: Some(28),
            ..Event::default()
        };
        assert_eq!(event.spots_left(), Some(2));
        assert!(!event.is_full());

        let full = Event {
            max_participants: Some(30),
            registered_count: Some(30),
            ..Event::default()
        };
        assert!(full.is_full());

        let over = Event {
            max_participants: Some(30),
            registered_count: Some(45),
            ..Event::default()
        };
        assert_eq!(over.spots_left(), Some(0), "never negative");

        let uncapped = Event {
            max_participants: Some(0),
            ..Event::default()
        };
        assert_eq!(uncapped.spots_left(), None);
    }

    #[test]
    fn event_free_when_flagged_or_zero_priced() {
        let flagged = Event {
            is_free: Some(true),
            price: Some(50_000),
            ..Event::default()
        };
        assert!(flagged.is_free());

        let zero = Event {
            price: Some(0),
            ..Event::default()
        };
        assert!(zero.is_free());

        let paid = Event {
            price: Some(50_000),
            ..Event::default()
        };
        assert!(!paid.is_free());
    }

    #[test]
    fn event_format_uses_screaming_case() {
        let event: Event = serde_json::from_value(serde_json::json!({
            "format": "ONLINE",
            "startDate": "2026-09-14T10:00:00Z"
        }))
        .unwrap();
        assert!(event.is_online());
        assert!(event.start_date.is_some());
    }

    #[test]
    fn service_paid_only_above_zero() {
        let free = Service {
            price: Some(0),
            ..Service::default()
        };
        assert!(!free.is_paid());

        let paid = Service {
            price: Some(250_000),
            ..Service::default()
        };
        assert!(paid.is_paid());
    }
}
