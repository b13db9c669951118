//! List helpers: fetch errors, load states, filtering, and grouping.
//!
//! A failed fetch and an empty-but-successful fetch are different
//! states and must render differently; `Loaded` keeps them apart.

use crate::locale::Locale;
use crate::records::{Event, Service, Startup};
use std::collections::BTreeMap;

/// Transport-level fetch failure for the list endpoints.
///
/// Expected-empty results are not errors; see [`Loaded::Empty`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request exceeded the client timeout.
    #[error("request timed out")]
    Timeout,

    /// Network-level failure.
    #[error("transport failure: {0}")]
    Transport(String),

    /// Non-success HTTP status.
    #[error("endpoint returned status {0}")]
    Status(u16),

    /// The response body did not match the canonical contract.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Load state of a list view.
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded<T> {
    /// Request in flight; render the skeleton.
    Loading,
    /// Non-empty result.
    Ready(Vec<T>),
    /// Successful fetch with no items; distinct from `Failed`.
    Empty,
    /// Failed fetch; render with a retry affordance.
    Failed(FetchError),
}

impl<T> Loaded<T> {
    /// Classify a fetch result, separating empty from failed.
    #[must_use]
    pub fn from_result(result: Result<Vec<T>, FetchError>) -> Self {
        match result {
            Ok(items) if items.is_empty() => Loaded::Empty,
            Ok(items) => Loaded::Ready(items),
            Err(error) => Loaded::Failed(error),
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Loaded::Ready(_))
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        match self {
            Loaded::Ready(items) => items,
            _ => &[],
        }
    }
}

/// Category/stage filter with an explicit all-pass variant instead of a
/// magic "ALL" string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Only(String),
}

impl Filter {
    /// Parse a UI filter value; "ALL" (any case) means no filtering.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            Filter::All
        } else {
            Filter::Only(value.to_string())
        }
    }

    #[must_use]
    pub fn matches(&self, tag: Option<&str>) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => tag == Some(wanted.as_str()),
        }
    }
}

/// Directory search: localized-name or industry substring match plus a
/// stage filter, both case-insensitive on the query side.
#[must_use]
pub fn search_startups<'a>(
    startups: &'a [Startup],
    query: &str,
    stage: &Filter,
    locale: Locale,
) -> Vec<&'a Startup> {
    let needle = query.trim().to_lowercase();
    startups
        .iter()
        .filter(|s| stage.matches(s.stage.as_deref()))
        .filter(|s| {
            if needle.is_empty() {
                return true;
            }
            s.name(locale).to_lowercase().contains(&needle)
                || s.industry
                    .as_deref()
                    .is_some_and(|i| i.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Events matching a category filter.
#[must_use]
pub fn filter_events<'a>(events: &'a [Event], category: &Filter) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|e| category.matches(e.category.as_deref()))
        .collect()
}

/// Group services by category for the sectioned services page.
/// Uncategorized services land under `"OTHER"`.
#[must_use]
pub fn group_services(services: &[Service]) -> BTreeMap<String, Vec<&Service>> {
    let mut groups: BTreeMap<String, Vec<&Service>> = BTreeMap::new();
    for service in services {
        let category = service
            .category
            .clone()
            .unwrap_or_else(|| "OTHER".to_string());
        groups.entry(category).or_default().push(service);
    }
    groups
}
