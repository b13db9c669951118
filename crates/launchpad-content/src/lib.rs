//! Typed content layer for the platform API
//!
//! Replaces the loosely-typed API records of the original pages with
//! explicit structures:
//! - Records with explicit optional, locale-suffixed fields
//! - Locale resolution with a default-locale fallback
//! - List filtering, search, and grouping helpers
//! - Load states that keep "failed" distinct from "empty"

pub mod listing;
pub mod locale;
pub mod records;

pub use listing::{FetchError, Filter, Loaded};
pub use locale::{localized, Locale};
pub use records::{Event, EventFormat, Mentor, Partner, Service, Startup, Testimonial};
