//! HTTP transport and configuration for the platform client
//!
//! Provides:
//! - `ApiClient`: content fetches plus the `SubmissionGateway`
//!   implementation over `reqwest`
//! - `ClientConfig` and `Preferences`: injected configuration with an
//!   explicit persistence boundary, instead of ambient global state
//! - The concrete form definitions used by the pages (application,
//!   contact, event registration)

pub mod api;
pub mod config;
pub mod forms;

pub use api::ApiClient;
pub use config::{ClientConfig, Preferences, Theme};
pub use forms::{application_form, contact_form, event_registration_form};
