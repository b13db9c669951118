//! Remote content API client and submission gateway.
//!
//! Read side: list fetches returning typed records. Write side: the
//! engine's `SubmissionGateway` implemented over the same client. The
//! canonical list response is a bare JSON array; anything else is a
//! malformed response, not a second tolerated shape.

use crate::config::ClientConfig;
use launchpad_content::records::{Event, Mentor, Partner, Service, Startup, Testimonial};
use launchpad_content::FetchError;
use launchpad_engine::api::{SubmissionGateway, SubmissionPayload};
use launchpad_engine::error::GatewayError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// HTTP client for the platform API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    timeout_ms: u64,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            timeout_ms: config.timeout.as_millis() as u64,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Active portfolio startups.
    pub async fn startups(&self) -> Result<Vec<Startup>, FetchError> {
        self.get_list("/startups", &[]).await
    }

    /// Active mentors.
    pub async fn mentors(&self) -> Result<Vec<Mentor>, FetchError> {
        self.get_list("/mentors", &[("isActive", "true")]).await
    }

    /// Service catalog.
    pub async fn services(&self) -> Result<Vec<Service>, FetchError> {
        self.get_list("/services", &[]).await
    }

    /// Active upcoming events.
    pub async fn events(&self) -> Result<Vec<Event>, FetchError> {
        self.get_list("/events", &[("isActive", "true")]).await
    }

    /// Partner organizations for the home page.
    pub async fn partners(&self) -> Result<Vec<Partner>, FetchError> {
        self.get_list("/partners", &[]).await
    }

    /// Testimonials for the home page.
    pub async fn testimonials(&self) -> Result<Vec<Testimonial>, FetchError> {
        self.get_list("/testimonials", &[]).await
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, FetchError> {
        let url = self.join(path).map_err(FetchError::Malformed)?;
        tracing::debug!(%url, "fetching list");

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(fetch_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body: Value = response.json().await.map_err(fetch_error)?;
        let items = match body {
            Value::Array(items) => items,
            // The wrapped {"data": [...]} shape is off-contract.
            other => {
                return Err(FetchError::Malformed(format!(
                    "expected a JSON array, got {}",
                    json_kind(&other)
                )));
            }
        };

        items
            .into_iter()
            .map(|item| {
                serde_json::from_value(item).map_err(|e| FetchError::Malformed(e.to_string()))
            })
            .collect()
    }

    fn join(&self, path: &str) -> Result<Url, String> {
        self.base_url.join(path).map_err(|e| e.to_string())
    }
}

#[async_trait::async_trait]
impl SubmissionGateway for ApiClient {
    async fn submit(
        &self,
        endpoint: &str,
        payload: &SubmissionPayload,
    ) -> Result<(), GatewayError> {
        let url = self
            .join(endpoint)
            .map_err(GatewayError::Transport)?;
        tracing::info!(%url, "posting submission");

        let response = self
            .http
            .post(url)
            .json(&payload.to_json())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout {
                        limit_ms: self.timeout_ms,
                    }
                } else {
                    GatewayError::Transport(e.to_string())
                }
            })?;

        // Bodies are not interpreted beyond success/failure.
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(GatewayError::Status(status.as_u16()))
        }
    }
}

fn fetch_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Transport(error.to_string())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
