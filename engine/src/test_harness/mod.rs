// Test harness module
// Deterministic gateway doubles and form fixtures for session tests

use crate::api::{SubmissionGateway, SubmissionPayload};
use crate::error::GatewayError;
use crate::partition::StepPartition;
use crate::schema::{FieldSchema, FormDefinition, FormSchema};
use crate::types::FieldKind;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Gateway double that records every call and replays scripted
/// responses (last response repeats once the script is exhausted).
pub struct RecordingGateway {
    responses: Mutex<VecDeque<Result<(), GatewayError>>>,
    calls: AtomicUsize,
    seen: Mutex<Vec<(String, serde_json::Value)>>,
}

impl RecordingGateway {
    pub fn succeeding() -> Self {
        Self::with_responses(vec![Ok(())])
    }

    pub fn failing(error: GatewayError) -> Self {
        Self::with_responses(vec![Err(error)])
    }

    pub fn with_responses(responses: Vec<Result<(), GatewayError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Endpoint and JSON body of each call, in order.
    pub fn recorded(&self) -> Vec<(String, serde_json::Value)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl SubmissionGateway for RecordingGateway {
    async fn submit(
        &self,
        endpoint: &str,
        payload: &SubmissionPayload,
    ) -> Result<(), GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push((endpoint.to_string(), payload.to_json()));

        let mut responses = self.responses.lock().unwrap();
        match responses.len() {
            0 => Ok(()),
            1 => responses.front().cloned().unwrap_or(Ok(())),
            _ => responses.pop_front().unwrap_or(Ok(())),
        }
    }
}

/// Gateway double that never answers inside the configured delay; used
/// to drive the submit-timeout path.
pub struct SlowGateway {
    delay: Duration,
    calls: AtomicUsize,
}

impl SlowGateway {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl SubmissionGateway for SlowGateway {
    async fn submit(
        &self,
        _endpoint: &str,
        _payload: &SubmissionPayload,
    ) -> Result<(), GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Two-step fixture: contact fields on step 0, message on step 1.
pub fn two_step_definition() -> Arc<FormDefinition> {
    let schema = FormSchema::new(vec![
        FieldSchema::new("fullName", FieldKind::Text).min_len(2).max_len(100),
        FieldSchema::new("email", FieldKind::Email).max_len(255),
        FieldSchema::new("message", FieldKind::Text).min_len(10).max_len(1000),
        FieldSchema::new("terms", FieldKind::AcceptTrue).machine_only(),
    ])
    .unwrap();
    let partition = StepPartition::new(
        &schema,
        vec![vec!["fullName", "email"], vec!["message", "terms"]],
    )
    .unwrap();
    Arc::new(FormDefinition::new("test-form", "/messages", schema, partition))
}

/// Degenerate single-step fixture.
pub fn single_step_definition() -> Arc<FormDefinition> {
    let schema = FormSchema::new(vec![
        FieldSchema::new("fullName", FieldKind::Text).min_len(2),
        FieldSchema::new("email", FieldKind::Email),
    ])
    .unwrap();
    let partition = StepPartition::single(&schema);
    Arc::new(FormDefinition::new("mini-form", "/mini", schema, partition))
}
