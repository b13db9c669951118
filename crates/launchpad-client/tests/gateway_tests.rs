//! Submission gateway tests against a mock HTTP server.

use launchpad_client::{application_form, contact_form, ApiClient, ClientConfig};
use launchpad_engine::api::{SubmissionGateway, SubmissionPayload};
use launchpad_engine::error::GatewayError;
use launchpad_engine::session::{FormSession, SubmitOutcome};
use launchpad_engine::state_machine::SessionPhase;
use launchpad_engine::types::{FieldName, FieldValue, NormalizedRecord};
use std::sync::Arc;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    let config = ClientConfig::new()
        .with_base_url(Url::parse(&server.uri()).unwrap());
    ApiClient::new(&config).unwrap()
}

fn filled_application_session() -> FormSession {
    let mut session = FormSession::new(Arc::new(application_form()));
    session.set_field("fullName", "Aziza Rahimova").unwrap();
    session.set_field("email", "aziza@example.com").unwrap();
    session.set_field("phone", "+998901234567").unwrap();
    session.next_step().unwrap();
    session
        .set_field("ideaDescription", "Marketplace connecting farmers to retail buyers.")
        .unwrap();
    session.set_field("industry", "AgriTech").unwrap();
    session.set_field("stage", "MVP").unwrap();
    session.set_field("teamSize", 4.0).unwrap();
    session.next_step().unwrap();
    session.set_field("investmentNeeded", 50000.0).unwrap();
    session.set_field("terms", true).unwrap();
    session
}

#[tokio::test]
async fn application_submits_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/applications"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut session = filled_application_session();

    let outcome = session.submit(&client).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert_eq!(session.phase(), SessionPhase::Submitted);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(body["fullName"], "Aziza Rahimova");
    assert_eq!(body["teamSize"], 4);
    assert_eq!(body["investmentNeeded"], 50000.0);
    // The terms flag is machine-only and never transmitted.
    assert!(body.get("terms").is_none());
}

#[tokio::test]
async fn rejected_submission_surfaces_status_and_allows_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/applications"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/applications"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut session = filled_application_session();

    let outcome = session.submit(&client).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Failed(GatewayError::Status(503)));
    assert_eq!(session.phase(), SessionPhase::SubmitFailed);
    assert_eq!(session.failure_notice(), Some(&GatewayError::Status(503)));

    // Explicit user retry with the data intact.
    let outcome = session.submit(&client).await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Accepted);
}

#[tokio::test]
async fn transport_timeout_maps_to_gateway_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(30)))
        .mount(&server)
        .await;

    let config = ClientConfig::new()
        .with_base_url(Url::parse(&server.uri()).unwrap())
        .with_timeout(Duration::from_millis(100));
    let client = ApiClient::new(&config).unwrap();

    let mut session = FormSession::new(Arc::new(contact_form()));
    session.set_field("fullName", "Bobur Aliyev").unwrap();
    session.set_field("email", "bobur@example.com").unwrap();
    session.set_field("phone", "+998933332211").unwrap();
    session.set_field("message", "Interested in the acceleration track.").unwrap();

    let outcome = session.submit(&client).await.unwrap();
    assert_eq!(
        outcome,
        SubmitOutcome::Failed(GatewayError::Timeout { limit_ms: 100 })
    );
    assert_eq!(session.phase(), SessionPhase::SubmitFailed);
}

#[tokio::test]
async fn raw_gateway_classifies_success_only_by_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let form = contact_form();
    let mut record = NormalizedRecord::new();
    record.insert(
        FieldName::from("fullName"),
        FieldValue::Text("Bobur Aliyev".to_string()),
    );
    let payload = SubmissionPayload::from_record(&record, form.schema());

    // Response bodies are not parsed beyond success/failure.
    assert!(client.submit("/contact", &payload).await.is_ok());
}
