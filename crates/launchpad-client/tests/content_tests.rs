//! Content fetch tests: canonical response shape, load states, and
//! error classification.

use launchpad_client::{ApiClient, ClientConfig};
use launchpad_content::{FetchError, Loaded, Locale};
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    let config = ClientConfig::new()
        .with_base_url(Url::parse(&server.uri()).unwrap());
    ApiClient::new(&config).unwrap()
}

#[tokio::test]
async fn startups_parse_from_bare_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/startups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "s1",
                "nameUz": "Tolov",
                "nameEn": "PayFlow",
                "industry": "FinTech",
                "stage": "MVP",
                "teamSize": 4
            },
            {
                "id": "s2",
                "nameUz": "AgroSez"
            }
        ])))
        .mount(&server)
        .await;

    let startups = client_for(&server).startups().await.unwrap();
    assert_eq!(startups.len(), 2);
    assert_eq!(startups[0].name(Locale::En), "PayFlow");
    assert_eq!(startups[1].name(Locale::En), "AgroSez", "default-locale fallback");
}

#[tokio::test]
async fn wrapped_response_shape_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/startups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "s1"}]
        })))
        .mount(&server)
        .await;

    let error = client_for(&server).startups().await.unwrap_err();
    assert!(matches!(error, FetchError::Malformed(_)));
}

#[tokio::test]
async fn server_error_maps_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mentors"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let error = client_for(&server).mentors().await.unwrap_err();
    assert_eq!(error, FetchError::Status(500));
}

#[tokio::test]
async fn empty_result_is_distinct_from_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let state = Loaded::from_result(client.services().await);
    assert_eq!(state, Loaded::Empty);
    assert!(!matches!(state, Loaded::Failed(_)));
}

#[tokio::test]
async fn events_request_active_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events"))
        .and(query_param("isActive", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "ev-1",
                "titleUz": "Pitch kuni",
                "titleEn": "Pitch Day",
                "category": "PITCH_DAY",
                "format": "OFFLINE",
                "locationUz": "Toshkent IT Park",
                "startDate": "2026-09-14T10:00:00Z",
                "price": 0,
                "maxParticipants": 50,
                "registeredCount": 47
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let events = client_for(&server).events().await.unwrap();
    assert_eq!(events.len(), 1);

    let event = &events[0];
    assert_eq!(event.title(Locale::En), "Pitch Day");
    assert_eq!(event.location(Locale::En), "Toshkent IT Park");
    assert!(!event.is_online());
    assert!(event.is_free());
    assert_eq!(event.spots_left(), Some(3));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    // Nothing listens here; the connection is refused immediately.
    let config = ClientConfig::new()
        .with_base_url(Url::parse("http://127.0.0.1:9").unwrap());
    let client = ApiClient::new(&config).unwrap();

    let error = client.startups().await.unwrap_err();
    assert!(matches!(
        error,
        FetchError::Transport(_) | FetchError::Timeout
    ));
}
