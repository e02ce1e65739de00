//! Integration tests for the repository error mapping and wire
//! behavior against a mock provider.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use aeropass_client::{
    FlightClassRepository, FlightObjectRepository, WalletApiClient, WalletApiConfig,
    WalletApiError,
};
use aeropass_schema::common::{AddMessageRequest, Message};
use aeropass_schema::flight::{FlightClass, FlightObject, ObjectState};

const CLASS_ID: &str = "3388000000022913608.20250101";
const OBJECT_ID: &str = "3388000000022913608.20250101-001";

async fn client_for(server: &MockServer) -> Arc<WalletApiClient> {
    Arc::new(
        WalletApiClient::new(WalletApiConfig::new(server.uri(), "test-token")).unwrap(),
    )
}

#[tokio::test]
async fn get_class_round_trips() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/flightClass/{CLASS_ID}")))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": CLASS_ID,
            "issuerName": "China Airlines",
            "reviewStatus": "UNDER_REVIEW",
        })))
        .mount(&server)
        .await;

    let repository = FlightClassRepository::new(client_for(&server).await);
    let class = repository.get(CLASS_ID).await.unwrap();
    assert_eq!(class.id, CLASS_ID);
    assert_eq!(class.issuer_name.as_deref(), Some("China Airlines"));
}

#[tokio::test]
async fn get_404_maps_to_not_found_with_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/flightObject/{OBJECT_ID}")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let repository = FlightObjectRepository::new(client_for(&server).await);
    let err = repository.get(OBJECT_ID).await.unwrap_err();
    match err {
        WalletApiError::NotFound { resource_id } => assert_eq!(resource_id, OBJECT_ID),
        other => panic!("expected NotFound, got: {other:?}"),
    }
}

#[tokio::test]
async fn insert_409_maps_to_conflict_with_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/flightClass"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&server)
        .await;

    let repository = FlightClassRepository::new(client_for(&server).await);
    let class = FlightClass::reference(CLASS_ID);
    let err = repository.insert(&class).await.unwrap_err();
    match err {
        WalletApiError::Conflict { resource_id } => assert_eq!(resource_id, CLASS_ID),
        other => panic!("expected Conflict, got: {other:?}"),
    }
}

#[tokio::test]
async fn provider_error_body_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/flightClass/{CLASS_ID}")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "status": "INVALID_ARGUMENT",
                "message": "reviewStatus is not writable",
            }
        })))
        .mount(&server)
        .await;

    let repository = FlightClassRepository::new(client_for(&server).await);
    let err = repository.get(CLASS_ID).await.unwrap_err();
    match err {
        WalletApiError::Api {
            status,
            code,
            message,
            ..
        } => {
            assert_eq!(status, 400);
            assert_eq!(code.as_deref(), Some("INVALID_ARGUMENT"));
            assert!(message.contains("reviewStatus"));
        }
        other => panic!("expected Api, got: {other:?}"),
    }
}

#[tokio::test]
async fn insert_posts_full_object_to_collection() {
    let server = MockServer::start().await;
    let mut object = FlightObject::reference(OBJECT_ID);
    object.class_id = Some(CLASS_ID.to_string());
    object.state = Some(ObjectState::Active);
    object.passenger_name = Some("WANG HSIAOMING".to_string());

    Mock::given(method("POST"))
        .and(path("/flightObject"))
        .and(body_json(&object))
        .respond_with(ResponseTemplate::new(200).set_body_json(&object))
        .expect(1)
        .mount(&server)
        .await;

    let repository = FlightObjectRepository::new(client_for(&server).await);
    let inserted = repository.insert(&object).await.unwrap();
    assert_eq!(inserted.passenger_name.as_deref(), Some("WANG HSIAOMING"));
}

#[tokio::test]
async fn expire_sends_state_only_patch() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(format!("/flightObject/{OBJECT_ID}")))
        .and(body_json(json!({ "state": "EXPIRED" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": OBJECT_ID,
            "state": "EXPIRED",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let repository = FlightObjectRepository::new(client_for(&server).await);
    let expired = repository.expire(OBJECT_ID).await.unwrap();
    assert_eq!(expired.state, Some(ObjectState::Expired));
}

#[tokio::test]
async fn update_state_twice_is_idempotent() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(format!("/flightObject/{OBJECT_ID}")))
        .and(body_json(json!({ "state": "EXPIRED" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": OBJECT_ID,
            "state": "EXPIRED",
        })))
        .expect(2)
        .mount(&server)
        .await;

    let repository = FlightObjectRepository::new(client_for(&server).await);
    let first = repository
        .update_state(OBJECT_ID, ObjectState::Expired)
        .await
        .unwrap();
    let second = repository
        .update_state(OBJECT_ID, ObjectState::Expired)
        .await
        .unwrap();
    assert_eq!(first.state, Some(ObjectState::Expired));
    assert_eq!(second.state, Some(ObjectState::Expired));
}

#[tokio::test]
async fn update_puts_resource_by_id() {
    let server = MockServer::start().await;
    let mut class = FlightClass::reference(CLASS_ID);
    class.issuer_name = Some("China Airlines".to_string());

    Mock::given(method("PUT"))
        .and(path(format!("/flightClass/{CLASS_ID}")))
        .and(body_json(&class))
        .respond_with(ResponseTemplate::new(200).set_body_json(&class))
        .expect(1)
        .mount(&server)
        .await;

    let repository = FlightClassRepository::new(client_for(&server).await);
    let updated = repository.update(&class).await.unwrap();
    assert_eq!(updated.id, CLASS_ID);
}

#[tokio::test]
async fn add_message_unwraps_resource_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/flightClass/{CLASS_ID}/addMessage")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resource": { "id": CLASS_ID }
        })))
        .mount(&server)
        .await;

    let repository = FlightClassRepository::new(client_for(&server).await);
    let request = AddMessageRequest {
        message: Message {
            id: Some("GateChange".to_string()),
            header: Some("Gate change".to_string()),
            body: Some("Departure gate is now B2".to_string()),
            ..Default::default()
        },
    };
    let class = repository.add_message(CLASS_ID, &request).await.unwrap();
    assert_eq!(class.id, CLASS_ID);
}

#[tokio::test]
async fn transport_failure_maps_to_transport_error() {
    // Nothing listens on this port.
    let client = Arc::new(
        WalletApiClient::new(WalletApiConfig::new("http://127.0.0.1:9", "t")).unwrap(),
    );
    let repository = FlightClassRepository::new(client);
    let err = repository.get(CLASS_ID).await.unwrap_err();
    assert!(matches!(err, WalletApiError::Transport { .. }));
}
