//! Flight object resource operations.

use std::sync::Arc;

use aeropass_schema::common::AddMessageRequest;
use aeropass_schema::flight::{FlightObject, ObjectState, ObjectStatePatch};

use crate::error::WalletApiError;
use crate::http::{traced, WalletApiClient};

const KIND: &str = "flightObject";

/// The add-message operation wraps the updated resource in an envelope.
#[derive(Debug, serde::Deserialize)]
struct AddMessageResponse {
    resource: FlightObject,
}

/// CRUD and lifecycle operations on the provider's flight object
/// resource.
#[derive(Debug, Clone)]
pub struct FlightObjectRepository {
    client: Arc<WalletApiClient>,
}

impl FlightObjectRepository {
    pub fn new(client: Arc<WalletApiClient>) -> Self {
        Self { client }
    }

    /// Fetch an object by full resource id.
    pub async fn get(&self, resource_id: &str) -> Result<FlightObject, WalletApiError> {
        let url = self.client.resource_url(KIND, resource_id);
        traced("get flightObject", resource_id, async {
            self.client
                .execute("get flightObject", resource_id, self.client.http().get(&url))
                .await
        })
        .await
    }

    /// Create a new object. Not idempotent: inserting an existing id
    /// fails with [`WalletApiError::Conflict`].
    pub async fn insert(&self, object: &FlightObject) -> Result<FlightObject, WalletApiError> {
        let url = self.client.collection_url(KIND);
        traced("insert flightObject", &object.id, async {
            self.client
                .execute(
                    "insert flightObject",
                    &object.id,
                    self.client
                        .http()
                        .post(&url)
                        .json(object),
                )
                .await
        })
        .await
    }

    /// Replace an existing object.
    pub async fn update(&self, object: &FlightObject) -> Result<FlightObject, WalletApiError> {
        let url = self.client.resource_url(KIND, &object.id);
        traced("update flightObject", &object.id, async {
            self.client
                .execute(
                    "update flightObject",
                    &object.id,
                    self.client
                        .http()
                        .put(&url)
                        .json(object),
                )
                .await
        })
        .await
    }

    /// Partially update an object; only the fields present in `object`
    /// change upstream.
    pub async fn patch(&self, object: &FlightObject) -> Result<FlightObject, WalletApiError> {
        let url = self.client.resource_url(KIND, &object.id);
        traced("patch flightObject", &object.id, async {
            self.client
                .execute(
                    "patch flightObject",
                    &object.id,
                    self.client
                        .http()
                        .patch(&url)
                        .json(object),
                )
                .await
        })
        .await
    }

    /// Push a message onto an existing object.
    pub async fn add_message(
        &self,
        resource_id: &str,
        request: &AddMessageRequest,
    ) -> Result<FlightObject, WalletApiError> {
        let url = format!("{}/addMessage", self.client.resource_url(KIND, resource_id));
        traced("addMessage flightObject", resource_id, async {
            self.client
                .execute::<AddMessageResponse>(
                    "addMessage flightObject",
                    resource_id,
                    self.client
                        .http()
                        .post(&url)
                        .json(request),
                )
                .await
                .map(|response| response.resource)
        })
        .await
    }

    /// Mark the pass expired. Sends a state-only patch — no other field
    /// is read back or merged.
    pub async fn expire(&self, resource_id: &str) -> Result<FlightObject, WalletApiError> {
        self.update_state(resource_id, ObjectState::Expired).await
    }

    /// Patch the lifecycle state and nothing else.
    pub async fn update_state(
        &self,
        resource_id: &str,
        state: ObjectState,
    ) -> Result<FlightObject, WalletApiError> {
        let url = self.client.resource_url(KIND, resource_id);
        let body = ObjectStatePatch { state };
        traced("updateState flightObject", resource_id, async {
            self.client
                .execute(
                    "updateState flightObject",
                    resource_id,
                    self.client
                        .http()
                        .patch(&url)
                        .json(&body),
                )
                .await
        })
        .await
    }
}
