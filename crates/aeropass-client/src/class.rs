//! Flight class resource operations.

use std::sync::Arc;

use aeropass_schema::common::AddMessageRequest;
use aeropass_schema::flight::FlightClass;

use crate::error::WalletApiError;
use crate::http::{traced, WalletApiClient};

const KIND: &str = "flightClass";

/// The add-message operation wraps the updated resource in an envelope.
#[derive(Debug, serde::Deserialize)]
struct AddMessageResponse {
    resource: FlightClass,
}

/// CRUD operations on the provider's flight class resource.
#[derive(Debug, Clone)]
pub struct FlightClassRepository {
    client: Arc<WalletApiClient>,
}

impl FlightClassRepository {
    pub fn new(client: Arc<WalletApiClient>) -> Self {
        Self { client }
    }

    /// Fetch a class by full resource id.
    pub async fn get(&self, resource_id: &str) -> Result<FlightClass, WalletApiError> {
        let url = self.client.resource_url(KIND, resource_id);
        traced("get flightClass", resource_id, async {
            self.client
                .execute("get flightClass", resource_id, self.client.http().get(&url))
                .await
        })
        .await
    }

    /// Create a new class. Not idempotent: inserting an existing id
    /// fails with [`WalletApiError::Conflict`].
    pub async fn insert(&self, class: &FlightClass) -> Result<FlightClass, WalletApiError> {
        let url = self.client.collection_url(KIND);
        traced("insert flightClass", &class.id, async {
            self.client
                .execute(
                    "insert flightClass",
                    &class.id,
                    self.client
                        .http()
                        .post(&url)
                        .json(class),
                )
                .await
        })
        .await
    }

    /// Replace an existing class.
    pub async fn update(&self, class: &FlightClass) -> Result<FlightClass, WalletApiError> {
        let url = self.client.resource_url(KIND, &class.id);
        traced("update flightClass", &class.id, async {
            self.client
                .execute(
                    "update flightClass",
                    &class.id,
                    self.client
                        .http()
                        .put(&url)
                        .json(class),
                )
                .await
        })
        .await
    }

    /// Partially update a class; only the fields present in `class`
    /// change upstream.
    pub async fn patch(&self, class: &FlightClass) -> Result<FlightClass, WalletApiError> {
        let url = self.client.resource_url(KIND, &class.id);
        traced("patch flightClass", &class.id, async {
            self.client
                .execute(
                    "patch flightClass",
                    &class.id,
                    self.client
                        .http()
                        .patch(&url)
                        .json(class),
                )
                .await
        })
        .await
    }

    /// Push a message onto an existing class.
    pub async fn add_message(
        &self,
        resource_id: &str,
        request: &AddMessageRequest,
    ) -> Result<FlightClass, WalletApiError> {
        let url = format!("{}/addMessage", self.client.resource_url(KIND, resource_id));
        traced("addMessage flightClass", resource_id, async {
            self.client
                .execute::<AddMessageResponse>(
                    "addMessage flightClass",
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
}
