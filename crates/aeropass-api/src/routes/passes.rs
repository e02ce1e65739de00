//! Boarding-pass endpoints, nested under `/v1/tenants/{tenant}`.
//!
//! Every handler resolves its tenant context explicitly from the
//! registry before doing anything else; ids arriving without the issuer
//! prefix are qualified inside the orchestration layer.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use aeropass_core::TenantCode;
use aeropass_schema::common::AddMessageRequest;
use aeropass_schema::flight::{FlightClass, FlightObject, ObjectState};
use aeropass_wallet::{FlightInput, PassengerInput};

use crate::error::AppError;
use crate::orchestration::PassService;
use crate::registry::TenantContext;
use crate::state::AppState;

/// Router for all per-tenant pass routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/classes", post(create_class))
        .route("/classes/import", post(import_class))
        .route(
            "/classes/:id",
            get(get_class).put(update_class).patch(patch_class),
        )
        .route("/classes/:id/messages", post(add_class_message))
        .route("/objects", post(create_object))
        .route("/objects/import", post(import_object))
        .route(
            "/objects/:id",
            get(get_object).put(update_object).patch(patch_object),
        )
        .route("/objects/:id/messages", post(add_object_message))
        .route("/objects/:id/expire", post(expire_object))
        .route("/objects/:id/state", post(update_object_state))
        .route("/save-link", get(save_link))
}

fn service(state: &AppState, tenant: &str) -> Result<PassService, AppError> {
    let context = resolve(state, tenant)?;
    Ok(PassService::new(context))
}

fn resolve(state: &AppState, tenant: &str) -> Result<Arc<TenantContext>, AppError> {
    let code = TenantCode::new(tenant)
        .map_err(|_| AppError::TenantNotFound(tenant.to_string()))?;
    state
        .registry
        .get(&code)
        .ok_or_else(|| AppError::TenantNotFound(tenant.to_string()))
}

async fn create_class(
    State(state): State<AppState>,
    Path(tenant): Path<String>,
    Json(input): Json<FlightInput>,
) -> Result<Json<FlightClass>, AppError> {
    let service = service(&state, &tenant)?;
    Ok(Json(service.create_class(&input).await?))
}

async fn import_class(
    State(state): State<AppState>,
    Path(tenant): Path<String>,
    Json(class): Json<FlightClass>,
) -> Result<Json<FlightClass>, AppError> {
    let service = service(&state, &tenant)?;
    Ok(Json(service.insert_class(class).await?))
}

async fn import_object(
    State(state): State<AppState>,
    Path(tenant): Path<String>,
    Json(object): Json<FlightObject>,
) -> Result<Json<FlightObject>, AppError> {
    let service = service(&state, &tenant)?;
    Ok(Json(service.insert_object(object).await?))
}

async fn get_class(
    State(state): State<AppState>,
    Path((tenant, id)): Path<(String, String)>,
) -> Result<Json<FlightClass>, AppError> {
    let service = service(&state, &tenant)?;
    Ok(Json(service.get_class(&id).await?))
}

async fn update_class(
    State(state): State<AppState>,
    Path((tenant, id)): Path<(String, String)>,
    Json(class): Json<FlightClass>,
) -> Result<Json<FlightClass>, AppError> {
    let service = service(&state, &tenant)?;
    Ok(Json(service.update_class(&id, class).await?))
}

async fn patch_class(
    State(state): State<AppState>,
    Path((tenant, id)): Path<(String, String)>,
    Json(class): Json<FlightClass>,
) -> Result<Json<FlightClass>, AppError> {
    let service = service(&state, &tenant)?;
    Ok(Json(service.patch_class(&id, class).await?))
}

async fn add_class_message(
    State(state): State<AppState>,
    Path((tenant, id)): Path<(String, String)>,
    Json(request): Json<AddMessageRequest>,
) -> Result<Json<FlightClass>, AppError> {
    let service = service(&state, &tenant)?;
    Ok(Json(service.add_class_message(&id, &request).await?))
}

async fn create_object(
    State(state): State<AppState>,
    Path(tenant): Path<String>,
    Json(input): Json<PassengerInput>,
) -> Result<Json<FlightObject>, AppError> {
    let service = service(&state, &tenant)?;
    Ok(Json(service.create_object(&input).await?))
}

async fn get_object(
    State(state): State<AppState>,
    Path((tenant, id)): Path<(String, String)>,
) -> Result<Json<FlightObject>, AppError> {
    let service = service(&state, &tenant)?;
    Ok(Json(service.get_object(&id).await?))
}

async fn update_object(
    State(state): State<AppState>,
    Path((tenant, id)): Path<(String, String)>,
    Json(object): Json<FlightObject>,
) -> Result<Json<FlightObject>, AppError> {
    let service = service(&state, &tenant)?;
    Ok(Json(service.update_object(&id, object).await?))
}

async fn patch_object(
    State(state): State<AppState>,
    Path((tenant, id)): Path<(String, String)>,
    Json(object): Json<FlightObject>,
) -> Result<Json<FlightObject>, AppError> {
    let service = service(&state, &tenant)?;
    Ok(Json(service.patch_object(&id, object).await?))
}

async fn add_object_message(
    State(state): State<AppState>,
    Path((tenant, id)): Path<(String, String)>,
    Json(request): Json<AddMessageRequest>,
) -> Result<Json<FlightObject>, AppError> {
    let service = service(&state, &tenant)?;
    Ok(Json(service.add_object_message(&id, &request).await?))
}

async fn expire_object(
    State(state): State<AppState>,
    Path((tenant, id)): Path<(String, String)>,
) -> Result<Json<FlightObject>, AppError> {
    let service = service(&state, &tenant)?;
    Ok(Json(service.expire_object(&id).await?))
}

/// Body of the update-state endpoint.
#[derive(Debug, Deserialize)]
pub struct UpdateStateRequest {
    pub state: ObjectState,
}

async fn update_object_state(
    State(state): State<AppState>,
    Path((tenant, id)): Path<(String, String)>,
    Json(request): Json<UpdateStateRequest>,
) -> Result<Json<FlightObject>, AppError> {
    let service = service(&state, &tenant)?;
    Ok(Json(service.update_object_state(&id, request.state).await?))
}

/// Query of the save-link endpoint: an object reference and optionally
/// its class.
#[derive(Debug, Deserialize)]
pub struct SaveLinkQuery {
    #[serde(default)]
    pub class: Option<String>,
    pub object: String,
}

/// Response carrying the signed save URL.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveLinkResponse {
    pub save_url: String,
}

async fn save_link(
    State(state): State<AppState>,
    Path(tenant): Path<String>,
    Query(query): Query<SaveLinkQuery>,
) -> Result<Json<SaveLinkResponse>, AppError> {
    let service = service(&state, &tenant)?;
    let save_url = service.save_link(query.class.as_deref(), &query.object)?;
    Ok(Json(SaveLinkResponse { save_url }))
}
