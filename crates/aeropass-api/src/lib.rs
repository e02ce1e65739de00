//! # aeropass-api — Inbound REST Surface
//!
//! Multi-tenant boarding-pass issuance over HTTP. Requests are keyed by
//! an airline tenant code path parameter; each tenant's credential,
//! branding, and resource namespace are isolated behind the
//! [`registry::TenantRegistry`] built once at startup.
//!
//! ## API Surface
//!
//! | Route (under `/v1/tenants/{tenant}`)  | Operation                       |
//! |---------------------------------------|---------------------------------|
//! | `POST /classes`                       | build + insert a flight class   |
//! | `POST /classes/import`                | insert a pre-built class        |
//! | `GET/PUT/PATCH /classes/{id}`         | fetch / update / patch a class  |
//! | `POST /classes/{id}/messages`         | push a message onto a class     |
//! | `POST /objects`                       | build + insert a pass object    |
//! | `POST /objects/import`                | insert a pre-built object       |
//! | `GET/PUT/PATCH /objects/{id}`         | fetch / update / patch an object|
//! | `POST /objects/{id}/messages`         | push a message onto an object   |
//! | `POST /objects/{id}/expire`           | state-only patch to EXPIRED     |
//! | `POST /objects/{id}/state`            | state-only patch                |
//! | `GET /save-link`                      | sign a save-to-wallet URL       |
//!
//! `/health` is mounted outside the tenant scope.

pub mod error;
pub mod orchestration;
pub mod registry;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Assemble the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/v1/tenants/:tenant", routes::passes::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
