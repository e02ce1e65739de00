//! aeropass API server entry point.
//!
//! Configuration comes from the environment:
//! - `AEROPASS_TENANTS` — path to the tenants JSON file
//!   (default `tenants.json`)
//! - `AEROPASS_PORT` — listen port (default 8080)
//! - `RUST_LOG` — tracing filter (default `info`)

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use aeropass_api::registry::TenantRegistry;
use aeropass_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let tenants_path = PathBuf::from(
        std::env::var("AEROPASS_TENANTS").unwrap_or_else(|_| "tenants.json".to_string()),
    );
    let registry = TenantRegistry::from_file(&tenants_path)
        .with_context(|| format!("loading tenants from {}", tenants_path.display()))?;
    if registry.is_empty() {
        anyhow::bail!("tenants file {} defines no tenants", tenants_path.display());
    }
    tracing::info!(tenants = registry.len(), "tenant registry loaded");

    let port: u16 = std::env::var("AEROPASS_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);

    let app = aeropass_api::app(AppState::new(registry));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("aeropass-api listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind listener")?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("server error")?;
    Ok(())
}
