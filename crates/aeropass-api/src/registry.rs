//! # Tenant Registry
//!
//! The explicit mapping from tenant code to a fully constructed tenant
//! context: configuration, signing issuer, and repository handles.
//! Built once at startup from the tenants file and shared read-only
//! for the process lifetime.
//!
//! Every operation addresses its tenant through this registry; there is
//! no ambient or implicit tenant resolution anywhere in the service,
//! so one tenant's credential can never leak into another's request.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use aeropass_client::{
    FlightClassRepository, FlightObjectRepository, WalletApiClient, WalletApiConfig,
    WalletApiError,
};
use aeropass_core::{TenantCode, TenantConfig};
use aeropass_token::{SaveLinkIssuer, SigningCredential, SigningError};

/// Errors from registry construction. These abort startup — a process
/// that cannot load every configured tenant must not serve traffic.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The tenants file could not be read.
    #[error("failed to read tenants file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The tenants file is not valid JSON for a list of tenant configs.
    #[error("malformed tenants file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Two tenants share a code.
    #[error("duplicate tenant code {code}")]
    Duplicate { code: TenantCode },

    /// A tenant's signing credential failed to load.
    #[error(transparent)]
    Credential(#[from] SigningError),

    /// A tenant's wallet API client failed to build.
    #[error(transparent)]
    Client(#[from] WalletApiError),
}

/// Everything one tenant's requests need, constructed once.
pub struct TenantContext {
    pub config: TenantConfig,
    pub issuer: SaveLinkIssuer,
    pub classes: FlightClassRepository,
    pub objects: FlightObjectRepository,
}

impl TenantContext {
    /// Construct the context for one tenant: load the signing
    /// credential and build the API client plus repositories.
    pub fn build(config: TenantConfig) -> Result<Self, RegistryError> {
        let credential = SigningCredential::from_service_account_file(&config.credential_path)?;
        let issuer = SaveLinkIssuer::new(credential, config.allowed_origins.clone());

        let client = Arc::new(WalletApiClient::new(WalletApiConfig {
            base_url: config.wallet_api.base_url.clone(),
            bearer_token: config.wallet_api.bearer_token.clone(),
            timeout_secs: config.wallet_api.timeout_secs,
        })?);

        Ok(Self {
            config,
            issuer,
            classes: FlightClassRepository::new(client.clone()),
            objects: FlightObjectRepository::new(client),
        })
    }
}

/// Immutable map of tenant code → tenant context.
pub struct TenantRegistry {
    tenants: HashMap<TenantCode, Arc<TenantContext>>,
}

impl TenantRegistry {
    /// Load all tenants from a JSON file holding an array of tenant
    /// configurations.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let raw = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let configs: Vec<TenantConfig> =
            serde_json::from_str(&raw).map_err(|source| RegistryError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_configs(configs)
    }

    /// Build a registry from already-parsed configurations.
    pub fn from_configs(configs: Vec<TenantConfig>) -> Result<Self, RegistryError> {
        let mut tenants = HashMap::with_capacity(configs.len());
        for config in configs {
            let code = config.tenant_code.clone();
            let context = Arc::new(TenantContext::build(config)?);
            if tenants.insert(code.clone(), context).is_some() {
                return Err(RegistryError::Duplicate { code });
            }
            tracing::info!(tenant = %code, "tenant registered");
        }
        Ok(Self { tenants })
    }

    /// Look up a tenant context by code.
    pub fn get(&self, code: &TenantCode) -> Option<Arc<TenantContext>> {
        self.tenants.get(code).cloned()
    }

    /// Number of registered tenants.
    pub fn len(&self) -> usize {
        self.tenants.len()
    }

    /// Whether the registry holds no tenants at all.
    pub fn is_empty(&self) -> bool {
        self.tenants.is_empty()
    }
}
