//! # Tenant Configuration
//!
//! Static per-airline settings: wallet issuer identity, credential
//! source, branding assets, and the outbound API access parameters.
//! One [`TenantConfig`] is loaded per tenant at startup and held
//! immutable for the process lifetime; concurrent readers share it
//! without synchronization.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::identity::{IssuerId, TenantCode};

/// One image asset referenced by URI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    /// Publicly reachable image URI.
    pub uri: String,
    /// Accessibility description shown by the wallet app.
    pub description: String,
}

/// A geographic point used for the pass's default location module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// One entry of the tenant's link module (website, check-in page, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkEntry {
    /// Stable id referenced by card templates.
    pub id: String,
    pub uri: String,
    pub description: String,
}

/// Branding image set for one tenant. Every asset is optional; absent
/// assets simply never appear on the pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BrandingAssets {
    /// Airline logo shown in the pass header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageAsset>,
    /// Banner image across the top of the pass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<ImageAsset>,
    /// Security program logo (e.g. TSA PreCheck), shown only for
    /// eligible passengers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_program_logo: Option<ImageAsset>,
    /// Boarding privilege image (e.g. SkyPriority), shown only for
    /// eligible passengers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boarding_privilege_image: Option<ImageAsset>,
}

/// Outbound wallet provider API access for one tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletApiAccess {
    /// Base URL of the provider's REST API.
    #[serde(default = "WalletApiAccess::default_base_url")]
    pub base_url: String,
    /// Bearer-style service credential presented on every call.
    pub bearer_token: String,
    /// Per-request timeout in seconds.
    #[serde(default = "WalletApiAccess::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl WalletApiAccess {
    fn default_base_url() -> String {
        "https://walletobjects.googleapis.com/walletobjects/v1".to_string()
    }

    fn default_timeout_secs() -> u64 {
        30
    }
}

/// Complete static configuration for one tenant (airline).
///
/// Loaded once from the tenants file at startup; the registry hands out
/// shared references and nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantConfig {
    /// IATA airline designator keying this tenant.
    pub tenant_code: TenantCode,
    /// Wallet issuer id owning this tenant's resource namespace.
    pub issuer_id: IssuerId,
    /// Issuer display name shown on the pass.
    pub issuer_name: String,
    /// Path to the service-account key file used for token signing.
    pub credential_path: PathBuf,
    /// Branding image set.
    #[serde(default)]
    pub branding: BrandingAssets,
    /// Card background color (`#RRGGBB`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color_hex: Option<String>,
    /// Default location attached to issued classes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_location: Option<GeoPoint>,
    /// Tenant-level links (website, contact, ...).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkEntry>,
    /// Origins allowed to render the save-to-wallet button. When empty
    /// the token issuer falls back to the provider default.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_origins: Vec<String>,
    /// Outbound provider API access.
    pub wallet_api: WalletApiAccess,
}
