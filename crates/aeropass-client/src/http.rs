//! Shared HTTP plumbing for the resource repositories.
//!
//! Wraps a `reqwest::Client` with the tenant's bearer credential, the
//! provider base URL, and uniform status→error mapping. The logging
//! wrapper [`traced`] is applied around every repository call so the
//! operation name and resource id reach the log exactly once, at the
//! boundary, instead of being re-implemented per method.

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::WalletApiError;

/// Configuration for one tenant's wallet API client.
#[derive(Debug, Clone)]
pub struct WalletApiConfig {
    /// Base URL of the provider REST API
    /// (e.g. `https://walletobjects.googleapis.com/walletobjects/v1`).
    pub base_url: String,
    /// Bearer-style service credential.
    pub bearer_token: String,
    /// Request timeout in seconds (default: 30).
    pub timeout_secs: u64,
}

impl WalletApiConfig {
    /// Create a new configuration with the default timeout.
    pub fn new(base_url: impl Into<String>, bearer_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bearer_token: bearer_token.into(),
            timeout_secs: 30,
        }
    }
}

/// Error body shape the provider returns on failures.
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for one tenant's slice of the wallet provider API.
///
/// `Send + Sync`; designed to be shared via `Arc` across async tasks.
#[derive(Debug)]
pub struct WalletApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl WalletApiClient {
    /// Build a client from configuration.
    pub fn new(config: WalletApiConfig) -> Result<Self, WalletApiError> {
        let mut headers = reqwest::header::HeaderMap::new();
        let mut auth = reqwest::header::HeaderValue::from_str(&format!(
            "Bearer {}",
            config.bearer_token
        ))
        .map_err(|_| WalletApiError::InvalidConfig {
            reason: "invalid bearer token characters".into(),
        })?;
        auth.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, auth);
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| WalletApiError::InvalidConfig {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub(crate) fn resource_url(&self, kind: &str, resource_id: &str) -> String {
        format!("{}/{kind}/{resource_id}", self.base_url)
    }

    pub(crate) fn collection_url(&self, kind: &str) -> String {
        format!("{}/{kind}", self.base_url)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Send a request and map the response into a typed resource or a
    /// [`WalletApiError`].
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        resource_id: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, WalletApiError> {
        let response = request
            .send()
            .await
            .map_err(|source| WalletApiError::Transport { operation, source })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(WalletApiError::NotFound {
                resource_id: resource_id.to_string(),
            });
        }
        if status == reqwest::StatusCode::CONFLICT {
            return Err(WalletApiError::Conflict {
                resource_id: resource_id.to_string(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let (code, message) = match serde_json::from_str::<ProviderErrorBody>(&body) {
                Ok(parsed) => (
                    parsed.error.status,
                    parsed.error.message.unwrap_or(body),
                ),
                Err(_) => (None, body),
            };
            return Err(WalletApiError::Api {
                operation,
                status: status.as_u16(),
                code,
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|source| WalletApiError::Deserialization { operation, source })
    }
}

/// Run a repository call with structured logging around it.
///
/// Success logs at debug, failure at error with the display form of the
/// error; the error is always re-raised untouched.
pub(crate) async fn traced<T, F>(
    operation: &'static str,
    resource_id: &str,
    fut: F,
) -> Result<T, WalletApiError>
where
    F: Future<Output = Result<T, WalletApiError>>,
{
    match fut.await {
        Ok(value) => {
            tracing::debug!(operation, resource_id, "wallet API call succeeded");
            Ok(value)
        }
        Err(error) => {
            tracing::error!(operation, resource_id, %error, "wallet API call failed");
            Err(error)
        }
    }
}
