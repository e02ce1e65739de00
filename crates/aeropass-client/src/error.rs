//! Wallet API client error types.

/// Errors from wallet provider API calls.
///
/// HTTP statuses with a local meaning get their own variants so callers
/// can branch without inspecting status codes; everything else the
/// provider reports lands in [`WalletApiError::Api`] with whatever
/// diagnostic context the error body carried.
#[derive(Debug, thiserror::Error)]
pub enum WalletApiError {
    /// The resource does not exist upstream (HTTP 404).
    #[error("wallet resource {resource_id} not found")]
    NotFound {
        /// The id that was requested.
        resource_id: String,
    },

    /// The resource already exists upstream (HTTP 409, insert only).
    #[error("wallet resource {resource_id} already exists")]
    Conflict {
        /// The id that collided.
        resource_id: String,
    },

    /// The provider reported any other error.
    #[error("wallet API {operation} returned {status}: {message}")]
    Api {
        operation: &'static str,
        status: u16,
        /// Provider error code, when the body carried one.
        code: Option<String>,
        message: String,
    },

    /// Transport-level failure reaching the provider.
    #[error("transport error during {operation}: {source}")]
    Transport {
        operation: &'static str,
        source: reqwest::Error,
    },

    /// A 2xx response body did not match the resource schema.
    #[error("failed to deserialize {operation} response: {source}")]
    Deserialization {
        operation: &'static str,
        source: reqwest::Error,
    },

    /// Client construction failed (bad token characters, bad base URL).
    #[error("invalid wallet API configuration: {reason}")]
    InvalidConfig { reason: String },
}
