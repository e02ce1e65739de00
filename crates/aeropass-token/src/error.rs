//! Signing and credential errors.

use std::path::PathBuf;

/// Errors from credential loading and token signing.
///
/// Always fatal to the request that hit them — no partial or degraded
/// save link is ever issued.
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    /// The service-account key file could not be read.
    #[error("failed to read credential file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The key file was readable but not a valid service-account key.
    #[error("malformed service-account key file {path:?}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    /// The embedded private key is not valid RSA PEM material.
    #[error("invalid RSA private key for key id {key_id:?}: {source}")]
    InvalidKey {
        key_id: String,
        source: jsonwebtoken::errors::Error,
    },

    /// JWT encoding failed.
    #[error("token signing failed: {0}")]
    Encode(#[from] jsonwebtoken::errors::Error),
}
