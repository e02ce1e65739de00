//! Per-tenant signing credential.
//!
//! Loaded once at startup from the tenant's service-account key file
//! and held for the process lifetime. The PEM text is wrapped in
//! [`Zeroizing`] so the raw key material is wiped as soon as it has
//! been parsed into the signing key.

use std::path::Path;

use jsonwebtoken::EncodingKey;
use serde::Deserialize;
use zeroize::Zeroizing;

use crate::error::SigningError;

/// On-disk shape of a service-account key file. Only the three fields
/// the signer needs are read; the rest of the file is ignored.
#[derive(Deserialize)]
struct ServiceAccountKey {
    client_email: String,
    private_key_id: String,
    private_key: String,
}

/// One tenant's signing identity: the issuer subject, the published key
/// id, and the parsed RSA signing key.
pub struct SigningCredential {
    issuer_subject_id: String,
    key_id: String,
    encoding_key: EncodingKey,
}

impl SigningCredential {
    /// Load a credential from a service-account key file.
    pub fn from_service_account_file(path: &Path) -> Result<Self, SigningError> {
        let raw = Zeroizing::new(std::fs::read_to_string(path).map_err(|source| {
            SigningError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?);
        let key: ServiceAccountKey =
            serde_json::from_str(&raw).map_err(|e| SigningError::Malformed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Self::from_parts(key.client_email, key.private_key_id, &key.private_key)
    }

    /// Build a credential from already-loaded parts. The PEM text is
    /// only borrowed; callers owning it should zeroize after use.
    pub fn from_parts(
        issuer_subject_id: impl Into<String>,
        key_id: impl Into<String>,
        private_key_pem: &str,
    ) -> Result<Self, SigningError> {
        let key_id = key_id.into();
        let encoding_key =
            EncodingKey::from_rsa_pem(private_key_pem.as_bytes()).map_err(|source| {
                SigningError::InvalidKey {
                    key_id: key_id.clone(),
                    source,
                }
            })?;
        Ok(Self {
            issuer_subject_id: issuer_subject_id.into(),
            key_id,
            encoding_key,
        })
    }

    /// The `iss` claim value: the service-account email.
    pub fn issuer_subject_id(&self) -> &str {
        &self.issuer_subject_id
    }

    /// The `kid` published in every token header.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    pub(crate) fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }
}

impl std::fmt::Debug for SigningCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningCredential")
            .field("issuer_subject_id", &self.issuer_subject_id)
            .field("key_id", &self.key_id)
            .field("encoding_key", &"<redacted>")
            .finish()
    }
}
