//! # aeropass-token — Save-to-Wallet Token Issuance
//!
//! Builds and signs the "save to wallet" JWT: a compact RS256 token
//! whose payload references one or two pass resources, rendered as the
//! trailing path segment of the provider's save URL.
//!
//! Tenant isolation is enforced by construction: a [`SaveLinkIssuer`]
//! is built from exactly one tenant's [`SigningCredential`] and there
//! is no process-global key store a caller could reach across. A token
//! signed by tenant A's issuer can never carry tenant B's key id.

pub mod credential;
pub mod error;
pub mod issuer;

pub use credential::SigningCredential;
pub use error::SigningError;
pub use issuer::{SaveLinkIssuer, SAVE_LINK_BASE};
