//! # aeropass-client — Wallet Provider REST Client
//!
//! Thin typed CRUD façade over the wallet provider's REST API for the
//! two flight resource kinds. Transport and API errors are normalized
//! into [`WalletApiError`]; every call is logged with structured
//! context (operation, resource id) before an error is re-raised, and
//! nothing is ever swallowed.
//!
//! One [`WalletApiClient`] is built per tenant at startup and shared
//! read-only across requests; the repositories are cheap handles over
//! it.

pub mod class;
pub mod error;
pub mod http;
pub mod object;

pub use class::FlightClassRepository;
pub use error::WalletApiError;
pub use http::{WalletApiClient, WalletApiConfig};
pub use object::FlightObjectRepository;
