//! # aeropass-core — Domain Primitives for Wallet Pass Issuance
//!
//! Core value types shared by every other crate in the workspace:
//!
//! - Identifier newtypes ([`TenantCode`], [`IssuerId`]) that validate
//!   their format at construction time — you cannot hold an invalid
//!   tenant code.
//! - [`LocalizedText`], the default-language-plus-translations model
//!   used everywhere user-facing text appears on a pass.
//! - [`TenantConfig`], the per-airline static configuration loaded once
//!   at startup and never mutated afterwards.
//! - Local date/time combination ([`combine_local`]) and the
//!   fixed-width flight number formatter ([`format_flight_number`]).
//!
//! This crate performs no I/O and has no async surface. Everything here
//! is cheap to clone and safe to share across request handlers.

pub mod error;
pub mod identity;
pub mod localized;
pub mod tenant;
pub mod time;

pub use error::ValidationError;
pub use identity::{IssuerId, TenantCode};
pub use localized::{LocalizedText, Translation};
pub use tenant::{BrandingAssets, GeoPoint, ImageAsset, LinkEntry, TenantConfig, WalletApiAccess};
pub use time::{combine_local, format_flight_number};
