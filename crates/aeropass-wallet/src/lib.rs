//! # aeropass-wallet — Pass Construction Pipeline
//!
//! The pure transformation from airline/flight/passenger domain data
//! into the provider's resource schema. Nothing in this crate performs
//! I/O: given the same tenant configuration and the same inputs, the
//! builder produces identical resources every time.
//!
//! - [`domain`] — the inbound [`domain::FlightInput`] /
//!   [`domain::PassengerInput`] models as delivered by airline systems.
//! - [`catalog`] — the static template field catalog mapping logical
//!   field names to provider field paths, and the tenant-keyed card
//!   layouts built from it.
//! - [`builder`] — [`builder::build_class`] and
//!   [`builder::build_object`].
//! - [`lifecycle`] — the closed set of pass kinds with their
//!   save-token payload shapes, and the lazy validity predicate.

pub mod builder;
pub mod catalog;
pub mod domain;
pub mod lifecycle;

pub use builder::{build_class, build_object};
pub use catalog::card_template;
pub use domain::{AirportInput, CarrierInput, FlightInput, PassengerInput};
pub use lifecycle::{is_past_validity, PassKind};
