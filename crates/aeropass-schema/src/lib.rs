//! # aeropass-schema — Wallet Provider Wire Schema
//!
//! Serde models of the wallet provider's published JSON schema for the
//! two flight resource kinds and everything nested inside them. Field
//! names serialize in camelCase exactly as the provider expects, and
//! every optional field is omitted when absent — the provider treats
//! absent and explicit-null differently for some fields, so `None`
//! must never serialize as `null`.
//!
//! The module split mirrors the schema itself:
//!
//! - [`common`] — localized strings, images, links, text modules,
//!   messages, barcodes, time intervals, locations.
//! - [`flight`] — [`flight::FlightClass`] and [`flight::FlightObject`]
//!   with their nested airport/carrier/seating/reservation structures
//!   and the closed review-status / object-state enums.
//! - [`template`] — the card template override nodes whose field paths
//!   are referenced by string (`"class.origin.terminal"` etc.).

pub mod common;
pub mod flight;
pub mod template;

pub use common::{
    AddMessageRequest, Barcode, DateTimeValue, Image, ImageUri, LatLongPoint, LinksModuleData,
    LocalizedString, Message, TextModuleData, TimeInterval, TranslatedString, WalletUri,
};
pub use flight::{
    AirportInfo, BoardingAndSeatingInfo, FlightCarrier, FlightClass, FlightHeader, FlightObject,
    FrequentFlyerInfo, ObjectState, ObjectStatePatch, ReservationInfo, ReviewStatus,
};
pub use template::{
    BarcodeSectionDetail, CardBarcodeSectionDetails, CardRowOneItem, CardRowTemplateInfo,
    CardRowThreeItems, CardRowTwoItems, CardTemplateOverride, ClassTemplateInfo,
    DetailsItemInfo, DetailsTemplateOverride, FieldReference, FieldSelector, TemplateItem,
};
