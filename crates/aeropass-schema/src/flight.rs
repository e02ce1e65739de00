//! Flight class and object resources.
//!
//! The class is the flight-level template shared by every passenger on
//! the flight; the object is one passenger's pass instance bound to its
//! class by id. Both carry the provider's camelCase field names on the
//! wire.

use serde::{Deserialize, Serialize};

use crate::common::{
    Barcode, Image, LatLongPoint, LinksModuleData, LocalizedString, Message, TextModuleData,
    TimeInterval,
};
use crate::template::ClassTemplateInfo;

/// Review state of a class resource.
///
/// New and updated classes always go back to `UnderReview`; approval is
/// the provider's side of the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    UnderReview,
    Approved,
    Rejected,
    Draft,
}

/// Lifecycle state of an object resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectState {
    Active,
    Completed,
    Expired,
    Inactive,
}

impl std::fmt::Display for ObjectState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
            Self::Expired => "EXPIRED",
            Self::Inactive => "INACTIVE",
        };
        write!(f, "{s}")
    }
}

/// Patch body that touches nothing but the lifecycle state.
///
/// Used by the expire/update-state operations, which must not read back
/// or merge any other field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectStatePatch {
    pub state: ObjectState,
}

/// Origin or destination airport details on a class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportInfo {
    pub airport_iata_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airport_name_override: Option<LocalizedString>,
}

/// Operating carrier identity on a class header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightCarrier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier_iata_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airline_name: Option<LocalizedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airline_logo: Option<Image>,
}

/// Flight number and carrier block on a class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightHeader {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_number_display_override: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<FlightCarrier>,
}

/// The flight-level pass template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightClass {
    /// Full resource id, `"{issuerId}.{classSuffix}"`.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_status: Option<ReviewStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex_background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<AirportInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<AirportInfo>,
    /// Scheduled departure, local airport time, ISO-8601 without offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_scheduled_departure_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_scheduled_arrival_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_boarding_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_header: Option<FlightHeader>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links_module_data: Option<LinksModuleData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_modules_data: Option<Vec<TextModuleData>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Message>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<LatLongPoint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_template_info: Option<ClassTemplateInfo>,
}

impl FlightClass {
    /// An id-only stub, used in save-token payloads that reference an
    /// already-inserted class.
    pub fn reference(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            issuer_name: None,
            review_status: None,
            hex_background_color: None,
            hero_image: None,
            origin: None,
            destination: None,
            local_scheduled_departure_date_time: None,
            local_scheduled_arrival_date_time: None,
            local_boarding_date_time: None,
            flight_header: None,
            links_module_data: None,
            text_modules_data: None,
            messages: None,
            locations: None,
            class_template_info: None,
        }
    }
}

/// Seating and boarding block on an object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardingAndSeatingInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boarding_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boarding_privilege_image: Option<Image>,
}

/// Frequent flyer program membership on a reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequentFlyerInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequent_flyer_program_name: Option<LocalizedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequent_flyer_number: Option<String>,
}

/// Reservation block on an object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eticket_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequent_flyer_info: Option<FrequentFlyerInfo>,
}

/// The passenger-level pass instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightObject {
    /// Full resource id, `"{issuerId}.{objectSuffix}"`.
    pub id: String,
    /// Id of the class this object is bound to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ObjectState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passenger_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boarding_and_seating_info: Option<BoardingAndSeatingInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_program_logo: Option<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<Barcode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation_info: Option<ReservationInfo>,
    /// Window during which the pass is usable; the end drives the
    /// client-side lazy-expiry check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_time_interval: Option<TimeInterval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_modules_data: Option<Vec<TextModuleData>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links_module_data: Option<LinksModuleData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Message>>,
}

impl FlightObject {
    /// An id-only stub for save-token payloads.
    pub fn reference(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            class_id: None,
            state: None,
            passenger_name: None,
            boarding_and_seating_info: None,
            security_program_logo: None,
            barcode: None,
            reservation_info: None,
            valid_time_interval: None,
            text_modules_data: None,
            links_module_data: None,
            hero_image: None,
            messages: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_status_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&ReviewStatus::UnderReview).unwrap(),
            "\"UNDER_REVIEW\""
        );
        assert_eq!(
            serde_json::to_string(&ReviewStatus::Approved).unwrap(),
            "\"APPROVED\""
        );
    }

    #[test]
    fn object_state_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&ObjectState::Expired).unwrap(),
            "\"EXPIRED\""
        );
        let back: ObjectState = serde_json::from_str("\"INACTIVE\"").unwrap();
        assert_eq!(back, ObjectState::Inactive);
    }

    #[test]
    fn class_reference_serializes_id_only() {
        let class = FlightClass::reference("3388000000022913608.20250101");
        let json = serde_json::to_value(&class).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["id"], "3388000000022913608.20250101");
    }

    #[test]
    fn object_reference_serializes_id_only() {
        let object = FlightObject::reference("3388000000022913608.OBJ1");
        let json = serde_json::to_string(&object).unwrap();
        assert_eq!(json, r#"{"id":"3388000000022913608.OBJ1"}"#);
    }

    #[test]
    fn state_patch_is_state_only() {
        let patch = ObjectStatePatch {
            state: ObjectState::Expired,
        };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"state":"EXPIRED"}"#
        );
    }

    #[test]
    fn identical_classes_serialize_identically() {
        let build = || {
            let mut class = FlightClass::reference("1.A");
            class.review_status = Some(ReviewStatus::UnderReview);
            class.local_scheduled_departure_date_time = Some("2025-01-01T08:30:00".into());
            class
        };
        assert_eq!(
            serde_json::to_string(&build()).unwrap(),
            serde_json::to_string(&build()).unwrap()
        );
    }

    #[test]
    fn camel_case_field_names_on_the_wire() {
        let mut object = FlightObject::reference("1.B");
        object.class_id = Some("1.A".into());
        object.passenger_name = Some("WANG HSIAOMING".into());
        let json = serde_json::to_string(&object).unwrap();
        assert!(json.contains("\"classId\""));
        assert!(json.contains("\"passengerName\""));
        assert!(!json.contains("class_id"));
    }
}
