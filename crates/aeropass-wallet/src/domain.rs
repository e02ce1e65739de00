//! Inbound domain models for flight and passenger data.
//!
//! These mirror what airline departure-control feeds actually deliver:
//! dates as `yyyy/MM/dd`, times as `HH:mm`, names already uppercased,
//! seat/zone/sequence values as short display strings. The builder
//! validates and converts them; nothing here is wire format.

use aeropass_core::LocalizedText;
use serde::{Deserialize, Serialize};

/// An airline identity within a flight: the carrier code plus flight
/// number, with optional display branding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarrierInput {
    /// Two-letter IATA carrier code (e.g. `"CI"`).
    pub carrier_code: String,
    /// Flight number digits without the carrier prefix (e.g. `"123"`).
    pub flight_number: String,
    /// Airline display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airline_name: Option<LocalizedText>,
    /// Airline logo URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airline_logo_uri: Option<String>,
}

/// Airport details for either end of the flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportInput {
    /// Three-letter IATA airport code (e.g. `"TPE"`).
    pub iata: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate: Option<String>,
    /// Airport display name override; when absent the provider shows
    /// its own airport name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_override: Option<LocalizedText>,
}

/// A link shown on the pass (check-in info, baggage info, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkInput {
    pub uri: String,
    pub description: String,
}

/// Flight-level input: everything needed to build one class resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightInput {
    /// Unique per-tenant class id suffix (typically flight + date).
    pub class_suffix: String,
    /// Operating carrier and flight number.
    pub operating: CarrierInput,
    pub departure_airport: AirportInput,
    pub arrival_airport: AirportInput,
    /// `yyyy/MM/dd`.
    pub departure_date: String,
    /// `HH:mm`.
    pub departure_time: String,
    pub arrival_date: String,
    pub arrival_time: String,
    pub boarding_date: String,
    /// Latest boarding time, `HH:mm`.
    pub boarding_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airport_checkin_link: Option<LinkInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baggage_info_link: Option<LinkInput>,
    /// Reminder text block (header + body).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_header: Option<LocalizedText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_body: Option<LocalizedText>,
}

/// Passenger-level input: everything needed to build one object resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerInput {
    /// Sales channel the pass was requested through (`"WEB"`, ...);
    /// surfaces as the barcode alternate text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    /// Suffix of the class this passenger flies on.
    pub class_suffix: String,
    /// Unique per-tenant object id suffix.
    pub object_suffix: String,
    /// Display name, surname first (`"WANG HSIAOMING"`).
    pub passenger_name: String,
    /// Marketing carrier when the ticket was sold under a codeshare.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketing: Option<CarrierInput>,
    /// Boarding group/zone (`"ZONE2"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boarding_zone: Option<String>,
    /// One-letter booking class (`"C"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_number: Option<String>,
    /// Check-in sequence number (`"SEQ:002"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<String>,
    /// Cabin display name (`"BUSINESS CLASS"`). This, not the booking
    /// class letter, feeds the seat-class field on the pass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cabin_class_name: Option<String>,
    /// Show the security program logo (US departures only).
    #[serde(default)]
    pub is_tsa_precheck: bool,
    /// Show the boarding privilege image.
    #[serde(default)]
    pub is_sky_priority: bool,
    /// Frequent flyer tier description (`"PARAGON"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequent_flyer_tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequent_flyer_number: Option<String>,
    /// Lounge access note (`"LOUNGE-VLSF"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lounge_info: Option<String>,
    /// Booking record locator (`"6LTO8V"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eticket_number: Option<String>,
    /// Raw barcode value; falls back to the e-ticket number when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode_value: Option<String>,
    /// Special meal codes (`["VOML", "XXML"]`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_meal_codes: Vec<String>,
    /// Baggage tag numbers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub baggage_tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passenger_input_minimal_json() {
        let json = r#"{
            "class_suffix": "CI123-20250101",
            "object_suffix": "CI123-20250101-001",
            "passenger_name": "WANG HSIAOMING"
        }"#;
        let input: PassengerInput = serde_json::from_str(json).unwrap();
        assert!(!input.is_tsa_precheck);
        assert!(!input.is_sky_priority);
        assert!(input.special_meal_codes.is_empty());
    }

    #[test]
    fn flight_input_roundtrip() {
        let json = r#"{
            "class_suffix": "CI123-20250101",
            "operating": { "carrier_code": "CI", "flight_number": "123" },
            "departure_airport": { "iata": "TPE", "terminal": "1", "gate": "A1" },
            "arrival_airport": { "iata": "NRT", "terminal": "2" },
            "departure_date": "2025/01/01",
            "departure_time": "08:30",
            "arrival_date": "2025/01/01",
            "arrival_time": "12:30",
            "boarding_date": "2025/01/01",
            "boarding_time": "08:00"
        }"#;
        let input: FlightInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.operating.carrier_code, "CI");
        assert!(input.airport_checkin_link.is_none());
        let back = serde_json::to_string(&input).unwrap();
        let reparsed: FlightInput = serde_json::from_str(&back).unwrap();
        assert_eq!(reparsed, input);
    }
}
