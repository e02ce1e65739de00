//! Pass kinds and object lifecycle predicates.
//!
//! Object state transitions are one-way, client-initiated patches:
//! `ACTIVE → EXPIRED` (explicit expire, or computed past validity end),
//! `ACTIVE → COMPLETED` (boarded/flown), and any state `→ INACTIVE`
//! (deactivation). Nothing polls in the background — expiry is computed
//! lazily at update time through [`is_past_validity`].

use chrono::NaiveDateTime;
use serde_json::{json, Value};

use aeropass_schema::flight::FlightObject;

/// The closed set of pass kinds this service issues.
///
/// Each variant knows the save-token payload shape for its resource
/// kind. Adding a wallet kind means adding a variant here, not matching
/// on strings at the call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassKind {
    BoardingPass,
}

impl PassKind {
    /// Build the save-token `payload` claim referencing existing
    /// resources by id.
    ///
    /// With a class id the payload carries both collections; without
    /// one the class key is absent entirely (not null, not empty).
    pub fn save_payload(&self, class_id: Option<&str>, object_id: &str) -> Value {
        match self {
            Self::BoardingPass => {
                let mut payload = json!({
                    "flightObjects": [{ "id": object_id }],
                });
                if let Some(class_id) = class_id {
                    payload["flightClasses"] = json!([{ "id": class_id }]);
                }
                payload
            }
        }
    }
}

/// Whether the object's validity window has already closed at `now`.
///
/// Reads `validTimeInterval.end`; objects without a validity end never
/// expire implicitly. The end value is a local ISO-8601 date-time; an
/// unparsable value is treated as not-past so a malformed upstream
/// value can never expire a pass by accident.
pub fn is_past_validity(object: &FlightObject, now: NaiveDateTime) -> bool {
    let Some(end) = object
        .valid_time_interval
        .as_ref()
        .and_then(|interval| interval.end.as_ref())
    else {
        return false;
    };
    match NaiveDateTime::parse_from_str(&end.date, "%Y-%m-%dT%H:%M:%S") {
        Ok(end) => end < now,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeropass_schema::common::{DateTimeValue, TimeInterval};

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn object_valid_until(end: &str) -> FlightObject {
        let mut object = FlightObject::reference("1.OBJ1");
        object.valid_time_interval = Some(TimeInterval {
            start: None,
            end: Some(DateTimeValue {
                date: end.to_string(),
            }),
        });
        object
    }

    #[test]
    fn payload_with_class_and_object() {
        let payload = PassKind::BoardingPass.save_payload(Some("I.CLS1"), "I.OBJ1");
        assert_eq!(payload["flightClasses"][0]["id"], "I.CLS1");
        assert_eq!(payload["flightObjects"][0]["id"], "I.OBJ1");
        assert_eq!(payload["flightClasses"].as_array().unwrap().len(), 1);
        assert_eq!(payload["flightObjects"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn payload_object_only_has_no_class_key() {
        let payload = PassKind::BoardingPass.save_payload(None, "I.OBJ1");
        assert!(payload.get("flightClasses").is_none());
        assert_eq!(payload["flightObjects"][0]["id"], "I.OBJ1");
    }

    #[test]
    fn past_validity_end_is_detected() {
        let object = object_valid_until("2025-01-01T12:30:00");
        assert!(is_past_validity(&object, at("2025-01-02T00:00:00")));
        assert!(!is_past_validity(&object, at("2025-01-01T08:00:00")));
    }

    #[test]
    fn boundary_instant_is_not_past() {
        let object = object_valid_until("2025-01-01T12:30:00");
        assert!(!is_past_validity(&object, at("2025-01-01T12:30:00")));
    }

    #[test]
    fn missing_validity_never_expires() {
        let object = FlightObject::reference("1.OBJ1");
        assert!(!is_past_validity(&object, at("2099-01-01T00:00:00")));
    }

    #[test]
    fn unparsable_validity_never_expires() {
        let object = object_valid_until("soon");
        assert!(!is_past_validity(&object, at("2099-01-01T00:00:00")));
    }
}
