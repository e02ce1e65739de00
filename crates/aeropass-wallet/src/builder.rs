//! # Pass Builder
//!
//! The pure transformation from tenant configuration plus domain input
//! into provider resources. No I/O, no clocks, no randomness — the
//! same inputs always produce the same class and object.
//!
//! Resource ids are `"{issuerId}.{suffix}"` with the suffix supplied by
//! the caller; the builder neither generates nor deduplicates suffixes.

use aeropass_core::{
    combine_local, format_flight_number, LocalizedText, TenantConfig, ValidationError,
};
use aeropass_schema::common::{
    Barcode, Image, LatLongPoint, LinksModuleData, TextModuleData, WalletUri,
};
use aeropass_schema::flight::{
    AirportInfo, BoardingAndSeatingInfo, FlightCarrier, FlightClass, FlightHeader, FlightObject,
    FrequentFlyerInfo, ObjectState, ReservationInfo, ReviewStatus,
};

use crate::catalog::{
    self, AIRPORT_CHECKIN_INFO, BAGGAGE_INFO, BAGGAGE_TAGS, BOOKING_CLASS, CODE_SHARE,
    LOUNGE_INFO, REMINDER_MESSAGE, SPECIAL_MEAL,
};
use crate::domain::{AirportInput, FlightInput, PassengerInput};

fn airport_info(input: &AirportInput) -> AirportInfo {
    AirportInfo {
        airport_iata_code: input.iata.clone(),
        terminal: input.terminal.clone(),
        gate: input.gate.clone(),
        airport_name_override: input.name_override.as_ref().map(Into::into),
    }
}

/// Build the flight-level class resource for a tenant.
pub fn build_class(
    tenant: &TenantConfig,
    flight: &FlightInput,
) -> Result<FlightClass, ValidationError> {
    if flight.operating.carrier_code.trim().is_empty() {
        return Err(ValidationError::EmptyField {
            field: "operating.carrier_code",
        });
    }
    if flight.departure_airport.iata.trim().is_empty() {
        return Err(ValidationError::EmptyField {
            field: "departure_airport.iata",
        });
    }
    if flight.arrival_airport.iata.trim().is_empty() {
        return Err(ValidationError::EmptyField {
            field: "arrival_airport.iata",
        });
    }

    let id = tenant.issuer_id.resource_id(&flight.class_suffix)?;

    let mut text_modules: Vec<TextModuleData> = Vec::new();
    if let (Some(header), Some(body)) = (&flight.reminder_header, &flight.reminder_body) {
        text_modules.push(TextModuleData::localized(
            REMINDER_MESSAGE.name,
            header,
            body,
        ));
    }

    let mut links: Vec<WalletUri> = Vec::new();
    if let Some(link) = &flight.airport_checkin_link {
        links.push(WalletUri::new(
            AIRPORT_CHECKIN_INFO.name,
            &link.uri,
            &link.description,
        ));
    }
    if let Some(link) = &flight.baggage_info_link {
        links.push(WalletUri::new(
            BAGGAGE_INFO.name,
            &link.uri,
            &link.description,
        ));
    }
    for entry in &tenant.links {
        links.push(WalletUri::new(&entry.id, &entry.uri, &entry.description));
    }

    Ok(FlightClass {
        id,
        issuer_name: Some(tenant.issuer_name.clone()),
        // New and updated classes always re-enter review.
        review_status: Some(ReviewStatus::UnderReview),
        hex_background_color: tenant.background_color_hex.clone(),
        hero_image: tenant
            .branding
            .hero_image
            .as_ref()
            .map(|asset| Image::new(&asset.uri, &asset.description)),
        origin: Some(airport_info(&flight.departure_airport)),
        destination: Some(airport_info(&flight.arrival_airport)),
        local_scheduled_departure_date_time: Some(combine_local(
            &flight.departure_date,
            &flight.departure_time,
        )?),
        local_scheduled_arrival_date_time: Some(combine_local(
            &flight.arrival_date,
            &flight.arrival_time,
        )?),
        local_boarding_date_time: Some(combine_local(
            &flight.boarding_date,
            &flight.boarding_time,
        )?),
        flight_header: Some(FlightHeader {
            flight_number: Some(flight.operating.flight_number.clone()),
            flight_number_display_override: Some(format_flight_number(
                &flight.operating.carrier_code,
                &flight.operating.flight_number,
            )),
            carrier: Some(FlightCarrier {
                carrier_iata_code: Some(flight.operating.carrier_code.clone()),
                airline_name: flight.operating.airline_name.as_ref().map(Into::into),
                airline_logo: flight
                    .operating
                    .airline_logo_uri
                    .as_ref()
                    .map(|uri| Image::new(uri, "Airline Logo")),
            }),
        }),
        links_module_data: if links.is_empty() {
            None
        } else {
            Some(LinksModuleData { uris: links })
        },
        text_modules_data: if text_modules.is_empty() {
            None
        } else {
            Some(text_modules)
        },
        messages: None,
        locations: tenant.default_location.as_ref().map(|point| {
            vec![LatLongPoint {
                latitude: point.latitude,
                longitude: point.longitude,
            }]
        }),
        class_template_info: catalog::card_template(&tenant.tenant_code),
    })
}

/// Build the passenger-level object resource for a tenant.
pub fn build_object(
    tenant: &TenantConfig,
    passenger: &PassengerInput,
) -> Result<FlightObject, ValidationError> {
    if passenger.passenger_name.trim().is_empty() {
        return Err(ValidationError::EmptyField {
            field: "passenger_name",
        });
    }

    let id = tenant.issuer_id.resource_id(&passenger.object_suffix)?;
    let class_id = tenant.issuer_id.resource_id(&passenger.class_suffix)?;

    let barcode_value = passenger
        .barcode_value
        .clone()
        .or_else(|| passenger.eticket_number.clone());

    let mut text_modules: Vec<TextModuleData> = Vec::new();
    text_modules.extend(TextModuleData::plain(
        BAGGAGE_TAGS.name,
        "Baggage Info",
        passenger.baggage_tags.join("\n"),
    ));
    if let Some(marketing) = &passenger.marketing {
        text_modules.extend(TextModuleData::plain(
            CODE_SHARE.name,
            "Code Share",
            format_flight_number(&marketing.carrier_code, &marketing.flight_number),
        ));
    }
    text_modules.extend(TextModuleData::plain(
        BOOKING_CLASS.name,
        "Booking Class",
        passenger.booking_class.clone().unwrap_or_default(),
    ));
    text_modules.extend(TextModuleData::plain(
        SPECIAL_MEAL.name,
        "Special Meal",
        passenger.special_meal_codes.join(", "),
    ));
    text_modules.extend(TextModuleData::plain(
        LOUNGE_INFO.name,
        "Additional Text String",
        passenger.lounge_info.clone().unwrap_or_default(),
    ));

    let frequent_flyer = match (
        &passenger.frequent_flyer_tier,
        &passenger.frequent_flyer_number,
    ) {
        (None, None) => None,
        (tier, number) => Some(FrequentFlyerInfo {
            frequent_flyer_program_name: tier
                .as_ref()
                .and_then(|t| LocalizedText::new("en-US", t).ok())
                .map(|text| (&text).into()),
            frequent_flyer_number: number.clone(),
        }),
    };

    Ok(FlightObject {
        id,
        class_id: Some(class_id),
        state: Some(ObjectState::Active),
        passenger_name: Some(passenger.passenger_name.clone()),
        boarding_and_seating_info: Some(BoardingAndSeatingInfo {
            boarding_group: passenger.boarding_zone.clone(),
            sequence_number: passenger.sequence_number.clone(),
            // The cabin display name, not the booking class letter.
            seat_class: passenger.cabin_class_name.clone(),
            seat_number: passenger.seat_number.clone(),
            boarding_privilege_image: if passenger.is_sky_priority {
                tenant
                    .branding
                    .boarding_privilege_image
                    .as_ref()
                    .map(|asset| Image::new(&asset.uri, &asset.description))
            } else {
                None
            },
        }),
        security_program_logo: if passenger.is_tsa_precheck {
            tenant
                .branding
                .security_program_logo
                .as_ref()
                .map(|asset| Image::new(&asset.uri, &asset.description))
        } else {
            None
        },
        barcode: barcode_value
            .map(|value| Barcode::qr_code(value, passenger.channel.clone())),
        reservation_info: Some(ReservationInfo {
            confirmation_code: passenger.confirmation_code.clone(),
            eticket_number: passenger.eticket_number.clone(),
            frequent_flyer_info: frequent_flyer,
        }),
        valid_time_interval: None,
        text_modules_data: if text_modules.is_empty() {
            None
        } else {
            Some(text_modules)
        },
        links_module_data: None,
        hero_image: None,
        messages: None,
    })
}
