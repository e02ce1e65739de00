//! # Template Field Catalog
//!
//! The static table mapping logical field names to provider field paths,
//! and the tenant-keyed card layouts assembled from it. Card templates
//! reference displayed values by string path; keeping every path in one
//! catalog means a layout never hardcodes a path at the call site and a
//! renamed module id breaks exactly one constant.
//!
//! Layouts differ per tenant. Tenants without a registered layout get
//! `None` and fall back to the provider's default card — that is the
//! intended behavior for newly onboarded airlines, not an error.

use aeropass_core::TenantCode;
use aeropass_schema::template::{
    BarcodeSectionDetail, CardBarcodeSectionDetails, CardRowTemplateInfo, CardRowThreeItems,
    CardRowTwoItems, CardTemplateOverride, ClassTemplateInfo, DetailsItemInfo,
    DetailsTemplateOverride, FieldReference, FieldSelector, TemplateItem,
};

/// One catalog entry: a logical field name, the provider field path it
/// resolves to, and an optional date rendering hint.
///
/// Entries are immutable shared singletons; the converters below are
/// pure functions producing fresh template nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateField {
    /// Logical name, also used as the module id for text/link modules
    /// addressed through bracketed paths.
    pub name: &'static str,
    /// Provider field path, or the predefined keyword.
    pub path: &'static str,
    /// Date rendering hint for date-time valued fields.
    pub date_format: Option<&'static str>,
    /// Predefined provider items bypass field-path resolution.
    pub predefined: bool,
}

impl TemplateField {
    const fn path_field(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            path,
            date_format: None,
            predefined: false,
        }
    }

    const fn date_field(
        name: &'static str,
        path: &'static str,
        date_format: &'static str,
    ) -> Self {
        Self {
            name,
            path,
            date_format: Some(date_format),
            predefined: false,
        }
    }

    /// Wire-level field reference with path and date format.
    pub fn field_reference(&self) -> FieldReference {
        FieldReference {
            field_path: self.path.to_string(),
            date_format: self.date_format.map(str::to_string),
        }
    }

    fn selector(&self) -> FieldSelector {
        FieldSelector {
            fields: vec![self.field_reference()],
        }
    }

    /// A card row item showing this field, with an optional second
    /// value underneath. Predefined fields emit the provider keyword
    /// instead of a selector.
    pub fn card_row_item(&self, second: Option<&TemplateField>) -> TemplateItem {
        if self.predefined {
            return TemplateItem {
                predefined_item: Some(self.path.to_string()),
                ..Default::default()
            };
        }
        TemplateItem {
            first_value: Some(self.selector()),
            second_value: second.map(TemplateField::selector),
            predefined_item: None,
        }
    }

    /// A details-list entry showing this field.
    pub fn detail_item(&self, second: Option<&TemplateField>) -> DetailsItemInfo {
        DetailsItemInfo {
            item: self.card_row_item(second),
        }
    }

    /// A barcode-section entry showing this field.
    pub fn barcode_section_detail(&self) -> BarcodeSectionDetail {
        BarcodeSectionDetail {
            field_selector: self.selector(),
        }
    }
}

pub const DEPARTURE_TIME: TemplateField = TemplateField::date_field(
    "LocalScheduledDepartureDateTime",
    "class.localScheduledDepartureDateTime",
    "TIME_ONLY",
);
pub const FLIGHT_DATE: TemplateField = TemplateField::date_field(
    "FlightDate",
    "class.localScheduledDepartureDateTime",
    "YEAR_MONTH_DAY",
);
pub const ARRIVAL_TIME: TemplateField = TemplateField::date_field(
    "LocalScheduledArrivalDateTime",
    "class.localScheduledArrivalDateTime",
    "TIME_ONLY",
);
pub const BOARDING_TIME: TemplateField = TemplateField::date_field(
    "LocalBoardingDateTime",
    "class.localBoardingDateTime",
    "TIME_ONLY",
);
pub const ORIGIN_TERMINAL: TemplateField =
    TemplateField::path_field("OriginTerminal", "class.origin.terminal");
pub const DESTINATION_TERMINAL: TemplateField =
    TemplateField::path_field("DestinationTerminal", "class.destination.terminal");
pub const ORIGIN_GATE: TemplateField = TemplateField::path_field("OriginGate", "class.origin.gate");
pub const BOARDING_GROUP: TemplateField = TemplateField::path_field(
    "BoardingGroup",
    "object.boardingAndSeatingInfo.boardingGroup",
);
pub const SEAT_NUMBER: TemplateField =
    TemplateField::path_field("SeatNumber", "object.boardingAndSeatingInfo.seatNumber");
pub const SEAT_CLASS: TemplateField =
    TemplateField::path_field("SeatClass", "object.boardingAndSeatingInfo.seatClass");
pub const SEQUENCE_NUMBER: TemplateField = TemplateField::path_field(
    "SequenceNumber",
    "object.boardingAndSeatingInfo.sequenceNumber",
);
pub const PASSENGER_NAME: TemplateField =
    TemplateField::path_field("PassengerName", "object.passengerName");
pub const ETICKET_NUMBER: TemplateField =
    TemplateField::path_field("ETicketNumber", "object.reservationInfo.eticketNumber");
pub const CONFIRMATION_CODE: TemplateField = TemplateField::path_field(
    "ConfirmationCode",
    "object.reservationInfo.confirmationCode",
);
pub const AIRPORT_CHECKIN_INFO: TemplateField = TemplateField::path_field(
    "AirportCheckinInfo",
    "class.linksModuleData.uris['AirportCheckinInfo']",
);
pub const BAGGAGE_INFO: TemplateField = TemplateField::path_field(
    "BaggageInfo",
    "class.linksModuleData.uris['BaggageInfo']",
);
pub const REMINDER_MESSAGE: TemplateField = TemplateField::path_field(
    "ReminderMessage",
    "class.textModulesData['ReminderMessage']",
);
pub const BOOKING_CLASS: TemplateField =
    TemplateField::path_field("BookingClass", "object.textModulesData['BookingClass']");
pub const BAGGAGE_TAGS: TemplateField =
    TemplateField::path_field("BaggagesValues", "object.textModulesData['BaggagesValues']");
pub const CODE_SHARE: TemplateField =
    TemplateField::path_field("CodeShare", "object.textModulesData['CodeShare']");
pub const SPECIAL_MEAL: TemplateField = TemplateField::path_field(
    "SpecialMealCode",
    "object.textModulesData['SpecialMealCode']",
);
pub const LOUNGE_INFO: TemplateField = TemplateField::path_field(
    "AdditionalTextString",
    "object.textModulesData['AdditionalTextString']",
);
pub const SECURITY_PROGRAM_LOGO: TemplateField =
    TemplateField::path_field("SecurityProgramLogo", "object.securityProgramLogo");
pub const PRIVILEGE_IMAGE: TemplateField = TemplateField::path_field(
    "PrivilegeImage",
    "object.boardingAndSeatingInfo.boardingPrivilegeImage",
);

/// Frequent flyer program and number, rendered by the provider itself.
pub const FLYER_PROGRAM: TemplateField = TemplateField {
    name: "FlyerProgram",
    path: "frequentFlyerProgramNameAndNumber",
    date_format: None,
    predefined: true,
};

/// The card layout registered for a tenant, or `None` when the tenant
/// uses the provider's default card.
pub fn card_template(tenant: &TenantCode) -> Option<ClassTemplateInfo> {
    match tenant.as_str() {
        "CI" => Some(ci_template()),
        "BR" => Some(br_template()),
        _ => None,
    }
}

/// Three-row layout: times/terminals, boarding block, passenger row;
/// full details list; privilege imagery around the barcode.
fn ci_template() -> ClassTemplateInfo {
    ClassTemplateInfo {
        card_template_override: Some(CardTemplateOverride {
            card_row_template_infos: vec![
                CardRowTemplateInfo {
                    two_items: Some(CardRowTwoItems {
                        start_item: DEPARTURE_TIME.card_row_item(Some(&ORIGIN_TERMINAL)),
                        end_item: ARRIVAL_TIME.card_row_item(Some(&DESTINATION_TERMINAL)),
                    }),
                    ..Default::default()
                },
                CardRowTemplateInfo {
                    three_items: Some(CardRowThreeItems {
                        start_item: BOARDING_TIME.card_row_item(None),
                        middle_item: ORIGIN_GATE.card_row_item(None),
                        end_item: BOARDING_GROUP.card_row_item(Some(&SEAT_NUMBER)),
                    }),
                    ..Default::default()
                },
                CardRowTemplateInfo {
                    two_items: Some(CardRowTwoItems {
                        start_item: PASSENGER_NAME.card_row_item(None),
                        end_item: SEQUENCE_NUMBER.card_row_item(None),
                    }),
                    ..Default::default()
                },
            ],
        }),
        details_template_override: Some(DetailsTemplateOverride {
            details_item_infos: vec![
                AIRPORT_CHECKIN_INFO.detail_item(None),
                BAGGAGE_INFO.detail_item(None),
                FLYER_PROGRAM.detail_item(None),
                ETICKET_NUMBER.detail_item(None),
                CONFIRMATION_CODE.detail_item(None),
                FLIGHT_DATE.detail_item(None),
                SEAT_CLASS.detail_item(None),
                BOOKING_CLASS.detail_item(None),
                CODE_SHARE.detail_item(None),
                BAGGAGE_TAGS.detail_item(None),
                SPECIAL_MEAL.detail_item(None),
                REMINDER_MESSAGE.detail_item(None),
            ],
        }),
        card_barcode_section_details: Some(CardBarcodeSectionDetails {
            first_top_detail: Some(SECURITY_PROGRAM_LOGO.barcode_section_detail()),
            second_top_detail: Some(PRIVILEGE_IMAGE.barcode_section_detail()),
            first_bottom_detail: Some(LOUNGE_INFO.barcode_section_detail()),
        }),
    }
}

/// Two-row layout leading with the passenger and seat; shorter details
/// list, no barcode-section imagery.
fn br_template() -> ClassTemplateInfo {
    ClassTemplateInfo {
        card_template_override: Some(CardTemplateOverride {
            card_row_template_infos: vec![
                CardRowTemplateInfo {
                    two_items: Some(CardRowTwoItems {
                        start_item: PASSENGER_NAME.card_row_item(None),
                        end_item: SEAT_CLASS.card_row_item(Some(&SEAT_NUMBER)),
                    }),
                    ..Default::default()
                },
                CardRowTemplateInfo {
                    three_items: Some(CardRowThreeItems {
                        start_item: DEPARTURE_TIME.card_row_item(None),
                        middle_item: ORIGIN_GATE.card_row_item(None),
                        end_item: BOARDING_GROUP.card_row_item(None),
                    }),
                    ..Default::default()
                },
            ],
        }),
        details_template_override: Some(DetailsTemplateOverride {
            details_item_infos: vec![
                FLYER_PROGRAM.detail_item(None),
                ETICKET_NUMBER.detail_item(None),
                CONFIRMATION_CODE.detail_item(None),
                FLIGHT_DATE.detail_item(None),
                CODE_SHARE.detail_item(None),
                REMINDER_MESSAGE.detail_item(None),
            ],
        }),
        card_barcode_section_details: None,
    }
}
