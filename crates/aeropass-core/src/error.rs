//! Validation errors for core domain types.

/// Errors raised when constructing core domain values from raw input.
///
/// These cover malformed builder input (unparsable dates, empty
/// required text) as well as identifier format violations. They map to
/// HTTP 400 at the inbound boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Tenant code is not a two-character IATA airline designator.
    #[error("invalid tenant code {code:?}: expected a two-character IATA airline code")]
    InvalidTenantCode {
        /// The rejected input.
        code: String,
    },

    /// Issuer id is empty or contains non-digit characters.
    #[error("invalid issuer id {id:?}: expected a non-empty numeric identifier")]
    InvalidIssuerId {
        /// The rejected input.
        id: String,
    },

    /// A resource id suffix was empty.
    #[error("resource suffix must not be empty")]
    EmptySuffix,

    /// Date/time strings could not be parsed as `yyyy/MM/dd` + `HH:mm`.
    #[error("unparsable local date/time {date:?} {time:?}: expected yyyy/MM/dd and HH:mm")]
    InvalidDateTime {
        /// The date string as received.
        date: String,
        /// The time string as received.
        time: String,
    },

    /// Localized text was constructed without a default value.
    #[error("localized text requires a non-empty default value")]
    MissingDefaultValue,

    /// Localized text was constructed without a default language.
    #[error("localized text requires a non-empty default language")]
    MissingDefaultLanguage,

    /// A required field was empty.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },
}
