//! # Identifier Newtypes
//!
//! Domain-primitive newtypes for the two identifiers that scope every
//! operation in the service: the tenant (airline) code and the wallet
//! issuer id. Each is a distinct type — you cannot pass an [`IssuerId`]
//! where a [`TenantCode`] is expected.
//!
//! String-based identifiers validate their format at construction time
//! and at deserialization time, so invalid values are rejected at the
//! boundary rather than silently accepted.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Helper macro to implement `Deserialize` for string newtypes that must
/// validate their contents. Deserializes as a plain `String`, then routes
/// through the type's `new()` constructor so that invalid values are
/// rejected at deserialization time — not silently accepted.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// A two-character IATA airline designator identifying a tenant
/// (e.g. `"CI"`, `"BR"`).
///
/// Codes are normalized to uppercase; comparisons are therefore exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TenantCode(String);

impl TenantCode {
    /// Validate and normalize a tenant code.
    ///
    /// Accepts exactly two ASCII alphanumeric characters; lowercase
    /// input is uppercased.
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = code.into();
        let trimmed = raw.trim();
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidTenantCode { code: raw });
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// The normalized code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TenantCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TenantCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl_validating_deserialize!(TenantCode);

/// The wallet issuer identity assigned to one tenant by the provider.
///
/// Every class and object id the tenant owns is prefixed with this
/// value: `"{issuer}.{suffix}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IssuerId(String);

impl IssuerId {
    /// Validate an issuer id: non-empty, digits only.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = id.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidIssuerId { id: raw });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The issuer id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Construct a full resource id `"{issuer}.{suffix}"`.
    ///
    /// The suffix is caller-supplied and must be unique per tenant per
    /// resource kind; this function does not deduplicate.
    pub fn resource_id(&self, suffix: &str) -> Result<String, ValidationError> {
        if suffix.trim().is_empty() {
            return Err(ValidationError::EmptySuffix);
        }
        Ok(format!("{}.{}", self.0, suffix.trim()))
    }

    /// Qualify an id with the issuer prefix unless it already carries it.
    ///
    /// Inbound endpoints accept both bare suffixes and fully qualified
    /// ids; this normalizes either form without ever double-prefixing.
    pub fn qualify(&self, id: &str) -> String {
        let id = id.trim();
        if id.starts_with(&format!("{}.", self.0)) {
            id.to_string()
        } else {
            format!("{}.{}", self.0, id)
        }
    }
}

impl std::fmt::Display for IssuerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl_validating_deserialize!(IssuerId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenant_code_normalizes_to_uppercase() {
        let code = TenantCode::new("ci").unwrap();
        assert_eq!(code.as_str(), "CI");
    }

    #[test]
    fn tenant_code_accepts_digit_designators() {
        // Some IATA designators contain digits (e.g. 9W, B7).
        assert!(TenantCode::new("B7").is_ok());
        assert!(TenantCode::new("9W").is_ok());
    }

    #[test]
    fn tenant_code_rejects_wrong_length() {
        assert!(TenantCode::new("").is_err());
        assert!(TenantCode::new("C").is_err());
        assert!(TenantCode::new("CHI").is_err());
    }

    #[test]
    fn tenant_code_rejects_non_alphanumeric() {
        assert!(TenantCode::new("C-").is_err());
        assert!(TenantCode::new("C ").is_err());
    }

    #[test]
    fn tenant_code_deserialize_validates() {
        let ok: Result<TenantCode, _> = serde_json::from_str("\"ci\"");
        assert_eq!(ok.unwrap().as_str(), "CI");
        let bad: Result<TenantCode, _> = serde_json::from_str("\"TOO LONG\"");
        assert!(bad.is_err());
    }

    #[test]
    fn issuer_id_rejects_non_numeric() {
        assert!(IssuerId::new("").is_err());
        assert!(IssuerId::new("abc").is_err());
        assert!(IssuerId::new("3388000000022913608").is_ok());
    }

    #[test]
    fn resource_id_formats_issuer_dot_suffix() {
        let issuer = IssuerId::new("3388000000022913608").unwrap();
        assert_eq!(
            issuer.resource_id("20250101").unwrap(),
            "3388000000022913608.20250101"
        );
    }

    #[test]
    fn resource_id_rejects_empty_suffix() {
        let issuer = IssuerId::new("3388000000022913608").unwrap();
        assert_eq!(
            issuer.resource_id("  "),
            Err(ValidationError::EmptySuffix)
        );
    }

    #[test]
    fn qualify_adds_prefix_to_bare_id() {
        let issuer = IssuerId::new("3388000000022913608").unwrap();
        assert_eq!(
            issuer.qualify("20250101"),
            "3388000000022913608.20250101"
        );
    }

    #[test]
    fn qualify_never_double_prefixes() {
        let issuer = IssuerId::new("3388000000022913608").unwrap();
        assert_eq!(
            issuer.qualify("3388000000022913608.20250101"),
            "3388000000022913608.20250101"
        );
    }

    #[test]
    fn qualify_prefixes_foreign_issuer_ids() {
        // An id qualified with a *different* issuer is treated as a
        // bare suffix — the tenant boundary owns the namespace.
        let issuer = IssuerId::new("1111").unwrap();
        assert_eq!(issuer.qualify("2222.X1"), "1111.2222.X1");
    }
}
