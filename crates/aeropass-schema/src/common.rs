//! Shared wire structures: localized strings, images, links, text
//! modules, messages, barcodes, and time intervals.

use aeropass_core::LocalizedText;
use serde::{Deserialize, Serialize};

/// A single language/value pair on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedString {
    pub language: String,
    pub value: String,
}

/// Provider-shaped localized string: a required default plus optional
/// translated values.
///
/// Constructed from the domain [`LocalizedText`] via `From`, which is
/// the only conversion path — the domain type has already enforced the
/// non-empty-default invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedString {
    pub default_value: TranslatedString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated_values: Option<Vec<TranslatedString>>,
}

impl From<&LocalizedText> for LocalizedString {
    fn from(text: &LocalizedText) -> Self {
        let translated: Vec<TranslatedString> = text
            .translations()
            .iter()
            .map(|t| TranslatedString {
                language: t.language.clone(),
                value: t.value.clone(),
            })
            .collect();
        Self {
            default_value: TranslatedString {
                language: text.default_language().to_string(),
                value: text.default_value().to_string(),
            },
            translated_values: if translated.is_empty() {
                None
            } else {
                Some(translated)
            },
        }
    }
}

/// Image source URI with optional descriptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUri {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_description: Option<LocalizedString>,
}

/// An image module (hero image, logos, privilege images).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub source_uri: ImageUri,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_description: Option<LocalizedString>,
}

impl Image {
    /// Build an image module from a URI and its description.
    pub fn new(uri: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            source_uri: ImageUri {
                uri: uri.into(),
                description: Some(description.into()),
                localized_description: None,
            },
            content_description: None,
        }
    }
}

/// One entry of a links module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletUri {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_description: Option<LocalizedString>,
}

impl WalletUri {
    /// Build a link entry with the template-referenced id.
    pub fn new(
        id: impl Into<String>,
        uri: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            uri: uri.into(),
            description: Some(description.into()),
            localized_description: None,
        }
    }
}

/// Links module: an ordered list of URIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinksModuleData {
    pub uris: Vec<WalletUri>,
}

/// A free-text module with optional localized header/body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextModuleData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_header: Option<LocalizedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_body: Option<LocalizedString>,
}

impl TextModuleData {
    /// Build a plain header/body text module with the given id.
    ///
    /// Returns `None` when the body is empty — an empty module would
    /// still render a blank row on the pass.
    pub fn plain(
        id: impl Into<String>,
        header: impl Into<String>,
        body: impl Into<String>,
    ) -> Option<Self> {
        let body = body.into();
        if body.trim().is_empty() {
            return None;
        }
        Some(Self {
            id: Some(id.into()),
            header: Some(header.into()),
            body: Some(body),
            localized_header: None,
            localized_body: None,
        })
    }

    /// Build a localized text module from domain header/body texts.
    pub fn localized(
        id: impl Into<String>,
        header: &LocalizedText,
        body: &LocalizedText,
    ) -> Self {
        Self {
            id: Some(id.into()),
            header: None,
            body: None,
            localized_header: Some(header.into()),
            localized_body: Some(body.into()),
        }
    }
}

/// An ISO-8601 local date-time wrapped the way the provider nests it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeValue {
    pub date: String,
}

/// A start/end interval of [`DateTimeValue`]s.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeInterval {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTimeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTimeValue>,
}

/// A message pushed onto an existing pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_header: Option<LocalizedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_body: Option<LocalizedString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_interval: Option<TimeInterval>,
}

/// Request body for the provider's add-message operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMessageRequest {
    pub message: Message,
}

/// Barcode rendered on the pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barcode {
    #[serde(rename = "type")]
    pub barcode_type: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_encoding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_code_text: Option<LocalizedString>,
}

impl Barcode {
    /// A QR code with UTF-8 render encoding, the format every tenant
    /// currently issues.
    pub fn qr_code(value: impl Into<String>, alternate_text: Option<String>) -> Self {
        Self {
            barcode_type: "QR_CODE".to_string(),
            value: value.into(),
            alternate_text,
            render_encoding: Some("UTF-8".to_string()),
            show_code_text: None,
        }
    }
}

/// A geographic point attached to a class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatLongPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_string_from_text_with_translations() {
        let text = LocalizedText::new("en-US", "Taipei Airport")
            .unwrap()
            .with_translation("zh-TW", "桃園機場");
        let wire = LocalizedString::from(&text);
        assert_eq!(wire.default_value.language, "en-US");
        assert_eq!(wire.default_value.value, "Taipei Airport");
        assert_eq!(wire.translated_values.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn localized_string_omits_empty_translations() {
        let text = LocalizedText::new("en-US", "China Airlines").unwrap();
        let wire = LocalizedString::from(&text);
        let json = serde_json::to_string(&wire).unwrap();
        assert!(!json.contains("translatedValues"));
    }

    #[test]
    fn text_module_plain_drops_empty_body() {
        assert!(TextModuleData::plain("SpecialMealCode", "Special Meal", "").is_none());
        assert!(TextModuleData::plain("SpecialMealCode", "Special Meal", "VOML").is_some());
    }

    #[test]
    fn barcode_serializes_type_field() {
        let barcode = Barcode::qr_code("297240203609001", Some("WEB".into()));
        let json = serde_json::to_value(&barcode).unwrap();
        assert_eq!(json["type"], "QR_CODE");
        assert_eq!(json["renderEncoding"], "UTF-8");
        assert_eq!(json["alternateText"], "WEB");
    }

    #[test]
    fn none_fields_are_absent_not_null() {
        let module = TextModuleData::plain("BookingClass", "Booking Class", "C").unwrap();
        let json = serde_json::to_string(&module).unwrap();
        assert!(!json.contains("localizedHeader"));
        assert!(!json.contains("null"));
    }
}
