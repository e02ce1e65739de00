//! # Localized Text
//!
//! Immutable value type for user-facing strings: a required default
//! language/value plus optional per-language overrides. The wallet
//! provider rejects localized strings without a default, so that
//! invariant is enforced here at construction time — a
//! [`LocalizedText`] with an empty default cannot exist.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A single per-language override inside a [`LocalizedText`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// BCP-47 language tag (e.g. `"zh-TW"`).
    pub language: String,
    /// The translated value.
    pub value: String,
}

/// A default-language string with per-language overrides.
///
/// Language codes are case-insensitive unique keys: adding a second
/// translation for the same language replaces the first. Construction
/// fails when the default language or default value is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    default_language: String,
    default_value: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    translations: Vec<Translation>,
}

impl LocalizedText {
    /// Create a localized text with the given default language and value.
    pub fn new(
        default_language: impl Into<String>,
        default_value: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let default_language = default_language.into();
        let default_value = default_value.into();
        if default_language.trim().is_empty() {
            return Err(ValidationError::MissingDefaultLanguage);
        }
        if default_value.trim().is_empty() {
            return Err(ValidationError::MissingDefaultValue);
        }
        Ok(Self {
            default_language,
            default_value,
            translations: Vec::new(),
        })
    }

    /// Add or replace a per-language override.
    ///
    /// Matching is case-insensitive on the language tag; overrides that
    /// collide with an existing entry replace it. Empty languages or
    /// values are dropped silently — an override adds nothing the
    /// default does not already provide.
    pub fn with_translation(
        mut self,
        language: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let language = language.into();
        let value = value.into();
        if language.trim().is_empty() || value.trim().is_empty() {
            return self;
        }
        if let Some(existing) = self
            .translations
            .iter_mut()
            .find(|t| t.language.eq_ignore_ascii_case(&language))
        {
            existing.value = value;
        } else {
            self.translations.push(Translation { language, value });
        }
        self
    }

    /// The default language tag.
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// The default value.
    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    /// The per-language overrides, in insertion order.
    pub fn translations(&self) -> &[Translation] {
        &self.translations
    }
}

/// Raw mirror used to validate on deserialization: incoming JSON routes
/// through [`LocalizedText::new`] so a text without a default is
/// rejected at the boundary.
#[derive(Deserialize)]
struct RawLocalizedText {
    default_language: String,
    default_value: String,
    #[serde(default)]
    translations: Vec<Translation>,
}

impl<'de> Deserialize<'de> for LocalizedText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawLocalizedText::deserialize(deserializer)?;
        let mut text = LocalizedText::new(raw.default_language, raw.default_value)
            .map_err(serde::de::Error::custom)?;
        for t in raw.translations {
            text = text.with_translation(t.language, t.value);
        }
        Ok(text)
    }
}
