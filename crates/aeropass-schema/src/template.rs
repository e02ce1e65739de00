//! Card template override nodes.
//!
//! The provider lets a class replace the default card layout with an
//! explicit arrangement of rows and detail items. Every displayed value
//! is addressed by a string field path into the class or object
//! (`"class.origin.terminal"`, `"object.passengerName"`, ...) or by a
//! provider-recognized predefined keyword.

use serde::{Deserialize, Serialize};

/// A dotted/bracketed path into the class or object, plus an optional
/// date rendering hint (`"TIME_ONLY"`, `"DATE_TIME"`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReference {
    pub field_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

/// Ordered list of field references; the first present value wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSelector {
    pub fields: Vec<FieldReference>,
}

/// One displayable slot: either a pair of field selectors or a
/// predefined provider item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_value: Option<FieldSelector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_value: Option<FieldSelector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predefined_item: Option<String>,
}

/// A row holding exactly one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRowOneItem {
    pub item: TemplateItem,
}

/// A row holding two items, start and end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRowTwoItems {
    pub start_item: TemplateItem,
    pub end_item: TemplateItem,
}

/// A row holding three items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRowThreeItems {
    pub start_item: TemplateItem,
    pub middle_item: TemplateItem,
    pub end_item: TemplateItem,
}

/// One card row in one of the three arities.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRowTemplateInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_item: Option<CardRowOneItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_items: Option<CardRowTwoItems>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub three_items: Option<CardRowThreeItems>,
}

/// The card face override: ordered rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTemplateOverride {
    pub card_row_template_infos: Vec<CardRowTemplateInfo>,
}

/// One entry of the expanded details list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsItemInfo {
    pub item: TemplateItem,
}

/// The expanded details list override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailsTemplateOverride {
    pub details_item_infos: Vec<DetailsItemInfo>,
}

/// A field selector shown beside the barcode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarcodeSectionDetail {
    pub field_selector: FieldSelector,
}

/// Items surrounding the barcode section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardBarcodeSectionDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_top_detail: Option<BarcodeSectionDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_top_detail: Option<BarcodeSectionDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_bottom_detail: Option<BarcodeSectionDetail>,
}

/// Complete template attached to a class. When absent, the provider
/// renders its default layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassTemplateInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_template_override: Option<CardTemplateOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details_template_override: Option<DetailsTemplateOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_barcode_section_details: Option<CardBarcodeSectionDetails>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_reference_omits_absent_date_format() {
        let reference = FieldReference {
            field_path: "class.origin.terminal".into(),
            date_format: None,
        };
        let json = serde_json::to_string(&reference).unwrap();
        assert_eq!(json, r#"{"fieldPath":"class.origin.terminal"}"#);
    }

    #[test]
    fn template_item_predefined_serializes_alone() {
        let item = TemplateItem {
            predefined_item: Some("frequentFlyerProgramNameAndNumber".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"predefinedItem":"frequentFlyerProgramNameAndNumber"}"#
        );
    }

    #[test]
    fn row_arities_roundtrip() {
        let row = CardRowTemplateInfo {
            two_items: Some(CardRowTwoItems {
                start_item: TemplateItem::default(),
                end_item: TemplateItem::default(),
            }),
            ..Default::default()
        };
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("twoItems"));
        assert!(!json.contains("threeItems"));
        let back: CardRowTemplateInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }
}
