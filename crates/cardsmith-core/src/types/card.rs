//! The card record and its documented defaults.

use serde::Serialize;
use serde_json::{Map, Value};

use super::choices::{CardType, Design, Font};
use super::color::HexColor;
use super::image::CardImage;

pub const DEFAULT_MESSAGE: &str = "Thank you for your endless love, support, and guidance. You are the best mom in the world, and I'm so grateful for everything you do. Wishing you a day as beautiful as you are.";
pub const DEFAULT_SIGNATURE: &str = "With all my love,";
pub const DEFAULT_NAME: &str = "Your Loving Child";
pub const DEFAULT_RECIPIENT: &str = "Mom";

pub const DEFAULT_BORDER_COLOR: HexColor = HexColor::rgb(0xfe, 0xcd, 0xd3);
pub const DEFAULT_HEADING_COLOR: HexColor = HexColor::rgb(0xf4, 0x3f, 0x5e);
pub const DEFAULT_MESSAGE_COLOR: HexColor = HexColor::rgb(0x37, 0x41, 0x51);
pub const DEFAULT_SIGNATURE_COLOR: HexColor = HexColor::rgb(0xf4, 0x3f, 0x5e);
pub const DEFAULT_NAME_COLOR: HexColor = HexColor::rgb(0x4b, 0x55, 0x63);

/// Character limits (counted in chars, like an input's `maxlength`)
pub const MAX_SIGNATURE_LEN: usize = 30;
pub const MAX_NAME_LEN: usize = 30;
pub const MAX_RECIPIENT_LEN: usize = 30;
pub const MAX_CUSTOM_TITLE_LEN: usize = 40;

/// Maximum number of background images on one card
pub const MAX_IMAGES: usize = 5;

/// Serialized keys, in serialization order
pub const FIELD_KEYS: [&str; 14] = [
    "message",
    "signature",
    "name",
    "recipient",
    "font",
    "design",
    "cardType",
    "customTitle",
    "borderColor",
    "headingColor",
    "messageColor",
    "signatureColor",
    "nameColor",
    "backgroundImages",
];

/// Everything that makes up one card.
///
/// The field set is fixed: every field always holds a value. Values that
/// come from outside (share tokens, JSON files) go through
/// [`CardConfig::from_fields`], which substitutes the default for anything
/// missing or malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardConfig {
    pub message: String,
    pub signature: String,
    pub name: String,
    pub recipient: String,
    pub font: Font,
    pub design: Design,
    pub card_type: CardType,
    /// Only shown when `card_type` is [`CardType::Custom`]
    pub custom_title: String,
    pub border_color: HexColor,
    pub heading_color: HexColor,
    pub message_color: HexColor,
    pub signature_color: HexColor,
    pub name_color: HexColor,
    pub background_images: Vec<CardImage>,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            signature: DEFAULT_SIGNATURE.to_string(),
            name: DEFAULT_NAME.to_string(),
            recipient: DEFAULT_RECIPIENT.to_string(),
            font: Font::default(),
            design: Design::default(),
            card_type: CardType::default(),
            custom_title: String::new(),
            border_color: DEFAULT_BORDER_COLOR,
            heading_color: DEFAULT_HEADING_COLOR,
            message_color: DEFAULT_MESSAGE_COLOR,
            signature_color: DEFAULT_SIGNATURE_COLOR,
            name_color: DEFAULT_NAME_COLOR,
            background_images: Vec::new(),
        }
    }
}

impl CardConfig {
    /// Build a card from a parsed field mapping.
    ///
    /// Never fails. A field that is absent or has the wrong shape takes its
    /// default; unknown keys are ignored; unknown enum values fall back to
    /// the enum default; text is clamped to its limit; images that are not
    /// inline data URIs are skipped and at most [`MAX_IMAGES`] are kept.
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        let defaults = Self::default();
        let text = |key: &str, default: String, limit: Option<usize>| match fields.get(key) {
            Some(Value::String(s)) => match limit {
                Some(max) => clamp_chars(s, max),
                None => s.clone(),
            },
            _ => default,
        };
        let color = |key: &str, default: HexColor| {
            fields
                .get(key)
                .and_then(Value::as_str)
                .and_then(HexColor::parse)
                .unwrap_or(default)
        };
        let choice = |key: &str| fields.get(key).and_then(Value::as_str);

        Self {
            message: text("message", defaults.message, None),
            signature: text("signature", defaults.signature, Some(MAX_SIGNATURE_LEN)),
            name: text("name", defaults.name, Some(MAX_NAME_LEN)),
            recipient: text("recipient", defaults.recipient, Some(MAX_RECIPIENT_LEN)),
            font: choice("font").and_then(Font::from_wire).unwrap_or_default(),
            design: choice("design").and_then(Design::from_wire).unwrap_or_default(),
            card_type: choice("cardType")
                .and_then(CardType::from_wire)
                .unwrap_or_default(),
            custom_title: text(
                "customTitle",
                defaults.custom_title,
                Some(MAX_CUSTOM_TITLE_LEN),
            ),
            border_color: color("borderColor", defaults.border_color),
            heading_color: color("headingColor", defaults.heading_color),
            message_color: color("messageColor", defaults.message_color),
            signature_color: color("signatureColor", defaults.signature_color),
            name_color: color("nameColor", defaults.name_color),
            background_images: images_field(fields.get("backgroundImages")),
        }
    }

    /// Serialize to a JSON object with the stable key set
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// Clamp text to its limits and drop images beyond the cap
    pub fn normalized(mut self) -> Self {
        self.signature = clamp_chars(&self.signature, MAX_SIGNATURE_LEN);
        self.name = clamp_chars(&self.name, MAX_NAME_LEN);
        self.recipient = clamp_chars(&self.recipient, MAX_RECIPIENT_LEN);
        self.custom_title = clamp_chars(&self.custom_title, MAX_CUSTOM_TITLE_LEN);
        self.background_images.truncate(MAX_IMAGES);
        self
    }
}

fn images_field(value: Option<&Value>) -> Vec<CardImage> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    let images: Vec<CardImage> = items
        .iter()
        .filter_map(Value::as_str)
        .filter_map(|uri| CardImage::from_data_uri(uri).ok())
        .take(MAX_IMAGES)
        .collect();

    if images.len() < items.len().min(MAX_IMAGES) {
        tracing::debug!(
            offered = items.len(),
            kept = images.len(),
            "skipped background images that are not inline data URIs"
        );
    }
    images
}

/// Truncate to at most `max` chars without splitting a char
pub fn clamp_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((cut, _)) => s[..cut].to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_serialized_keys_are_stable() {
        let json = CardConfig::default().to_json().unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        let mut expected = FIELD_KEYS.to_vec();
        let mut actual = keys.clone();
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_default_values() {
        let json = CardConfig::default().to_json().unwrap();
        assert_eq!(json["font"], "'Montserrat', sans-serif");
        assert_eq!(json["design"], "dashed-border");
        assert_eq!(json["cardType"], "birthday");
        assert_eq!(json["customTitle"], "");
        assert_eq!(json["borderColor"], "#fecdd3");
        assert_eq!(json["headingColor"], "#f43f5e");
        assert_eq!(json["messageColor"], "#374151");
        assert_eq!(json["signatureColor"], "#f43f5e");
        assert_eq!(json["nameColor"], "#4b5563");
        assert_eq!(json["backgroundImages"], json!([]));
    }

    #[test]
    fn test_from_fields_empty_map_is_default() {
        assert_eq!(CardConfig::from_fields(&Map::new()), CardConfig::default());
    }

    #[test]
    fn test_from_fields_wrong_shapes_fall_back() {
        let fields = object(json!({
            "message": 42,
            "recipient": null,
            "font": ["Roboto"],
            "cardType": "anniversary",
            "borderColor": "blue",
            "backgroundImages": "data:image/png;base64,AAAA",
            "favouriteColor": "#000000",
        }));
        assert_eq!(CardConfig::from_fields(&fields), CardConfig::default());
    }

    #[test]
    fn test_from_fields_keeps_empty_strings() {
        let fields = object(json!({ "message": "", "signature": "" }));
        let card = CardConfig::from_fields(&fields);
        assert_eq!(card.message, "");
        assert_eq!(card.signature, "");
        assert_eq!(card.name, DEFAULT_NAME);
    }

    #[test]
    fn test_from_fields_clamps_text() {
        let fields = object(json!({
            "recipient": "x".repeat(45),
            "customTitle": "y".repeat(45),
        }));
        let card = CardConfig::from_fields(&fields);
        assert_eq!(card.recipient.chars().count(), MAX_RECIPIENT_LEN);
        assert_eq!(card.custom_title.chars().count(), MAX_CUSTOM_TITLE_LEN);
    }

    #[test]
    fn test_from_fields_images_filtered_and_capped() {
        let good = |n: u8| format!("data:image/jpeg;base64,{}", "A".repeat(n as usize + 4));
        let fields = object(json!({
            "backgroundImages": [
                good(1), "https://example.com/x.png", good(2), 7, good(3),
                good(4), good(5), good(6)
            ]
        }));
        let card = CardConfig::from_fields(&fields);
        let uris: Vec<String> = card
            .background_images
            .iter()
            .map(|i| i.as_data_uri().to_string())
            .collect();
        assert_eq!(uris, vec![good(1), good(2), good(3), good(4), good(5)]);
    }

    #[test]
    fn test_clamp_chars_respects_char_boundaries() {
        assert_eq!(clamp_chars("héllo", 2), "hé");
        assert_eq!(clamp_chars("🎂🎂🎂", 2), "🎂🎂");
        assert_eq!(clamp_chars("abc", 10), "abc");
        assert_eq!(clamp_chars("", 0), "");
    }

    #[test]
    fn test_normalized() {
        let mut card = CardConfig::default();
        card.name = "n".repeat(31);
        let img = CardImage::from_data_uri("data:image/png;base64,AAAA").unwrap();
        card.background_images = vec![img; 7];
        let card = card.normalized();
        assert_eq!(card.name.len(), MAX_NAME_LEN);
        assert_eq!(card.background_images.len(), MAX_IMAGES);
    }
}
