//! Card Image Type - self-contained background images
//!
//! Background images travel inside the share link, so they are always
//! inline `data:image/<subtype>;base64,<payload>` URIs and never refer to a
//! file or a server.

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

const IMAGE_MEDIA_PREFIX: &str = "image/";
const BASE64_MARKER: &str = ";base64,";

/// One background image, held as its inline data URI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardImage(String);

impl CardImage {
    /// Wrap an existing data URI, checking its shape
    ///
    /// # Errors
    ///
    /// Returns `CardError::InvalidImage` if the string is not a base64
    /// `data:image/...` URI or carries an empty payload.
    pub fn from_data_uri(uri: impl Into<String>) -> CardResult<Self> {
        let uri = uri.into();
        let (media_type, payload) = split_data_uri(&uri).ok_or_else(|| {
            CardError::InvalidImage(format!(
                "expected data:image/...;base64, got '{}'",
                uri.chars().take(24).collect::<String>()
            ))
        })?;

        if media_type.len() <= IMAGE_MEDIA_PREFIX.len() {
            return Err(CardError::InvalidImage("missing image subtype".to_string()));
        }
        if payload.is_empty() {
            return Err(CardError::InvalidImage("empty payload".to_string()));
        }
        Ok(Self(uri))
    }

    /// Encode raw image bytes with the given media type (e.g. `image/jpeg`)
    pub fn from_bytes(media_type: &str, bytes: &[u8]) -> CardResult<Self> {
        let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
        Self::from_data_uri(format!("data:{}{}{}", media_type, BASE64_MARKER, payload))
    }

    /// The full data URI, usable directly as an `img src` or CSS `url()`
    pub fn as_data_uri(&self) -> &str {
        &self.0
    }

    /// Media type, e.g. `image/jpeg`
    pub fn media_type(&self) -> &str {
        split_data_uri(&self.0).map(|(mt, _)| mt).unwrap_or_default()
    }

    /// Decode the payload back into raw image bytes
    pub fn decode_bytes(&self) -> CardResult<Vec<u8>> {
        let (_, payload) = split_data_uri(&self.0)
            .ok_or_else(|| CardError::InvalidImage("not a data URI".to_string()))?;
        base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| CardError::InvalidImage(format!("bad base64 payload: {}", e)))
    }

    /// Length of the data URI in bytes (what the image costs in a link)
    pub fn encoded_len(&self) -> usize {
        self.0.len()
    }
}

impl TryFrom<String> for CardImage {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_data_uri(value)
    }
}

impl From<CardImage> for String {
    fn from(image: CardImage) -> Self {
        image.0
    }
}

/// Split `data:image/png;base64,AAAA` into (`image/png`, `AAAA`)
fn split_data_uri(uri: &str) -> Option<(&str, &str)> {
    let rest = uri.strip_prefix("data:")?;
    if !rest.starts_with(IMAGE_MEDIA_PREFIX) {
        return None;
    }
    let marker = rest.find(BASE64_MARKER)?;
    Some((&rest[..marker], &rest[marker + BASE64_MARKER.len()..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri_accepted() {
        let img = CardImage::from_data_uri("data:image/png;base64,iVBORw0KG").unwrap();
        assert_eq!(img.media_type(), "image/png");
        assert_eq!(img.as_data_uri(), "data:image/png;base64,iVBORw0KG");
    }

    #[test]
    fn test_non_inline_rejected() {
        for bad in [
            "",
            "https://example.com/cat.jpg",
            "data:text/plain;base64,aGk=",
            "data:image/png,rawbytes",
            "data:image/;base64,aGk=",
            "data:image/png;base64,",
        ] {
            let result = CardImage::from_data_uri(bad);
            assert!(
                matches!(result, Err(CardError::InvalidImage(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_from_bytes_and_back() {
        let img = CardImage::from_bytes("image/jpeg", &[0xFF, 0xD8, 0xFF, 0xE0]).unwrap();
        assert_eq!(img.media_type(), "image/jpeg");
        assert!(img.as_data_uri().starts_with("data:image/jpeg;base64,"));
        assert_eq!(img.decode_bytes().unwrap(), vec![0xFF, 0xD8, 0xFF, 0xE0]);
    }

    #[test]
    fn test_serde_is_a_plain_string() {
        let img = CardImage::from_data_uri("data:image/webp;base64,UklGRg==").unwrap();
        let json = serde_json::to_string(&img).unwrap();
        assert_eq!(json, "\"data:image/webp;base64,UklGRg==\"");

        let back: CardImage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, img);

        let bad: Result<CardImage, _> = serde_json::from_str("\"/tmp/cat.png\"");
        assert!(bad.is_err());
    }
}
