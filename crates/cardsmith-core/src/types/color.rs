//! Hex RGB colors as produced by a color picker (`#rrggbb`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// An opaque RGB color.
///
/// Always displayed in the lowercase `#rrggbb` form, which is what an HTML
/// color input reports, so a parsed color serializes back to the same text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor([u8; 3]);

/// The text was not `#rgb` or `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color '{0}': expected #rgb or #rrggbb")]
pub struct ParseColorError(pub String);

impl HexColor {
    /// Create a color from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Red, green and blue channels
    pub fn channels(&self) -> [u8; 3] {
        self.0
    }

    /// Lenient parse used when reading share tokens
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

impl FromStr for HexColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(err)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }

        let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| err());
        match digits.len() {
            6 => Ok(Self([
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            ])),
            3 => {
                // #abc is shorthand for #aabbcc
                let mut out = [0u8; 3];
                for (slot, nibble) in out.iter_mut().zip(digits.chars()) {
                    let v = channel(&nibble.to_string())?;
                    *slot = v * 16 + v;
                }
                Ok(Self(out))
            }
            _ => Err(err()),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        let c: HexColor = "#f43f5e".parse().unwrap();
        assert_eq!(c.channels(), [0xf4, 0x3f, 0x5e]);
        assert_eq!(c.to_string(), "#f43f5e");
    }

    #[test]
    fn test_parse_is_case_insensitive_and_normalizes() {
        let c: HexColor = "#FECDD3".parse().unwrap();
        assert_eq!(c.to_string(), "#fecdd3");
    }

    #[test]
    fn test_parse_short_form() {
        let c: HexColor = "#fa0".parse().unwrap();
        assert_eq!(c, HexColor::rgb(0xff, 0xaa, 0x00));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "#", "f43f5e", "#f43f5", "#gggggg", "#f43f5e00", "red", "#ééé"] {
            assert!(bad.parse::<HexColor>().is_err(), "accepted {bad:?}");
        }
        assert_eq!(HexColor::parse("nope"), None);
    }

    #[test]
    fn test_serde_as_string() {
        let c = HexColor::rgb(0x37, 0x41, 0x51);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#374151\"");
        let back: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
