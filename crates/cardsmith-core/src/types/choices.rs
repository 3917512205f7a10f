//! Closed choice lists: font, page design and occasion.
//!
//! Each enum carries the exact string written into share tokens
//! (`as_str`) and a tolerant reader (`from_wire`) that returns `None` for
//! anything it does not recognize, leaving the fallback to the caller.

use serde::{Deserialize, Serialize};

/// Font family used for the whole card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Font {
    #[default]
    #[serde(rename = "'Montserrat', sans-serif")]
    Montserrat,
    #[serde(rename = "'Great Vibes', cursive")]
    GreatVibes,
    #[serde(rename = "'Poppins', sans-serif")]
    Poppins,
    #[serde(rename = "'Dancing Script', cursive")]
    DancingScript,
    #[serde(rename = "'Merriweather', serif")]
    Merriweather,
    #[serde(rename = "'Roboto', sans-serif")]
    Roboto,
    #[serde(rename = "'Playfair Display', serif")]
    PlayfairDisplay,
}

impl Font {
    /// Every font, in picker order
    pub const ALL: [Font; 7] = [
        Font::Montserrat,
        Font::GreatVibes,
        Font::Poppins,
        Font::DancingScript,
        Font::Merriweather,
        Font::Roboto,
        Font::PlayfairDisplay,
    ];

    /// CSS `font-family` value; also the wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Font::Montserrat => "'Montserrat', sans-serif",
            Font::GreatVibes => "'Great Vibes', cursive",
            Font::Poppins => "'Poppins', sans-serif",
            Font::DancingScript => "'Dancing Script', cursive",
            Font::Merriweather => "'Merriweather', serif",
            Font::Roboto => "'Roboto', sans-serif",
            Font::PlayfairDisplay => "'Playfair Display', serif",
        }
    }

    /// Name shown in the picker
    pub fn label(&self) -> &'static str {
        match self {
            Font::Montserrat => "Montserrat",
            Font::GreatVibes => "Great Vibes (Fancy)",
            Font::Poppins => "Poppins",
            Font::DancingScript => "Dancing Script",
            Font::Merriweather => "Merriweather",
            Font::Roboto => "Roboto",
            Font::PlayfairDisplay => "Playfair Display",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }
}

/// Decorative treatment of the card's inner frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Design {
    /// Dashed border with star corners
    #[default]
    #[serde(rename = "dashed-border")]
    DashedBorder,
    /// Dashed border with floral corners
    #[serde(rename = "floral-corners")]
    FloralCorners,
    /// No border and no corner ornaments
    #[serde(rename = "none")]
    Plain,
}

impl Design {
    pub const ALL: [Design; 3] = [Design::DashedBorder, Design::FloralCorners, Design::Plain];

    pub fn as_str(&self) -> &'static str {
        match self {
            Design::DashedBorder => "dashed-border",
            Design::FloralCorners => "floral-corners",
            Design::Plain => "none",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Design::DashedBorder => "Dashed Border",
            Design::FloralCorners => "Floral Corners",
            Design::Plain => "None",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == s)
    }
}

/// The occasion; drives the title template and the centerpiece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardType {
    #[default]
    Birthday,
    Congrats,
    Grad,
    ThankYou,
    /// Free-form title taken from `customTitle`
    Custom,
}

impl CardType {
    pub const ALL: [CardType; 5] = [
        CardType::Birthday,
        CardType::Congrats,
        CardType::Grad,
        CardType::ThankYou,
        CardType::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Birthday => "birthday",
            CardType::Congrats => "congrats",
            CardType::Grad => "grad",
            CardType::ThankYou => "thank-you",
            CardType::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CardType::Birthday => "Happy Birthday",
            CardType::Congrats => "Congratulations",
            CardType::Grad => "Graduation",
            CardType::ThankYou => "Thank You",
            CardType::Custom => "Custom...",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values_match_serde() {
        for font in Font::ALL {
            let json = serde_json::to_value(font).unwrap();
            assert_eq!(json, serde_json::Value::String(font.as_str().to_string()));
        }
        for design in Design::ALL {
            let json = serde_json::to_value(design).unwrap();
            assert_eq!(json, serde_json::Value::String(design.as_str().to_string()));
        }
        for card_type in CardType::ALL {
            let json = serde_json::to_value(card_type).unwrap();
            assert_eq!(json, serde_json::Value::String(card_type.as_str().to_string()));
        }
    }

    #[test]
    fn test_from_wire_known_values() {
        assert_eq!(Font::from_wire("'Roboto', sans-serif"), Some(Font::Roboto));
        assert_eq!(Design::from_wire("none"), Some(Design::Plain));
        assert_eq!(CardType::from_wire("thank-you"), Some(CardType::ThankYou));
    }

    #[test]
    fn test_from_wire_unknown_values() {
        assert_eq!(Font::from_wire("Comic Sans"), None);
        assert_eq!(Design::from_wire("Dashed-Border"), None);
        assert_eq!(CardType::from_wire("anniversary"), None);
        assert_eq!(CardType::from_wire(""), None);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Font::default(), Font::Montserrat);
        assert_eq!(Design::default(), Design::DashedBorder);
        assert_eq!(CardType::default(), CardType::Birthday);
    }
}
