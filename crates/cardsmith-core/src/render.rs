//! What a card looks like, derived from its config.
//!
//! Pure functions only: equal configs always produce an equal [`CardView`],
//! which is what makes a decoded link render exactly like the card that
//! was shared.

use crate::types::{CardConfig, CardType, Design, HexColor};

/// Title used for custom cards when no custom title was typed
pub const CUSTOM_TITLE_FALLBACK: &str = "A Special Note For";

/// Animated decoration between title and message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Centerpiece {
    PulsatingHeart,
    Fireworks,
    GradCap,
    Confetti,
    Sparkle,
}

impl Centerpiece {
    /// Whether the decoration is drawn in the card's border color
    pub fn uses_accent(&self) -> bool {
        matches!(self, Centerpiece::GradCap | Centerpiece::Sparkle)
    }
}

/// Ornament drawn at the four corners of the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerOrnament {
    Star,
    Floral,
}

/// How the background images fill the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackgroundLayout {
    None,
    /// One image covering the card
    Single,
    /// Grid of `columns` x `rows`; with `tall_first` the first image
    /// spans both rows
    Collage {
        columns: u8,
        rows: u8,
        tall_first: bool,
    },
}

impl BackgroundLayout {
    pub fn for_count(count: usize) -> Self {
        match count {
            0 => BackgroundLayout::None,
            1 => BackgroundLayout::Single,
            2 => BackgroundLayout::Collage { columns: 2, rows: 1, tall_first: false },
            3 => BackgroundLayout::Collage { columns: 2, rows: 2, tall_first: true },
            5 => BackgroundLayout::Collage { columns: 3, rows: 2, tall_first: true },
            _ => BackgroundLayout::Collage { columns: 2, rows: 2, tall_first: false },
        }
    }
}

/// Heading text for a card
pub fn title(config: &CardConfig) -> String {
    let recipient = &config.recipient;
    match config.card_type {
        CardType::Birthday => format!("Happy Birthday, {}!", recipient),
        CardType::Congrats => format!("Congratulations, {}!", recipient),
        CardType::Grad => format!("Congrats Grad, {}!", recipient),
        CardType::ThankYou => format!("Thank You, {}!", recipient),
        CardType::Custom => {
            let lead = if config.custom_title.is_empty() {
                CUSTOM_TITLE_FALLBACK
            } else {
                config.custom_title.as_str()
            };
            format!("{}, {}!", lead, recipient)
        }
    }
}

pub fn centerpiece(card_type: CardType) -> Centerpiece {
    match card_type {
        CardType::Birthday => Centerpiece::PulsatingHeart,
        CardType::Congrats => Centerpiece::Fireworks,
        CardType::Grad => Centerpiece::GradCap,
        CardType::ThankYou => Centerpiece::Confetti,
        CardType::Custom => Centerpiece::Sparkle,
    }
}

pub fn corner_ornament(design: Design) -> Option<CornerOrnament> {
    match design {
        Design::DashedBorder => Some(CornerOrnament::Star),
        Design::FloralCorners => Some(CornerOrnament::Floral),
        Design::Plain => None,
    }
}

/// Everything the renderer needs, in one value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    pub centerpiece: Centerpiece,
    pub font_family: &'static str,
    pub framed: bool,
    pub corner: Option<CornerOrnament>,
    pub background: BackgroundLayout,
    pub border_color: HexColor,
    pub heading_color: HexColor,
    pub message_color: HexColor,
    pub signature_color: HexColor,
    pub name_color: HexColor,
}

impl CardView {
    pub fn from_config(config: &CardConfig) -> Self {
        Self {
            title: title(config),
            centerpiece: centerpiece(config.card_type),
            font_family: config.font.as_str(),
            framed: config.design != Design::Plain,
            corner: corner_ornament(config.design),
            background: BackgroundLayout::for_count(config.background_images.len()),
            border_color: config.border_color,
            heading_color: config.heading_color,
            message_color: config.message_color,
            signature_color: config.signature_color,
            name_color: config.name_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CardImage, Font};

    fn card(card_type: CardType, recipient: &str) -> CardConfig {
        CardConfig {
            card_type,
            recipient: recipient.to_string(),
            ..CardConfig::default()
        }
    }

    #[test]
    fn test_title_templates() {
        assert_eq!(title(&card(CardType::Birthday, "Mom")), "Happy Birthday, Mom!");
        assert_eq!(title(&card(CardType::Congrats, "Ana")), "Congratulations, Ana!");
        assert_eq!(title(&card(CardType::Grad, "Leo")), "Congrats Grad, Leo!");
        assert_eq!(title(&card(CardType::ThankYou, "Sam")), "Thank You, Sam!");
    }

    #[test]
    fn test_custom_title() {
        let mut c = card(CardType::Custom, "Dad");
        assert_eq!(title(&c), "A Special Note For, Dad!");

        c.custom_title = "Happy Anniversary".to_string();
        assert_eq!(title(&c), "Happy Anniversary, Dad!");
    }

    #[test]
    fn test_custom_title_ignored_for_other_types() {
        let mut c = card(CardType::Grad, "Leo");
        c.custom_title = "Ignored".to_string();
        assert_eq!(title(&c), "Congrats Grad, Leo!");
    }

    #[test]
    fn test_centerpiece_per_type() {
        assert_eq!(centerpiece(CardType::Birthday), Centerpiece::PulsatingHeart);
        assert_eq!(centerpiece(CardType::Congrats), Centerpiece::Fireworks);
        assert_eq!(centerpiece(CardType::Grad), Centerpiece::GradCap);
        assert_eq!(centerpiece(CardType::ThankYou), Centerpiece::Confetti);
        assert_eq!(centerpiece(CardType::Custom), Centerpiece::Sparkle);
        assert!(Centerpiece::GradCap.uses_accent());
        assert!(!Centerpiece::Fireworks.uses_accent());
    }

    #[test]
    fn test_background_layouts() {
        assert_eq!(BackgroundLayout::for_count(0), BackgroundLayout::None);
        assert_eq!(BackgroundLayout::for_count(1), BackgroundLayout::Single);
        assert_eq!(
            BackgroundLayout::for_count(3),
            BackgroundLayout::Collage { columns: 2, rows: 2, tall_first: true }
        );
        assert_eq!(
            BackgroundLayout::for_count(4),
            BackgroundLayout::Collage { columns: 2, rows: 2, tall_first: false }
        );
        assert_eq!(
            BackgroundLayout::for_count(5),
            BackgroundLayout::Collage { columns: 3, rows: 2, tall_first: true }
        );
    }

    #[test]
    fn test_view_from_config() {
        let mut c = card(CardType::Birthday, "Mom");
        c.design = Design::Plain;
        c.font = Font::DancingScript;
        c.background_images =
            vec![CardImage::from_data_uri("data:image/png;base64,AAAA").unwrap(); 2];

        let view = CardView::from_config(&c);
        assert_eq!(view.title, "Happy Birthday, Mom!");
        assert!(!view.framed);
        assert_eq!(view.corner, None);
        assert_eq!(view.font_family, "'Dancing Script', cursive");
        assert!(matches!(view.background, BackgroundLayout::Collage { columns: 2, rows: 1, .. }));
        assert_eq!(view, CardView::from_config(&c.clone()));
    }
}
