//! Card state store.
//!
//! A flat, mutable holder for one [`CardConfig`] with one setter per field.
//! There is no cross-field validation; the only rules are the per-field
//! character limits and the background image cap, both enforced here so
//! that no sequence of edits can produce a card the link codec would
//! change on the way back.

use crate::types::{
    clamp_chars, CardConfig, CardImage, CardType, Design, Font, HexColor, MAX_CUSTOM_TITLE_LEN,
    MAX_IMAGES, MAX_NAME_LEN, MAX_RECIPIENT_LEN, MAX_SIGNATURE_LEN,
};

/// The five independently chosen colors on a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    /// Border and accent (also tints the grad cap and sparkle)
    Border,
    Heading,
    Message,
    Signature,
    Name,
}

impl ColorSlot {
    pub const ALL: [ColorSlot; 5] = [
        ColorSlot::Border,
        ColorSlot::Heading,
        ColorSlot::Message,
        ColorSlot::Signature,
        ColorSlot::Name,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ColorSlot::Border => "Border & Accent Color",
            ColorSlot::Heading => "Heading",
            ColorSlot::Message => "Message",
            ColorSlot::Signature => "Signature",
            ColorSlot::Name => "Name",
        }
    }
}

/// Holds the card being edited or viewed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardStore {
    config: CardConfig,
}

impl CardStore {
    /// A store holding the default card
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding `config`, clamped to the field limits
    pub fn from_config(config: CardConfig) -> Self {
        Self {
            config: config.normalized(),
        }
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn into_config(self) -> CardConfig {
        self.config
    }

    /// Swap in a whole new card in one step
    pub fn replace(&mut self, config: CardConfig) {
        self.config = config.normalized();
    }

    /// Restore every field to its default in one step
    pub fn reset(&mut self) {
        self.config = CardConfig::default();
        tracing::debug!("card reset to defaults");
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.config.message = message.into();
    }

    pub fn set_signature(&mut self, signature: &str) {
        self.config.signature = clamp_chars(signature, MAX_SIGNATURE_LEN);
    }

    pub fn set_name(&mut self, name: &str) {
        self.config.name = clamp_chars(name, MAX_NAME_LEN);
    }

    pub fn set_recipient(&mut self, recipient: &str) {
        self.config.recipient = clamp_chars(recipient, MAX_RECIPIENT_LEN);
    }

    pub fn set_font(&mut self, font: Font) {
        self.config.font = font;
    }

    pub fn set_design(&mut self, design: Design) {
        self.config.design = design;
    }

    pub fn set_card_type(&mut self, card_type: CardType) {
        self.config.card_type = card_type;
    }

    pub fn set_custom_title(&mut self, title: &str) {
        self.config.custom_title = clamp_chars(title, MAX_CUSTOM_TITLE_LEN);
    }

    pub fn set_border_color(&mut self, color: HexColor) {
        self.config.border_color = color;
    }

    pub fn set_heading_color(&mut self, color: HexColor) {
        self.config.heading_color = color;
    }

    pub fn set_message_color(&mut self, color: HexColor) {
        self.config.message_color = color;
    }

    pub fn set_signature_color(&mut self, color: HexColor) {
        self.config.signature_color = color;
    }

    pub fn set_name_color(&mut self, color: HexColor) {
        self.config.name_color = color;
    }

    /// Read one of the five colors
    pub fn color(&self, slot: ColorSlot) -> HexColor {
        match slot {
            ColorSlot::Border => self.config.border_color,
            ColorSlot::Heading => self.config.heading_color,
            ColorSlot::Message => self.config.message_color,
            ColorSlot::Signature => self.config.signature_color,
            ColorSlot::Name => self.config.name_color,
        }
    }

    /// Set one of the five colors
    pub fn set_color(&mut self, slot: ColorSlot, color: HexColor) {
        match slot {
            ColorSlot::Border => self.set_border_color(color),
            ColorSlot::Heading => self.set_heading_color(color),
            ColorSlot::Message => self.set_message_color(color),
            ColorSlot::Signature => self.set_signature_color(color),
            ColorSlot::Name => self.set_name_color(color),
        }
    }

    pub fn images(&self) -> &[CardImage] {
        &self.config.background_images
    }

    /// How many more images the card can take
    pub fn free_image_slots(&self) -> usize {
        MAX_IMAGES.saturating_sub(self.config.background_images.len())
    }

    pub fn is_full(&self) -> bool {
        self.free_image_slots() == 0
    }

    /// Append a batch of images in order, as one operation.
    ///
    /// Images beyond the cap are dropped without touching the ones already
    /// on the card. Returns how many were accepted.
    pub fn append_images(&mut self, batch: impl IntoIterator<Item = CardImage>) -> usize {
        let free = self.free_image_slots();
        let before = self.config.background_images.len();
        self.config
            .background_images
            .extend(batch.into_iter().take(free));
        let accepted = self.config.background_images.len() - before;
        tracing::debug!(accepted, total = self.config.background_images.len(), "images appended");
        accepted
    }

    /// Remove the image at `index`; out of range is a no-op
    pub fn remove_image(&mut self, index: usize) -> Option<CardImage> {
        if index < self.config.background_images.len() {
            Some(self.config.background_images.remove(index))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DEFAULT_MESSAGE, DEFAULT_RECIPIENT};

    fn image(tag: &str) -> CardImage {
        CardImage::from_data_uri(format!("data:image/jpeg;base64,{}", tag)).unwrap()
    }

    #[test]
    fn test_new_store_holds_defaults() {
        let store = CardStore::new();
        assert_eq!(store.config(), &CardConfig::default());
        assert_eq!(store.free_image_slots(), MAX_IMAGES);
    }

    #[test]
    fn test_text_setters_clamp() {
        let mut store = CardStore::new();
        store.set_signature(&"s".repeat(31));
        store.set_name(&"n".repeat(100));
        store.set_recipient("Grandma Josephine Bartholomew-Smythe");
        store.set_custom_title(&"t".repeat(41));
        store.set_message("m".repeat(500));

        let card = store.config();
        assert_eq!(card.signature.chars().count(), 30);
        assert_eq!(card.name.chars().count(), 30);
        assert_eq!(card.recipient, "Grandma Josephine Bartholomew-");
        assert_eq!(card.custom_title.chars().count(), 40);
        assert_eq!(card.message.len(), 500);
    }

    #[test]
    fn test_color_slots() {
        let mut store = CardStore::new();
        let teal = HexColor::rgb(0, 0x80, 0x80);
        for slot in ColorSlot::ALL {
            store.set_color(slot, teal);
            assert_eq!(store.color(slot), teal);
        }
        assert_eq!(store.config().name_color, teal);
        assert_eq!(store.config().border_color, teal);
    }

    #[test]
    fn test_append_respects_cap() {
        let mut store = CardStore::new();
        assert_eq!(store.append_images([image("A"), image("B")]), 2);
        assert_eq!(store.append_images((0..6).map(|i| image(&format!("X{i}")))), 3);
        assert!(store.is_full());

        let uris: Vec<&str> = store.images().iter().map(CardImage::as_data_uri).collect();
        assert_eq!(uris[0], "data:image/jpeg;base64,A");
        assert_eq!(uris[1], "data:image/jpeg;base64,B");
        assert_eq!(uris[4], "data:image/jpeg;base64,X2");

        assert_eq!(store.append_images([image("late")]), 0);
        assert_eq!(store.images().len(), MAX_IMAGES);
    }

    #[test]
    fn test_remove_image() {
        let mut store = CardStore::new();
        store.append_images([image("A"), image("B"), image("C")]);

        assert_eq!(store.remove_image(1), Some(image("B")));
        assert_eq!(store.images(), &[image("A"), image("C")]);
        assert_eq!(store.remove_image(7), None);
        assert_eq!(store.images().len(), 2);
    }

    #[test]
    fn test_reset_restores_every_default() {
        let mut store = CardStore::new();
        store.set_message("Hi");
        store.set_recipient("Sam");
        store.set_card_type(CardType::Custom);
        store.set_custom_title("Happy Anniversary");
        store.set_font(Font::GreatVibes);
        store.set_design(Design::Plain);
        store.set_heading_color(HexColor::rgb(1, 2, 3));
        store.append_images([image("A")]);

        store.reset();

        assert_eq!(store.config(), &CardConfig::default());
        assert_eq!(store.config().message, DEFAULT_MESSAGE);
        assert_eq!(store.config().recipient, DEFAULT_RECIPIENT);
        assert!(store.images().is_empty());
    }

    #[test]
    fn test_replace_normalizes() {
        let mut store = CardStore::new();
        let mut card = CardConfig::default();
        card.background_images = vec![image("Z"); 9];
        store.replace(card);
        assert_eq!(store.images().len(), MAX_IMAGES);
    }
}
