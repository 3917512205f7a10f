//! Core types for Cardsmith
//!
//! Everything a card is made of: the [`CardConfig`] record, its closed
//! choice enums, hex colors and inline background images.

mod card;
mod choices;
mod color;
mod image;

pub use card::{
    clamp_chars, CardConfig, DEFAULT_BORDER_COLOR, DEFAULT_HEADING_COLOR, DEFAULT_MESSAGE,
    DEFAULT_MESSAGE_COLOR, DEFAULT_NAME, DEFAULT_NAME_COLOR, DEFAULT_RECIPIENT, DEFAULT_SIGNATURE,
    DEFAULT_SIGNATURE_COLOR, FIELD_KEYS, MAX_CUSTOM_TITLE_LEN, MAX_IMAGES, MAX_NAME_LEN,
    MAX_RECIPIENT_LEN, MAX_SIGNATURE_LEN,
};
pub use choices::{CardType, Design, Font};
pub use color::{HexColor, ParseColorError};
pub use image::CardImage;
