//! UI Components for Cardsmith.

mod alert;
mod card_view;
mod centerpiece;
mod customization_panel;
pub mod images;
mod share_button;

pub use card_view::{Card, CardPreview};
pub use customization_panel::CustomizationPanel;
pub use share_button::ShareButton;
