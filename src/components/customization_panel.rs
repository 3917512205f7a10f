//! Customization Panel
//!
//! The editor shown below the card: content, appearance and sharing, each
//! in its own collapsible section. Every control writes straight into the
//! session's card store.

use cardsmith_core::{
    CardType, ColorSlot, Design, Font, HexColor, MAX_CUSTOM_TITLE_LEN, MAX_NAME_LEN,
    MAX_RECIPIENT_LEN, MAX_SIGNATURE_LEN,
};
use cardsmith_ui::{
    AccordionItem, AccordionState, ColorField, Input, SelectField, SelectOption, TextArea,
};
use dioxus::prelude::*;

use super::images::ImageUpload;
use super::share_button::ShareButton;
use crate::context::use_session;

fn card_type_options() -> Vec<SelectOption> {
    CardType::ALL
        .iter()
        .map(|t| SelectOption::new(t.as_str(), t.label()))
        .collect()
}

fn font_options() -> Vec<SelectOption> {
    Font::ALL
        .iter()
        .map(|f| SelectOption::new(f.as_str(), f.label()))
        .collect()
}

fn design_options() -> Vec<SelectOption> {
    Design::ALL
        .iter()
        .map(|d| SelectOption::new(d.as_str(), d.label()))
        .collect()
}

/// Form id for a color slot
fn color_field_id(slot: ColorSlot) -> &'static str {
    match slot {
        ColorSlot::Border => "borderColor",
        ColorSlot::Heading => "headingColor",
        ColorSlot::Message => "messageColor",
        ColorSlot::Signature => "signatureColor",
        ColorSlot::Name => "nameColor",
    }
}

#[component]
pub fn CustomizationPanel() -> Element {
    let mut session = use_session();
    let accordion = use_signal(|| AccordionState::opened("content"));

    let config = session.read().config().clone();

    rsx! {
        div { class: "customization-panel",
            h2 { class: "panel-title", "Customize Your Card" }
            div { class: "panel-sections",

                AccordionItem { id: "content", title: "Card Content", state: accordion,
                    div { class: "section-grid",
                        SelectField {
                            id: "cardType",
                            label: "Occasion",
                            value: config.card_type.as_str().to_string(),
                            options: card_type_options(),
                            onchange: move |value: String| {
                                match CardType::from_wire(&value) {
                                    Some(card_type) => session.write().store_mut().set_card_type(card_type),
                                    None => tracing::debug!("Ignoring unknown occasion {:?}", value),
                                }
                            },
                        }
                        Input {
                            id: "recipient",
                            label: "Recipient".to_string(),
                            value: config.recipient.clone(),
                            placeholder: "e.g., Mom, Dad, Sarah".to_string(),
                            max_len: MAX_RECIPIENT_LEN,
                            oninput: move |value: String| session.write().store_mut().set_recipient(&value),
                        }
                    }
                    if config.card_type == CardType::Custom {
                        div { class: "fade-in",
                            Input {
                                id: "customTitle",
                                label: "Custom Title".to_string(),
                                value: config.custom_title.clone(),
                                placeholder: "e.g., Happy Anniversary".to_string(),
                                max_len: MAX_CUSTOM_TITLE_LEN,
                                oninput: move |value: String| session.write().store_mut().set_custom_title(&value),
                            }
                        }
                    }
                    TextArea {
                        id: "message",
                        label: "Your Message".to_string(),
                        value: config.message.clone(),
                        placeholder: "Write your heartfelt message here...".to_string(),
                        rows: 5,
                        oninput: move |value: String| session.write().store_mut().set_message(value),
                    }
                    div { class: "section-grid",
                        Input {
                            id: "signature",
                            label: "Signature".to_string(),
                            value: config.signature.clone(),
                            placeholder: "e.g., With love,".to_string(),
                            max_len: MAX_SIGNATURE_LEN,
                            oninput: move |value: String| session.write().store_mut().set_signature(&value),
                        }
                        Input {
                            id: "name",
                            label: "Your Name".to_string(),
                            value: config.name.clone(),
                            placeholder: "e.g., Jane Doe".to_string(),
                            max_len: MAX_NAME_LEN,
                            oninput: move |value: String| session.write().store_mut().set_name(&value),
                        }
                    }
                }

                AccordionItem { id: "appearance", title: "Card Appearance", state: accordion,
                    SelectField {
                        id: "font",
                        label: "Font Style",
                        value: config.font.as_str().to_string(),
                        options: font_options(),
                        onchange: move |value: String| {
                            match Font::from_wire(&value) {
                                Some(font) => session.write().store_mut().set_font(font),
                                None => tracing::debug!("Ignoring unknown font {:?}", value),
                            }
                        },
                    }
                    SelectField {
                        id: "design",
                        label: "Page Design",
                        value: config.design.as_str().to_string(),
                        options: design_options(),
                        onchange: move |value: String| {
                            match Design::from_wire(&value) {
                                Some(design) => session.write().store_mut().set_design(design),
                                None => tracing::debug!("Ignoring unknown design {:?}", value),
                            }
                        },
                    }
                    ColorPicker { slot: ColorSlot::Border, value: config.border_color, prominent: true }
                    div { class: "text-colors",
                        p { class: "input-label", "Text Colors" }
                        div { class: "color-grid",
                            // every slot but the border
                            for (i, slot) in ColorSlot::ALL.into_iter().enumerate().skip(1) {
                                ColorPicker {
                                    key: "{i}",
                                    slot,
                                    value: session.read().store().color(slot),
                                }
                            }
                        }
                    }
                    ImageUpload {}
                }

                AccordionItem { id: "share", title: "Share Your Card", state: accordion,
                    ShareButton {}
                }
            }
        }
    }
}

/// Color input bound to one of the card's color slots
#[component]
fn ColorPicker(slot: ColorSlot, value: HexColor, #[props(default)] prominent: bool) -> Element {
    let mut session = use_session();
    rsx! {
        ColorField {
            id: color_field_id(slot).to_string(),
            label: slot.label().to_string(),
            value: value.to_string(),
            prominent,
            oninput: move |raw: String| {
                match HexColor::parse(&raw) {
                    Some(color) => session.write().store_mut().set_color(slot, color),
                    None => tracing::debug!("Ignoring unparseable color {:?}", raw),
                }
            },
        }
    }
}
