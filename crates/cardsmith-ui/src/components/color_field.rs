//! Color Picker Component

use dioxus::prelude::*;

/// Properties for the ColorField component
#[derive(Clone, PartialEq, Props)]
pub struct ColorFieldProps {
    /// ID used for label association
    pub id: String,
    /// Label shown beside the swatch
    pub label: String,
    /// Current color as `#rrggbb`
    pub value: String,
    /// Handler called with the picked color, as the platform reports it
    pub oninput: EventHandler<String>,
    /// Render a larger swatch, for the primary accent color
    #[props(default = false)]
    pub prominent: bool,
}

/// Native color picker with a label
#[component]
pub fn ColorField(props: ColorFieldProps) -> Element {
    let swatch_class = if props.prominent {
        "color-swatch color-swatch-lg"
    } else {
        "color-swatch"
    };

    rsx! {
        div { class: "color-field",
            label {
                class: "color-label",
                r#for: "{props.id}",
                "{props.label}"
            }
            input {
                id: "{props.id}",
                class: "{swatch_class}",
                r#type: "color",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
