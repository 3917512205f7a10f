//! Select Component
//!
//! Dropdown over a closed set of choices. Each option pairs the value that
//! goes over the wire with the label the user reads.

use dioxus::prelude::*;

/// One entry in a [`SelectField`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl SelectOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Properties for the SelectField component
#[derive(Clone, PartialEq, Props)]
pub struct SelectFieldProps {
    /// ID used for label association
    pub id: String,
    /// Label shown above the dropdown
    pub label: String,
    /// Value of the selected option
    pub value: String,
    /// Available choices, in display order
    pub options: Vec<SelectOption>,
    /// Handler called with the value of the newly selected option
    pub onchange: EventHandler<String>,
}

/// Labelled dropdown
///
/// # Example
///
/// ```rust,ignore
/// let options = Design::ALL
///     .iter()
///     .map(|d| SelectOption::new(d.as_str(), d.label()))
///     .collect();
///
/// rsx! {
///     SelectField {
///         id: "design",
///         label: "Page Design",
///         value: config.design.as_str(),
///         options,
///         onchange: move |v: String| { /* ... */ },
///     }
/// }
/// ```
#[component]
pub fn SelectField(props: SelectFieldProps) -> Element {
    rsx! {
        div { class: "form-field",
            label {
                class: "input-label",
                r#for: "{props.id}",
                "{props.label}"
            }
            select {
                id: "{props.id}",
                class: "input-field select",
                value: "{props.value}",
                onchange: move |e| props.onchange.call(e.value()),
                for choice in props.options.iter() {
                    option {
                        key: "{choice.value}",
                        value: "{choice.value}",
                        selected: choice.value == props.value,
                        "{choice.label}"
                    }
                }
            }
        }
    }
}
