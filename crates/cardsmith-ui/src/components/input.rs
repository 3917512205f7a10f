//! Input Field Components
//!
//! Text inputs and textareas for card content. Fields with a length limit
//! show a "N characters remaining" counter under the input and stop
//! accepting characters at the limit.

use dioxus::prelude::*;

use super::button::join_classes;

/// Characters left before `value` reaches `max_len`
pub fn remaining_chars(value: &str, max_len: usize) -> usize {
    max_len.saturating_sub(value.chars().count())
}

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// ID used for label association
    pub id: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Maximum length in characters; shows the remaining-characters counter
    #[props(default)]
    pub max_len: Option<usize>,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Single-line text input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         id: "recipient",
///         value: config.recipient.clone(),
///         oninput: move |s: String| session.write().store_mut().set_recipient(&s),
///         label: "Recipient",
///         placeholder: "e.g., Mom, Dad, Sarah",
///         max_len: MAX_RECIPIENT_LEN,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let input_class = join_classes("input-field", props.class.as_deref());

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{props.id}",
                    "{label}"
                }
            }
            input {
                id: "{props.id}",
                class: "{input_class}",
                r#type: "text",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                maxlength: props.max_len.map(|n| n as i64),
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(max_len) = props.max_len {
                CharCounter { value: props.value.clone(), max_len }
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// ID used for label association
    pub id: String,
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    /// Textarea label
    #[props(default)]
    pub label: Option<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
    /// Maximum length in characters; shows the remaining-characters counter
    #[props(default)]
    pub max_len: Option<usize>,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{props.id}",
                    "{label}"
                }
            }
            textarea {
                id: "{props.id}",
                class: "input-field textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                maxlength: props.max_len.map(|n| n as i64),
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(max_len) = props.max_len {
                CharCounter { value: props.value.clone(), max_len }
            }
        }
    }
}

#[component]
fn CharCounter(value: String, max_len: usize) -> Element {
    let remaining = remaining_chars(&value, max_len);
    rsx! {
        p { class: "char-counter", "{remaining} characters remaining" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_counts_characters_not_bytes() {
        assert_eq!(remaining_chars("", 30), 30);
        assert_eq!(remaining_chars("Mom", 30), 27);
        assert_eq!(remaining_chars("Zoë", 30), 27);
        assert_eq!(remaining_chars("💐💐", 5), 3);
    }

    #[test]
    fn remaining_never_underflows() {
        let long = "x".repeat(45);
        assert_eq!(remaining_chars(&long, 40), 0);
    }
}
