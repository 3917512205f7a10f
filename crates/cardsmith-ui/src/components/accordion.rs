//! Accordion Components
//!
//! Collapsible sections for the editor panel. At most one section is open;
//! clicking the open section's header closes it.

use dioxus::prelude::*;

/// Which section of an accordion is open
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<String>,
}

impl AccordionState {
    /// Start with `id` expanded
    pub fn opened(id: impl Into<String>) -> Self {
        Self {
            open: Some(id.into()),
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.as_deref() == Some(id)
    }

    /// Open `id`, or close it if it is already open
    pub fn toggle(&mut self, id: &str) {
        if self.is_open(id) {
            self.open = None;
        } else {
            self.open = Some(id.to_string());
        }
    }
}

/// Properties for the AccordionItem component
#[derive(Clone, PartialEq, Props)]
pub struct AccordionItemProps {
    /// Section identifier
    pub id: String,
    /// Header text
    pub title: String,
    /// Shared open-section state
    pub state: Signal<AccordionState>,
    /// Section body
    pub children: Element,
}

#[component]
pub fn AccordionItem(props: AccordionItemProps) -> Element {
    let mut state = props.state;
    let open = state.read().is_open(&props.id);
    let chevron_class = if open { "chevron open" } else { "chevron" };
    let body_class = if open {
        "accordion-body"
    } else {
        "accordion-body hidden"
    };
    let id = props.id.clone();

    rsx! {
        div { class: "accordion-item",
            h2 {
                button {
                    class: "accordion-header",
                    r#type: "button",
                    "aria-expanded": open,
                    onclick: move |_| state.write().toggle(&id),
                    span { "{props.title}" }
                    svg {
                        class: "{chevron_class}",
                        xmlns: "http://www.w3.org/2000/svg",
                        fill: "none",
                        view_box: "0 0 24 24",
                        stroke: "currentColor",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            stroke_width: "2",
                            d: "M19 9l-7 7-7-7",
                        }
                    }
                }
            }
            div { class: "{body_class}", {props.children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_one_section_at_a_time() {
        let mut state = AccordionState::opened("content");
        assert!(state.is_open("content"));

        state.toggle("appearance");
        assert!(state.is_open("appearance"));
        assert!(!state.is_open("content"));
    }

    #[test]
    fn toggle_closes_the_open_section() {
        let mut state = AccordionState::opened("share");
        state.toggle("share");
        assert!(!state.is_open("share"));
        assert_eq!(state, AccordionState::default());
    }
}
