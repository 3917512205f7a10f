use cardsmith_core::Session;
use cardsmith_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::components::{CardPreview, CustomizationPanel};
use crate::context::get_location;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Shows the card, and below it either the editor or, for a card opened
/// from a link, a single "Create Your Own Card" button.
#[component]
pub fn App() -> Element {
    let mut session: Signal<Session> = use_signal(|| Session::load(get_location()));
    use_context_provider(|| session);

    let view_mode = session.read().is_view_mode();

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "app-shell",
            div { class: "app-column",
                CardPreview {}
                if view_mode {
                    div { key: "viewer", class: "fade-in viewer-actions",
                        Button {
                            variant: ButtonVariant::Pill,
                            aria_label: "Create your own virtual card".to_string(),
                            onclick: move |_| session.write().create_your_own(),
                            "Create Your Own Card"
                        }
                    }
                } else {
                    div { key: "editor", class: "fade-in",
                        CustomizationPanel {}
                    }
                }
            }
        }
    }
}
