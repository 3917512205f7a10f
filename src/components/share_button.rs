//! Share button
//!
//! Builds the share link for the current card and copies it to the
//! clipboard. The label flips to "Link Copied!" for two seconds on success.

use std::time::Duration;

use cardsmith_core::{CardError, CardResult};
use cardsmith_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::components::alert::alert;
use crate::context::use_session;

const IDLE_LABEL: &str = "Generate & Copy Link";
const COPIED_LABEL: &str = "Link Copied!";

fn copy_to_clipboard(text: &str) -> CardResult<()> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| CardError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| CardError::Clipboard(e.to_string()))
}

#[component]
pub fn ShareButton() -> Element {
    let session = use_session();
    let mut copied = use_signal(|| false);

    let handle_share = move |_: ()| {
        let url = session.read().share_url();

        spawn(async move {
            let url = match url {
                Ok(url) => url,
                Err(e) => {
                    tracing::error!("Error generating link: {}", e);
                    alert(
                        "Share",
                        "Sorry, there was an error creating your shareable link.".to_string(),
                    )
                    .await;
                    return;
                }
            };
            tracing::debug!(length = url.len(), "Generated share link");

            match copy_to_clipboard(&url) {
                Ok(()) => {
                    copied.set(true);
                    tokio::time::sleep(Duration::from_secs(2)).await;
                    copied.set(false);
                }
                Err(e) => {
                    tracing::warn!("Failed to copy link: {}", e);
                    alert("Share", "Failed to copy link. Please try again.".to_string()).await;
                }
            }
        });
    };

    rsx! {
        div { class: "share-section",
            p { class: "field-help",
                "Generate a unique link to your animated card to share anywhere! Your design, including any custom images, will be included."
            }
            Button {
                variant: ButtonVariant::Primary,
                class: "share-btn".to_string(),
                onclick: handle_share,
                if copied() {
                    "{COPIED_LABEL}"
                } else {
                    "{IDLE_LABEL}"
                }
            }
        }
    }
}
