//! Blocking alert dialogs.

use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Show an error alert without blocking the UI thread.
///
/// Waits until the user dismisses the dialog.
pub async fn alert(title: &'static str, message: String) {
    let shown = tokio::task::spawn_blocking(move || {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show()
    })
    .await;

    if let Err(e) = shown {
        tracing::error!("Alert dialog failed: {}", e);
    }
}
