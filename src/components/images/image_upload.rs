//! Image Upload Component
//!
//! File picker for background images, with a thumbnail strip of the images
//! already on the card.

use cardsmith_core::{process_uploads, CardError, UploadFile, MAX_IMAGES};
use cardsmith_ui::RemoveButton;
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::components::alert::alert;
use crate::context::use_session;

/// Extensions offered by the picker
const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Text of the alert listing files that could not be added
fn failure_message(failures: &[CardError]) -> String {
    let mut message = String::from("Sorry, there was an error processing your images.\n");
    for failure in failures {
        message.push('\n');
        message.push_str(&failure.to_string());
    }
    message
}

/// Background image picker with previews
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ImageUpload {}
/// }
/// ```
#[component]
pub fn ImageUpload() -> Element {
    let mut session = use_session();
    let mut uploading = use_signal(|| false);

    let images = session.read().store().images().to_vec();
    let full = session.read().store().is_full();

    let handle_upload = move |_| {
        uploading.set(true);

        spawn(async move {
            // Open file picker (blocking, but in spawn so UI stays responsive)
            let picked = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", &IMAGE_EXTENSIONS)
                    .set_title("Select Images")
                    .pick_files()
            })
            .await;

            let paths = match picked {
                Ok(Some(paths)) => paths,
                Ok(None) => {
                    // User cancelled
                    uploading.set(false);
                    return;
                }
                Err(e) => {
                    tracing::error!("File picker failed: {}", e);
                    uploading.set(false);
                    return;
                }
            };

            let free_slots = session.read().store().free_image_slots();
            let mut failures = Vec::new();
            let mut files = Vec::new();
            for path in paths.iter().take(free_slots) {
                match UploadFile::read(path) {
                    Ok(file) => files.push(file),
                    Err(e) => failures.push(CardError::ImageProcessing {
                        file: path.display().to_string(),
                        reason: e.to_string(),
                    }),
                }
            }

            let batch = process_uploads(files, free_slots).await;
            let accepted = session.write().store_mut().append_images(batch.images);
            tracing::info!(
                picked = paths.len(),
                accepted,
                failed = failures.len() + batch.failures.len(),
                "Added background images"
            );
            uploading.set(false);

            failures.extend(batch.failures);
            if !failures.is_empty() {
                alert("Image upload", failure_message(&failures)).await;
            }
        });
    };

    rsx! {
        div { class: "form-field image-upload",
            label { class: "input-label", "Background Image/Collage" }
            button {
                class: "image-upload-btn",
                r#type: "button",
                onclick: handle_upload,
                disabled: full || uploading(),
                if uploading() {
                    "Processing..."
                } else {
                    "Choose Images"
                }
            }
            p { class: "field-help",
                "Upload up to {MAX_IMAGES} images. Select one for a background or multiple for a collage."
            }
            div { class: "thumbnail-strip",
                for (index, image) in images.iter().enumerate() {
                    div { key: "{index}", class: "thumbnail",
                        img {
                            src: image.as_data_uri(),
                            alt: "upload-preview-{index}",
                        }
                        RemoveButton {
                            aria_label: format!("Remove image {}", index + 1),
                            onclick: move |_| {
                                session.write().store_mut().remove_image(index);
                            },
                        }
                    }
                }
            }
        }
    }
}
