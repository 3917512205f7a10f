//! Background image intake.
//!
//! Uploaded files are shrunk before they go anywhere near a share link:
//! decoded, scaled so the long edge is at most [`MAX_EDGE`] pixels, and
//! re-encoded as JPEG at [`JPEG_QUALITY`]. A batch of uploads is processed
//! in parallel and handed back as one ordered result so the caller can
//! apply it to the store in a single append.

use std::io::Cursor;

use futures::future::join_all;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::GenericImageView;

use crate::error::{CardError, CardResult};
use crate::types::CardImage;

/// Longest edge of a recompressed image, in pixels
pub const MAX_EDGE: u32 = 1024;

/// JPEG quality used for recompression (0-100)
pub const JPEG_QUALITY: u8 = 70;

/// A file picked by the user, already read into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// Display name, used in error messages
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a file from disk
    pub fn read(path: &std::path::Path) -> CardResult<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, bytes })
    }
}

/// Outcome of processing a batch of uploads
#[derive(Debug, Default)]
pub struct UploadBatch {
    /// Recompressed images, in the order the files were given
    pub images: Vec<CardImage>,
    /// One error per file that could not be processed
    pub failures: Vec<CardError>,
    /// Files not even attempted because the card had no room for them
    pub skipped: usize,
}

/// Scale `(width, height)` down so neither side exceeds `max_edge`,
/// keeping the aspect ratio. Images that already fit are left alone.
pub fn fit_within(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    let scale = |side: u32, long: u32| {
        let scaled = u64::from(side) * u64::from(max_edge) / u64::from(long);
        u32::try_from(scaled).unwrap_or(max_edge).max(1)
    };

    if width > height {
        if width > max_edge {
            return (max_edge, scale(height, width));
        }
    } else if height > max_edge {
        return (scale(width, height), max_edge);
    }
    (width, height)
}

/// Decode, downscale and re-encode one image as an inline JPEG.
///
/// # Errors
///
/// Returns `CardError::ImageProcessing` if the bytes are not a supported
/// image or the JPEG encoder fails.
pub fn recompress(file: &UploadFile) -> CardResult<CardImage> {
    let failed = |reason: String| CardError::ImageProcessing {
        file: file.name.clone(),
        reason,
    };

    let img = image::load_from_memory(&file.bytes).map_err(|e| failed(e.to_string()))?;
    let (width, height) = img.dimensions();
    let (target_w, target_h) = fit_within(width, height, MAX_EDGE);

    let img = if (target_w, target_h) == (width, height) {
        img
    } else {
        img.resize_exact(target_w, target_h, FilterType::Triangle)
    };

    // JPEG has no alpha channel
    let rgb = img.to_rgb8();
    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(Cursor::new(&mut buffer), JPEG_QUALITY)
        .encode_image(&rgb)
        .map_err(|e| failed(format!("Failed to encode: {}", e)))?;

    tracing::debug!(
        file = %file.name,
        from = ?(width, height),
        to = ?(target_w, target_h),
        in_bytes = file.bytes.len(),
        out_bytes = buffer.len(),
        "recompressed image"
    );

    CardImage::from_bytes("image/jpeg", &buffer)
}

/// Recompress up to `free_slots` files in parallel.
///
/// Waits for every file before returning. Successes keep the order of
/// `files`; files past `free_slots` are counted in `skipped` and never
/// decoded.
pub async fn process_uploads(files: Vec<UploadFile>, free_slots: usize) -> UploadBatch {
    let skipped = files.len().saturating_sub(free_slots);

    let tasks = files.into_iter().take(free_slots).map(|file| async move {
        let name = file.name.clone();
        match tokio::task::spawn_blocking(move || recompress(&file)).await {
            Ok(result) => result,
            Err(e) => Err(CardError::ImageProcessing {
                file: name,
                reason: format!("worker failed: {}", e),
            }),
        }
    });

    let mut batch = UploadBatch {
        skipped,
        ..UploadBatch::default()
    };
    for result in join_all(tasks).await {
        match result {
            Ok(image) => batch.images.push(image),
            Err(e) => {
                tracing::warn!("{}", e);
                batch.failures.push(e);
            }
        }
    }

    if skipped > 0 {
        tracing::info!(skipped, "dropped uploads beyond the image limit");
    }
    batch
}
