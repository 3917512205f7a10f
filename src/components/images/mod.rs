//! Background image components
//!
//! Pick, recompress, preview and remove the card's background images.

pub mod image_upload;

pub use image_upload::ImageUpload;
