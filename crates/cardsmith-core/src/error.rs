//! Error types for Cardsmith

use thiserror::Error;

/// Main error type for Cardsmith operations
#[derive(Error, Debug)]
pub enum CardError {
    /// The card could not be turned into a share token
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A share token was absent, truncated or not valid card data
    #[error("Decode failure: {0}")]
    Decode(String),

    /// An uploaded file could not be read, decoded or recompressed
    #[error("Could not process image '{file}': {reason}")]
    ImageProcessing {
        /// Display name of the offending file
        file: String,
        /// What went wrong
        reason: String,
    },

    /// An inline image string is not a `data:image/...;base64,` URI
    #[error("Invalid inline image: {0}")]
    InvalidImage(String),

    /// The share link could not be placed on the clipboard
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;
