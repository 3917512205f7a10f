//! Look and feel of the desktop app.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
