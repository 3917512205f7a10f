//! Reusable form components for the card editor
//!
//! All components share the `form-field` / `input-label` / `input-field`
//! class vocabulary so one stylesheet covers them.

mod accordion;
mod button;
mod color_field;
mod input;
mod select;

pub use accordion::*;
pub use button::*;
pub use color_field::*;
pub use input::*;
pub use select::*;
