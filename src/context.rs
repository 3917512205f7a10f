//! Session context for Cardsmith.
//!
//! Provides the card-making [`Session`] to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Signal::new(Session::load(get_location())));
//!
//! // In child components
//! let mut session = use_session();
//! session.write().store_mut().set_recipient("Sam");
//! ```

use cardsmith_core::Session;
use dioxus::prelude::*;

/// Get the location the app was opened at.
pub fn get_location() -> String {
    crate::get_location()
}

/// Hook to access the current session.
///
/// Every edit goes through this signal, so the card preview re-renders from
/// the updated config on the next frame.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}
