//! Cardsmith UI Components
//!
//! Form controls for the card editor, styled by the rose palette in the
//! desktop app's stylesheet.
//!
//! ## Design Philosophy
//!
//! The editor should feel like stationery, not a settings page:
//! - **Rose (#f43f5e)**: Primary actions and focus rings
//! - **Blush (#fff1f2)**: Section headers and hover states
//! - **Slate (#374151)**: Labels and body text
//!
//! Every control is stateless: the current value comes in as a prop and
//! changes go out through an `EventHandler`, so the card store stays the
//! single source of truth.

pub mod components;

pub use components::*;
