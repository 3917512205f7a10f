//! Cardsmith Core Library
//!
//! Greeting cards that live entirely inside their share link.
//!
//! ## Overview
//!
//! A card is a fixed set of fields ([`CardConfig`]): message, signature,
//! sender and recipient names, font, frame design, occasion, five colors and
//! up to five background images. The editor mutates it through a
//! [`CardStore`]; the [`link`] codec turns it into a `?card=` URL and back.
//! There is no server and nothing is stored: whoever has the link has the
//! card.
//!
//! ## Core Principles
//!
//! - **Lossless**: decoding an encoded card gives back the identical card
//! - **Forgiving**: a missing or damaged field takes its default, a damaged
//!   link opens the editor, nothing panics
//! - **Self-contained**: images are inline data URIs, never file references
//!
//! ## Quick Start
//!
//! ```
//! use cardsmith_core::{render, CardType, Session};
//!
//! let mut editor = Session::load("https://cardsmith.app/");
//! editor.store_mut().set_recipient("Sam");
//! editor.store_mut().set_card_type(CardType::ThankYou);
//!
//! let url = editor.share_url().unwrap();
//!
//! let viewer = Session::load(url);
//! assert!(viewer.is_view_mode());
//! assert_eq!(render::title(viewer.config()), "Thank You, Sam!");
//! ```

pub mod error;
pub mod images;
pub mod link;
pub mod render;
pub mod session;
pub mod store;
pub mod types;

// Re-exports
pub use error::{CardError, CardResult};
pub use images::{process_uploads, recompress, UploadBatch, UploadFile};
pub use render::{BackgroundLayout, CardView, Centerpiece, CornerOrnament};
pub use session::{Session, ViewMode};
pub use store::{CardStore, ColorSlot};
pub use types::*;
