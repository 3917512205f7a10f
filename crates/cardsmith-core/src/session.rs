//! One card-making session.
//!
//! A session starts from a location (the address the app was opened at).
//! If that location carries a readable `card` parameter the card is shown
//! read-only; otherwise the editor opens on the default card. Nothing
//! outlives the session except links the user copies.

use crate::error::CardResult;
use crate::link;
use crate::store::CardStore;
use crate::types::CardConfig;

/// Whether the card is being edited or just looked at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Customization panel visible
    #[default]
    Edit,
    /// Opened from a share link; only "create your own" is offered
    View,
}

/// Card store plus the mode and location it was opened with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    store: CardStore,
    mode: ViewMode,
    location: String,
}

impl Session {
    /// Start a session at `location`.
    ///
    /// A present and decodable `card` parameter yields view mode with that
    /// card; an absent or unreadable one yields edit mode with defaults.
    pub fn load(location: impl Into<String>) -> Self {
        let location = location.into();
        let decoded = link::card_param(&location).map(link::decode);

        let (config, mode) = match decoded {
            Some(Ok(config)) => {
                tracing::info!(
                    card_type = config.card_type.as_str(),
                    images = config.background_images.len(),
                    "Opened shared card"
                );
                (config, ViewMode::View)
            }
            Some(Err(e)) => {
                tracing::warn!("Failed to read card from link, opening editor: {}", e);
                (CardConfig::default(), ViewMode::Edit)
            }
            None => (CardConfig::default(), ViewMode::Edit),
        };

        Self {
            store: CardStore::from_config(config),
            mode,
            location,
        }
    }

    pub fn store(&self) -> &CardStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CardStore {
        &mut self.store
    }

    pub fn config(&self) -> &CardConfig {
        self.store.config()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn is_view_mode(&self) -> bool {
        self.mode == ViewMode::View
    }

    /// Current location; loses its query once the user starts their own card
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Leave a shared card: reset to defaults, open the editor and drop
    /// the `card` parameter from the location.
    pub fn create_your_own(&mut self) {
        self.store.reset();
        self.mode = ViewMode::Edit;
        self.location = link::without_query(&self.location);
        tracing::info!("Starting a new card");
    }

    /// Share URL for the card as it is right now
    pub fn share_url(&self) -> CardResult<String> {
        link::share_url(self.store.config(), &self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CardType;

    const HOME: &str = "https://cardsmith.app/";

    #[test]
    fn test_load_without_param_opens_editor() {
        let session = Session::load(HOME);
        assert_eq!(session.mode(), ViewMode::Edit);
        assert_eq!(session.config(), &CardConfig::default());
    }

    #[test]
    fn test_load_with_bad_param_opens_editor() {
        let session = Session::load("https://cardsmith.app/?card=%%%garbage");
        assert_eq!(session.mode(), ViewMode::Edit);
        assert_eq!(session.config(), &CardConfig::default());

        let session = Session::load("https://cardsmith.app/?card=");
        assert_eq!(session.mode(), ViewMode::Edit);
    }

    #[test]
    fn test_share_then_load_opens_viewer() {
        let mut editor = Session::load(HOME);
        editor.store_mut().set_recipient("Dad");
        editor.store_mut().set_card_type(CardType::Congrats);

        let url = editor.share_url().unwrap();
        let viewer = Session::load(url);

        assert!(viewer.is_view_mode());
        assert_eq!(viewer.config(), editor.config());
    }

    #[test]
    fn test_create_your_own_resets_and_cleans_location() {
        let mut editor = Session::load(HOME);
        editor.store_mut().set_message("Hi");
        let url = editor.share_url().unwrap();

        let mut viewer = Session::load(url);
        assert!(viewer.is_view_mode());

        viewer.create_your_own();
        assert_eq!(viewer.mode(), ViewMode::Edit);
        assert_eq!(viewer.config(), &CardConfig::default());
        assert_eq!(viewer.location(), HOME);
    }
}
