//! Property-based tests for the card store and link codec
//!
//! Uses proptest to verify the round-trip law, the default-fallback law and
//! the image count invariant.

use proptest::prelude::*;
use serde_json::{Map, Value};

use cardsmith_core::{
    link, CardConfig, CardImage, CardStore, CardType, Design, Font, HexColor, FIELD_KEYS,
    MAX_IMAGES,
};

// ============================================================================
// Strategy Generators
// ============================================================================

fn text_strategy(max_chars: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..=max_chars).prop_map(|chars| chars.into_iter().collect())
}

fn color_strategy() -> impl Strategy<Value = HexColor> {
    any::<[u8; 3]>().prop_map(|[r, g, b]| HexColor::rgb(r, g, b))
}

fn image_strategy() -> impl Strategy<Value = CardImage> {
    (
        prop::sample::select(vec!["image/jpeg", "image/png", "image/webp"]),
        prop::collection::vec(any::<u8>(), 1..64),
    )
        .prop_map(|(media_type, bytes)| CardImage::from_bytes(media_type, &bytes).unwrap())
}

prop_compose! {
    fn card_strategy()(
        message in text_strategy(200),
        signature in text_strategy(30),
        name in text_strategy(30),
        recipient in text_strategy(30),
        font in prop::sample::select(Font::ALL.to_vec()),
        design in prop::sample::select(Design::ALL.to_vec()),
        card_type in prop::sample::select(CardType::ALL.to_vec()),
        custom_title in text_strategy(40),
        colors in prop::array::uniform5(color_strategy()),
        background_images in prop::collection::vec(image_strategy(), 0..=MAX_IMAGES),
    ) -> CardConfig {
        CardConfig {
            message,
            signature,
            name,
            recipient,
            font,
            design,
            card_type,
            custom_title,
            border_color: colors[0],
            heading_color: colors[1],
            message_color: colors[2],
            signature_color: colors[3],
            name_color: colors[4],
            background_images,
        }
    }
}

/// Store operations a user can perform in the editor
#[derive(Debug, Clone)]
enum StoreOp {
    Upload(usize),
    Remove(usize),
    Reset,
}

fn store_ops_strategy() -> impl Strategy<Value = Vec<StoreOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => (0..8usize).prop_map(StoreOp::Upload),
            2 => (0..8usize).prop_map(StoreOp::Remove),
            1 => Just(StoreOp::Reset),
        ],
        0..40,
    )
}

fn tiny_image(n: usize) -> CardImage {
    CardImage::from_data_uri(format!("data:image/jpeg;base64,IMG{n}A")).unwrap()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// decode(encode(c)) == c for every reachable card
    #[test]
    fn link_roundtrip(card in card_strategy()) {
        let token = link::encode(&card).unwrap();
        let decoded = link::decode(&token).unwrap();
        prop_assert_eq!(decoded, card);
    }

    /// The share URL carries the card through unchanged
    #[test]
    fn share_url_roundtrip(card in card_strategy()) {
        let url = link::share_url(&card, "https://cardsmith.app/?utm=x").unwrap();
        let token = link::card_param(&url).unwrap();
        prop_assert_eq!(link::decode(token).unwrap(), card);
    }

    /// Removing keys from an encoded card defaults exactly those fields
    #[test]
    fn missing_fields_take_defaults(
        card in card_strategy(),
        dropped in prop::collection::btree_set(0..FIELD_KEYS.len(), 0..FIELD_KEYS.len()),
    ) {
        let card_json = card.to_json().unwrap();
        let default_json = CardConfig::default().to_json().unwrap();

        let mut fields = card_json.as_object().cloned().unwrap();
        for &i in &dropped {
            fields.remove(FIELD_KEYS[i]);
        }

        let decoded = CardConfig::from_fields(&fields).to_json().unwrap();
        for (i, key) in FIELD_KEYS.iter().enumerate() {
            let expected = if dropped.contains(&i) { &default_json[key] } else { &card_json[key] };
            prop_assert_eq!(&decoded[key], expected, "field {}", key);
        }
    }

    /// Arbitrary strings never make decode panic, and failures mean defaults
    #[test]
    fn garbage_tokens_never_panic(token in ".{0,200}") {
        let card = link::decode_or_default(Some(&token));
        if link::decode(&token).is_err() {
            prop_assert_eq!(card, CardConfig::default());
        }
    }

    /// Any JSON object decodes to a card within the field limits
    #[test]
    fn arbitrary_objects_yield_valid_cards(
        entries in prop::collection::vec((".{0,12}", ".{0,50}"), 0..20),
    ) {
        let fields: Map<String, Value> = entries
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect();
        let card = CardConfig::from_fields(&fields);
        prop_assert!(card.signature.chars().count() <= 30);
        prop_assert!(card.name.chars().count() <= 30);
        prop_assert!(card.recipient.chars().count() <= 30);
        prop_assert!(card.custom_title.chars().count() <= 40);
        prop_assert!(card.background_images.len() <= MAX_IMAGES);
    }

    /// The image list stays within [0, 5] under any sequence of edits
    #[test]
    fn image_count_invariant(ops in store_ops_strategy()) {
        let mut store = CardStore::new();
        let mut counter = 0usize;

        for op in ops {
            match op {
                StoreOp::Upload(n) => {
                    let before: Vec<CardImage> = store.images().to_vec();
                    let batch: Vec<CardImage> = (0..n).map(|i| tiny_image(counter + i)).collect();
                    counter += n;
                    let accepted = store.append_images(batch);
                    prop_assert_eq!(accepted, n.min(MAX_IMAGES - before.len()));
                    prop_assert_eq!(&store.images()[..before.len()], &before[..]);
                }
                StoreOp::Remove(i) => {
                    store.remove_image(i);
                }
                StoreOp::Reset => store.reset(),
            }
            prop_assert!(store.images().len() <= MAX_IMAGES);
        }
    }

    /// Reset always returns every field to its default
    #[test]
    fn reset_restores_defaults(card in card_strategy()) {
        let mut store = CardStore::from_config(card);
        store.reset();
        prop_assert_eq!(store.config(), &CardConfig::default());
    }
}
