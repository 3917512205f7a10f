//! Share links for Cardsmith
//!
//! A share link carries the whole card in a single `card` query parameter,
//! so opening it needs nothing but the link itself:
//!
//! ```text
//! CardConfig ──serde_json──▶ {"message":..,"backgroundImages":[..]}
//!            ──base64──────▶ eyJtZXNzYWdlIjoi...
//!            ──percent─────▶ eyJtZXNzYWdlIjoi...%3D%3D
//!            ──────────────▶ https://cardsmith.app/?card=eyJtZXNzYWdlIjoi...%3D%3D
//! ```
//!
//! Decoding reverses the first three steps. Transport errors (bad escapes,
//! bad base64, truncated padding, non-JSON) are a [`CardError::Decode`];
//! once a JSON object is in hand, field reading never fails and falls back
//! to defaults field by field (see [`CardConfig::from_fields`]).
//!
//! # Example
//!
//! ```
//! use cardsmith_core::{link, CardConfig};
//!
//! let card = CardConfig::default();
//! let url = link::share_url(&card, "https://cardsmith.app/?ref=mail#top").unwrap();
//! assert!(url.starts_with("https://cardsmith.app/?card="));
//! assert!(url.ends_with("#top"));
//!
//! let token = link::card_param(&url).unwrap();
//! assert_eq!(link::decode(token).unwrap(), card);
//! ```

use base64::Engine;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;

use crate::error::{CardError, CardResult};
use crate::types::CardConfig;

/// Name of the query parameter carrying the card
pub const CARD_PARAM: &str = "card";

/// Characters left alone by a URI-component escape: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Links that went through a second form-encoding pass arrive escaped twice
const MAX_UNESCAPE_PASSES: usize = 3;

/// Encode a card as a URL-safe token.
///
/// # Errors
///
/// Returns `CardError::Encoding` if the card cannot be serialized.
pub fn encode(config: &CardConfig) -> CardResult<String> {
    let json = serde_json::to_string(config)
        .map_err(|e| CardError::Encoding(format!("Failed to serialize card: {}", e)))?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(json.as_bytes());
    let token = utf8_percent_encode(&encoded, URI_COMPONENT).to_string();

    tracing::debug!(
        json_bytes = json.len(),
        token_bytes = token.len(),
        images = config.background_images.len(),
        "encoded card"
    );
    Ok(token)
}

/// Decode a token produced by [`encode`].
///
/// # Errors
///
/// Returns `CardError::Decode` if:
/// - a percent escape is malformed or does not yield UTF-8
/// - the base64 contains invalid characters or truncated padding
/// - the decoded bytes are not UTF-8 JSON
/// - the JSON is well-formed but not an object
pub fn decode(token: &str) -> CardResult<CardConfig> {
    let unescaped = unescape(token)?;

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(unescaped.as_bytes())
        .map_err(|e| CardError::Decode(format!("Invalid base64: {}", e)))?;

    let text = String::from_utf8(bytes)
        .map_err(|e| CardError::Decode(format!("Card data is not UTF-8: {}", e)))?;

    let value: Value = serde_json::from_str(&text)
        .map_err(|e| CardError::Decode(format!("Invalid card data: {}", e)))?;

    match value {
        Value::Object(fields) => Ok(CardConfig::from_fields(&fields)),
        other => Err(CardError::Decode(format!(
            "Card data is a JSON {}, not an object",
            json_kind(&other)
        ))),
    }
}

/// Decode an optional token, falling back to the default card.
///
/// "No token" and "bad token" are treated the same; the failure is only
/// logged.
pub fn decode_or_default(token: Option<&str>) -> CardConfig {
    match token {
        Some(token) => decode(token).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable card link: {}", e);
            CardConfig::default()
        }),
        None => CardConfig::default(),
    }
}

/// Build the share URL for `config` relative to `location`.
///
/// Keeps the scheme, host and path of `location`, drops every existing
/// query parameter, keeps the fragment and adds exactly one `card`
/// parameter.
///
/// # Errors
///
/// Returns `CardError::Encoding` if the card cannot be serialized.
pub fn share_url(config: &CardConfig, location: &str) -> CardResult<String> {
    let token = encode(config)?;
    let (base, fragment) = split_location(location);
    Ok(format!(
        "{}{}?{}={}{}",
        base,
        root_path(base),
        CARD_PARAM,
        token,
        fragment
    ))
}

/// The raw (still escaped) value of the `card` parameter in `url`, if any
pub fn card_param(url: &str) -> Option<&str> {
    let query = query_of(url)?;
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (key == CARD_PARAM).then_some(value)
    })
}

/// `location` with its query string removed (fragment kept)
pub fn without_query(location: &str) -> String {
    let (base, fragment) = split_location(location);
    format!("{}{}{}", base, root_path(base), fragment)
}

/// Accept either a full share link or a bare token.
///
/// Anything containing a `?` or `://` is treated as a URL and must carry a
/// `card` parameter; anything else is assumed to be the token itself.
pub fn token_from_input(input: &str) -> Option<&str> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if input.contains('?') || input.contains("://") {
        card_param(input)
    } else {
        Some(input)
    }
}

fn unescape(token: &str) -> CardResult<String> {
    let mut current = token.trim().to_string();
    for _ in 0..MAX_UNESCAPE_PASSES {
        if !current.contains('%') {
            break;
        }
        current = percent_decode_str(&current)
            .decode_utf8()
            .map_err(|e| CardError::Decode(format!("Invalid percent escape: {}", e)))?
            .into_owned();
    }
    Ok(current)
}

/// Split into (everything before `?`/`#`, `#fragment` or "")
fn split_location(location: &str) -> (&str, &str) {
    let (head, fragment) = match location.find('#') {
        Some(i) => location.split_at(i),
        None => (location, ""),
    };
    let base = head.split_once('?').map_or(head, |(base, _)| base);
    (base, fragment)
}

/// "/" when `base` is a bare origin such as `https://cardsmith.app`
fn root_path(base: &str) -> &'static str {
    match base.split_once("://") {
        Some((_, rest)) if !rest.is_empty() && !rest.contains('/') => "/",
        _ => "",
    }
}

fn query_of(url: &str) -> Option<&str> {
    let head = url.split_once('#').map_or(url, |(head, _)| head);
    head.split_once('?').map(|(_, query)| query)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
