//! Cardsmith CLI
//!
//! Thin wrapper around cardsmith-core for building and inspecting share
//! links from a terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Print the default card as JSON
//! cardsmith defaults
//!
//! # Build a share link
//! cardsmith encode --recipient Sam --card-type thank-you --image beach.jpg
//!
//! # Start from a saved card and override one field
//! cardsmith encode --config card.json --message "See you soon"
//!
//! # Show what a link contains
//! cardsmith decode "https://cardsmith.app/?card=eyJtZXNzYWdl..."
//!
//! # Show only the heading a link renders with
//! cardsmith title "https://cardsmith.app/?card=eyJtZXNzYWdl..."
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use cardsmith_core::{
    link, process_uploads, render, CardConfig, CardStore, CardType, ColorSlot, Design, Font,
    HexColor, Session, UploadFile,
};

const DEFAULT_BASE_URL: &str = "https://cardsmith.app/";

/// Cardsmith - shareable greeting cards
#[derive(Parser)]
#[command(name = "cardsmith")]
#[command(version = "0.1.0")]
#[command(about = "Cardsmith - build and inspect greeting card share links")]
#[command(
    long_about = "Every Cardsmith card lives entirely inside its share link. These commands build such links and show what is inside them."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the default card as JSON
    Defaults,

    /// Build a share link
    Encode(EncodeArgs),

    /// Show the mode and card a link opens with
    Decode {
        /// Share link or bare token
        link: String,
    },

    /// Show the heading and centerpiece a link renders with
    Title {
        /// Share link or bare token
        link: String,
    },
}

#[derive(Args)]
struct EncodeArgs {
    /// Start from a card saved as JSON (missing fields take defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Card message
    #[arg(short, long)]
    message: Option<String>,

    /// Closing line above the sender's name
    #[arg(long)]
    signature: Option<String>,

    /// Sender's name
    #[arg(short, long)]
    name: Option<String>,

    /// Who the card is for
    #[arg(short, long)]
    recipient: Option<String>,

    /// Font: a family name such as "Great Vibes", or the CSS value
    #[arg(long, value_parser = parse_font)]
    font: Option<Font>,

    /// Page design: dashed-border, floral-corners or none
    #[arg(long, value_parser = parse_design)]
    design: Option<Design>,

    /// Occasion: birthday, congrats, grad, thank-you or custom
    #[arg(short = 't', long, value_parser = parse_card_type)]
    card_type: Option<CardType>,

    /// Heading for custom cards
    #[arg(long)]
    custom_title: Option<String>,

    /// Border and accent color (#rrggbb)
    #[arg(long, value_parser = parse_color)]
    border_color: Option<HexColor>,

    /// Heading color (#rrggbb)
    #[arg(long, value_parser = parse_color)]
    heading_color: Option<HexColor>,

    /// Message color (#rrggbb)
    #[arg(long, value_parser = parse_color)]
    message_color: Option<HexColor>,

    /// Signature color (#rrggbb)
    #[arg(long, value_parser = parse_color)]
    signature_color: Option<HexColor>,

    /// Name color (#rrggbb)
    #[arg(long, value_parser = parse_color)]
    name_color: Option<HexColor>,

    /// Background image; repeat for a collage (up to 5)
    #[arg(short, long = "image")]
    images: Vec<PathBuf>,

    /// Address the share link is built on
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Defaults => {
            println!("{}", card_json(&CardConfig::default())?);
        }
        Commands::Encode(args) => {
            let url = encode(args).await?;
            println!("{}", url);
        }
        Commands::Decode { link } => {
            let session = open(&link);
            println!("Mode: {}", mode_name(&session));
            println!("{}", card_json(session.config())?);
        }
        Commands::Title { link } => {
            let session = open(&link);
            let config = session.config();
            println!("{}", render::title(config));
            println!("Centerpiece: {:?}", render::centerpiece(config.card_type));
        }
    }

    Ok(())
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Build the card from defaults, then the config file, then flags, and
/// return its share link
async fn encode(args: EncodeArgs) -> Result<String> {
    let base = match &args.config {
        Some(path) => load_config(path)?,
        None => CardConfig::default(),
    };
    let mut store = CardStore::from_config(base);

    if let Some(message) = args.message {
        store.set_message(message);
    }
    if let Some(signature) = &args.signature {
        store.set_signature(signature);
    }
    if let Some(name) = &args.name {
        store.set_name(name);
    }
    if let Some(recipient) = &args.recipient {
        store.set_recipient(recipient);
    }
    if let Some(font) = args.font {
        store.set_font(font);
    }
    if let Some(design) = args.design {
        store.set_design(design);
    }
    if let Some(card_type) = args.card_type {
        store.set_card_type(card_type);
    }
    if let Some(title) = &args.custom_title {
        store.set_custom_title(title);
    }

    let colors = [
        (ColorSlot::Border, args.border_color),
        (ColorSlot::Heading, args.heading_color),
        (ColorSlot::Message, args.message_color),
        (ColorSlot::Signature, args.signature_color),
        (ColorSlot::Name, args.name_color),
    ];
    for (slot, color) in colors {
        if let Some(color) = color {
            store.set_color(slot, color);
        }
    }

    if !args.images.is_empty() {
        add_images(&mut store, &args.images).await?;
    }

    let url = link::share_url(store.config(), &args.base_url)?;
    tracing::info!(length = url.len(), "Built share link");
    Ok(url)
}

/// Recompress and append images.
///
/// A missing file fails the command. A file that is not a usable image is
/// reported and skipped, and the rest are still added.
async fn add_images(store: &mut CardStore, paths: &[PathBuf]) -> Result<()> {
    let free_slots = store.free_image_slots();
    if paths.len() > free_slots {
        eprintln!(
            "Warning: only {} of {} images fit on the card; the rest are ignored",
            free_slots,
            paths.len()
        );
    }

    let files = paths
        .iter()
        .take(free_slots)
        .map(|path| UploadFile::read(path).with_context(|| format!("Failed to read {}", path.display())))
        .collect::<Result<Vec<_>>>()?;

    let batch = process_uploads(files, free_slots).await;
    for failure in &batch.failures {
        eprintln!("Warning: {}; skipping it", failure);
    }

    let accepted = store.append_images(batch.images);
    tracing::info!(accepted, failed = batch.failures.len(), "Added images");
    Ok(())
}

fn load_config(path: &Path) -> Result<CardConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    match value.as_object() {
        Some(fields) => Ok(CardConfig::from_fields(fields)),
        None => bail!("{} must contain a JSON object", path.display()),
    }
}

/// Open a link or bare token the way the desktop app would
fn open(input: &str) -> Session {
    match link::token_from_input(input) {
        Some(token) if input.contains('?') => {
            tracing::debug!(token_len = token.len(), "Opening share link");
            Session::load(input.trim())
        }
        Some(token) => Session::load(format!(
            "{}?{}={}",
            DEFAULT_BASE_URL,
            link::CARD_PARAM,
            token
        )),
        None => Session::load(DEFAULT_BASE_URL),
    }
}

fn mode_name(session: &Session) -> &'static str {
    if session.is_view_mode() {
        "view"
    } else {
        "edit"
    }
}

fn card_json(config: &CardConfig) -> Result<String> {
    let value = config.to_json()?;
    Ok(serde_json::to_string_pretty(&value)?)
}

fn parse_font(s: &str) -> Result<Font, String> {
    let wanted = simplify(s);
    Font::ALL
        .into_iter()
        .find(|font| {
            font.as_str() == s
                || simplify(font.label()) == wanted
                || font
                    .as_str()
                    .split('\'')
                    .nth(1)
                    .is_some_and(|family| simplify(family) == wanted)
        })
        .ok_or_else(|| {
            let names: Vec<_> = Font::ALL.iter().map(|f| f.label()).collect();
            format!("unknown font '{}' (expected one of: {})", s, names.join(", "))
        })
}

fn parse_design(s: &str) -> Result<Design, String> {
    Design::from_wire(s).ok_or_else(|| {
        format!("unknown design '{}' (expected dashed-border, floral-corners or none)", s)
    })
}

fn parse_card_type(s: &str) -> Result<CardType, String> {
    CardType::from_wire(s).ok_or_else(|| {
        let names: Vec<_> = CardType::ALL.iter().map(|t| t.as_str()).collect();
        format!("unknown card type '{}' (expected one of: {})", s, names.join(", "))
    })
}

fn parse_color(s: &str) -> Result<HexColor, String> {
    s.parse::<HexColor>().map_err(|e| e.to_string())
}

/// Lowercase with everything but letters and digits removed
fn simplify(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_font_accepts_names_and_css() {
        assert_eq!(parse_font("great vibes").unwrap(), Font::GreatVibes);
        assert_eq!(parse_font("Great-Vibes").unwrap(), Font::GreatVibes);
        assert_eq!(parse_font("Great Vibes (Fancy)").unwrap(), Font::GreatVibes);
        assert_eq!(parse_font("'Roboto', sans-serif").unwrap(), Font::Roboto);
        assert_eq!(parse_font("playfairdisplay").unwrap(), Font::PlayfairDisplay);
        assert!(parse_font("Comic Sans").is_err());
    }

    #[test]
    fn test_parse_design_and_card_type() {
        assert_eq!(parse_design("none").unwrap(), Design::Plain);
        assert!(parse_design("plain").is_err());
        assert_eq!(parse_card_type("thank-you").unwrap(), CardType::ThankYou);
        assert!(parse_card_type("anniversary").is_err());
    }

    #[test]
    fn test_open_bare_token_and_garbage() {
        let token = link::encode(&CardConfig::default()).unwrap();
        assert!(open(&token).is_view_mode());
        assert!(!open("%%%not-a-card").is_view_mode());
        assert!(!open("https://cardsmith.app/?ref=mail").is_view_mode());
    }
}
