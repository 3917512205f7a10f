#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Address the app was opened at, set from the command line
static LOCATION: OnceLock<String> = OnceLock::new();

/// Default address used when no share link is opened
pub const DEFAULT_BASE_URL: &str = "https://cardsmith.app/";

/// Get the location the session starts from
pub fn get_location() -> String {
    LOCATION
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Cardsmith - shareable greeting cards
#[derive(Parser, Debug)]
#[command(name = "cardsmith-desktop")]
#[command(about = "Cardsmith - design a greeting card and share it as a link")]
struct Args {
    /// Share link to open (shows the card read-only)
    link: Option<String>,

    /// Address new share links are built on
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let location = match args.link {
        Some(link) if link.contains('?') || link.contains("://") => link,
        // a bare token pasted on the command line
        Some(token) => {
            let base = args
                .base_url
                .split(|c| c == '?' || c == '#')
                .next()
                .unwrap_or_default();
            format!("{}?{}={}", base, cardsmith_core::link::CARD_PARAM, token)
        }
        None => args.base_url,
    };

    tracing::info!("Starting at {}", location);
    let _ = LOCATION.set(location);

    // Window size: one card column plus the editor below it
    let window_width = 760.0;
    let window_height = 960.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Cardsmith")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
