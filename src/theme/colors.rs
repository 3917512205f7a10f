//! Fixed colors of the card decorations.
//!
//! User-chosen colors live in the card itself; these are the ones that do
//! not change with the card.

// === ROSE (Heart, primary actions) ===
pub const ROSE_400: &str = "#fb7185";
pub const ROSE_500: &str = "#f43f5e";

// === GRAD CAP ===
pub const CAP_GRAY: &str = "#4a4a4a";

// === FIREWORKS ===
pub const FIREWORKS: [&str; 5] = ["#ffc700", "#ff0000", "#2e3192", "#41bbc4", "#ff718d"];

// === CONFETTI ===
pub const CONFETTI: [&str; 5] = ["#a864fd", "#29cdff", "#78ff44", "#ff718d", "#fdff6a"];
