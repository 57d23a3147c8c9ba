// Entry point for the Hangman TUI application
// Initializes logging and configuration, then launches the main UI

use std::error::Error;

// Module declarations
mod xth_art;    // Gallows drawings per stage
mod xth_color;  // Cross-platform color matching utilities
mod xth_config; // User preferences and their persistence
mod xth_game;   // Core game logic
mod xth_log;    // File-backed logging
mod xth_text;   // UI string resources
mod xth_ui;     // Terminal UI rendering and event handling

use xth_config::load_or_create_config;
use xth_game::{DEFAULT_WORDS, WordList};
use xth_log::init_logging;
use xth_ui::run as run_ui;

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    log::info!("starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    // Load or create user configuration (display preferences, optional seed)
    let mut cfg = load_or_create_config();

    // Launch the main UI loop with the built-in word list
    let words = WordList::new(DEFAULT_WORDS)?;
    run_ui(&mut cfg, words)
}
