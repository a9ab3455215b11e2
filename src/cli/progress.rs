//! Terminal progress helpers: the loading spinner shown while the initial
//! user fetch is in flight.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Braille dots.
const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Create an animated spinner (on stderr) with the given message.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars(TICK_CHARS)
        .template("{spinner:.cyan} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Stop the spinner and erase it, leaving the terminal to the dashboard.
pub fn finish_clear(pb: &ProgressBar) {
    pb.finish_and_clear();
}

/// Finish a spinner with a red cross.
pub fn finish_error(pb: &ProgressBar, msg: &str) {
    if let Ok(style) = ProgressStyle::default_spinner().template("  {msg}") {
        pb.set_style(style);
    }
    pb.finish_with_message(format!("✗ {}", msg));
}
