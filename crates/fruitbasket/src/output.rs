//! Colored terminal output for command results.
//!
//! `anstream` strips the escape codes when stdout is not a terminal.

pub use anstream::println as aprintln;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const GREEN: &str = "\x1b[38;2;158;206;106m"; // #9ece6a
    pub const RED: &str = "\x1b[38;2;247;118;142m"; // #f7768e
}

/// Wraps `text` in the success color.
pub fn success(text: &str) -> String {
    format!("{}{}{}", colors::GREEN, text, colors::RESET)
}

/// Wraps `text` in the error color.
pub fn error(text: &str) -> String {
    format!("{}{}{}", colors::RED, text, colors::RESET)
}
