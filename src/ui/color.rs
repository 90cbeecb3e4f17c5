//! Color and formatting helpers for the console report

use crate::core::constants::display;

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";

    pub const RED: &'static str = "\x1b[31m";
    pub const GREEN: &'static str = "\x1b[32m";
    pub const YELLOW: &'static str = "\x1b[33m";

    pub const BRIGHT_CYAN: &'static str = "\x1b[96m";
}

/// Apply color to text if terminal supports it
pub fn colorize(text: &str, color: &str) -> String {
    if supports_formatting() {
        format!("{}{}{}", color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Bold cyan section heading
pub fn heading(text: &str) -> String {
    if supports_formatting() {
        format!("{}{}{}{}", Colors::BOLD, Colors::BRIGHT_CYAN, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Horizontal rule used to frame the report
pub fn rule() -> String {
    "=".repeat(display::RULE_WIDTH)
}

/// Terminal capability detection
pub fn supports_formatting() -> bool {
    use std::env;
    use std::io::IsTerminal;

    // Check if colors are explicitly disabled
    if env::var("NO_COLOR").is_ok() || env::var("FORCE_COLOR").as_deref() == Ok("0") {
        return false;
    }

    // Force enable if explicitly requested
    if env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // Disable formatting when running tests
    if cfg!(test) || env::var("RUST_TEST_TIME_UNIT").is_ok() {
        return false;
    }

    // Check if output is being redirected
    if !std::io::stdout().is_terminal() {
        return false;
    }

    match env::var("TERM") {
        Ok(term) => !(term == "dumb" || term.is_empty()),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorize_plain_in_tests() {
        assert_eq!(colorize("Sales", Colors::RED), "Sales");
    }

    #[test]
    fn test_heading_plain_in_tests() {
        assert_eq!(heading("Performance Metrics"), "Performance Metrics");
    }

    #[test]
    fn test_rule_width() {
        assert_eq!(rule().len(), display::RULE_WIDTH);
        assert!(rule().chars().all(|c| c == '='));
    }
}
