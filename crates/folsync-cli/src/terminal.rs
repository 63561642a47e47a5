// Rust guideline compliant 2026-10-19

//! Terminal utilities for the Folsync CLI.

use std::env;
use std::io::Write;
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Renders text wrapped in ANSI color codes.
///
/// # Arguments
/// * `text` - The text to paint
/// * `color` - Foreground color
/// * `bold` - Whether to use bold text
///
/// # Returns
/// The painted text, or the text unchanged if writing to the buffer fails
pub fn paint(text: &str, color: Color, bold: bool) -> String {
    let mut buffer = Buffer::ansi();
    let painted = buffer
        .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold))
        .and_then(|()| write!(buffer, "{}", text))
        .and_then(|()| buffer.reset());
    match painted {
        Ok(()) => String::from_utf8_lossy(buffer.as_slice()).into_owned(),
        Err(_) => text.to_string(),
    }
}

/// Prints a status message with a colored prefix to stderr.
///
/// # Arguments
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
pub fn print_status(prefix: &str, prefix_color: Color, message: &str) {
    let choice = if should_use_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{}: ", prefix);
    let _ = stderr.reset();
    let _ = writeln!(stderr, "{}", message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    print_status("ℹ", Color::Cyan, message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    print_status("⚠", Color::Yellow, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_wraps_text_in_escape_codes() {
        let painted = paint("MATCH", Color::Green, true);
        assert!(painted.contains("MATCH"));
        assert!(painted.starts_with('\u{1b}'));
        assert!(painted.ends_with("\u{1b}[0m"));
    }

    #[test]
    fn test_should_use_color_respects_no_color() {
        // Actual result depends on the environment.
        let _ = should_use_color();
    }
}
