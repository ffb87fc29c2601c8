//! ## Features
//!
//! - Standard logging levels (info, warn, error, debug, success)
//! - Multi-line message support with consistent formatting
//! - Banner displays for section headings
//! - All output to stderr, so stdout stays clean for rendered records
//!
//! ## Usage
//!
//! Standard logging functions: `info()`, `warn()`, `error()`, `debug()`,
//! `success()`, plus `as_banner()` for framed announcements.

use colored::*;

/// Core output function, one line at a time
pub fn log(message: &str) {
  for line in message.lines() {
    eprintln!("{line}");
  }
}

/// Format a colored, width-aligned prefix for log messages
fn format_prefix(color: Color, tag: &str) -> String {
  format!("[{}]{:<pad$}", tag.color(color).bold(), "", pad = 6usize.saturating_sub(tag.len()))
}

fn prefixed(color: Color, tag: &str, message: &str) {
  let prefix = format_prefix(color, tag);
  for line in message.lines() {
    log(&format!("{prefix} {line}"));
  }
}

/// Info level logging - general progress information
pub fn info(message: &str) {
  prefixed(Color::Blue, "info", message);
}

/// Warning level logging - something needs attention
pub fn warn(message: &str) {
  prefixed(Color::Yellow, "warn", message);
}

/// Error level logging - something went wrong
pub fn error(message: &str) {
  prefixed(Color::Red, "error", message);
}

/// Debug level logging - detailed diagnostic information
pub fn debug(message: &str) {
  prefixed(Color::Magenta, "debug", message);
}

/// Success level logging - something completed successfully
pub fn success(message: &str) {
  prefixed(Color::Green, "sccs", message);
}

/// Create a banner line of the specified length and character
pub fn banner_line(length: usize, char: char) -> String {
  char.to_string().repeat(length)
}

/// Display a message with a banner around it
pub fn as_banner<F>(log_fn: F, message: &str, width: Option<usize>, border_char: Option<char>)
where
  F: Fn(&str),
{
  let width = width.unwrap_or(50);
  let border_char = border_char.unwrap_or('=');

  let banner = banner_line(width, border_char);

  log_fn(&banner);
  log_fn(message);
  log_fn(&banner);
}
