//! Input layout detection.

use once_cell::sync::Lazy;
use regex::Regex;

/// A numbered section heading: `N. <title>`.
pub static NUMBERED_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s").expect("numbered heading pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Free-standing header phrases, first non-empty line is the title.
    Legacy,
    /// Sections introduced by `N. <title>` headings.
    Numbered,
}

/// Chooses the layout from the first content line. Empty input and anything
/// not starting with a numbered heading route to the legacy segmenter.
pub fn detect_input_format(text: &str) -> InputFormat {
    match text.trim().lines().next() {
        Some(first) if NUMBERED_HEADING.is_match(first) => InputFormat::Numbered,
        _ => InputFormat::Legacy,
    }
}
