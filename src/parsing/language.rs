//! Language classification and text-normalization helpers shared by both
//! segmenters.

/// Characters that mark a line as Spanish when no explicit marker is active.
pub const SPANISH_HINT_CHARS: [char; 7] = ['¿', 'á', 'é', 'í', 'ó', 'ú', 'ñ'];

/// Maximum number of derived tags kept on a record.
pub const MAX_TAGS: usize = 3;

/// Character cap for the X/Twitter post slot.
pub const TWITTER_POST_MAX_CHARS: usize = 180;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Spanish,
    English,
}

/// Fallback classifier for body lines with no active language marker.
/// A line containing any Spanish-specific character routes to Spanish,
/// everything else to English.
pub fn classify_by_diacritics(line: &str) -> Language {
    if line.chars().any(|c| SPANISH_HINT_CHARS.contains(&c)) {
        Language::Spanish
    } else {
        Language::English
    }
}

/// Recognizes a legacy inline language marker (`Español:` / `Inglés:` /
/// `Ingles:`, case-insensitive). Returns the language and any content that
/// followed the colon on the same line.
pub fn language_marker(line: &str) -> Option<(Language, String)> {
    let lower = line.to_lowercase();
    for (prefix, language) in [
        ("español:", Language::Spanish),
        ("inglés:", Language::English),
        ("ingles:", Language::English),
    ] {
        if lower.starts_with(prefix) {
            let inline: String = line.chars().skip(prefix.chars().count()).collect();
            return Some((language, inline.trim().to_string()));
        }
    }
    None
}

/// Splits comma-separated tag text, trims each entry, drops empties,
/// deduplicates preserving first-seen order and keeps at most `max_tags`.
/// Text without a comma yields a single tag.
pub fn derive_top_tags(comma_text: &str, max_tags: usize) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for raw in comma_text.split(',') {
        let tag = raw.trim();
        if tag.is_empty() || tags.iter().any(|t| t == tag) {
            continue;
        }
        tags.push(tag.to_string());
        if tags.len() == max_tags {
            break;
        }
    }
    tags
}

/// Caps `text` at `max_chars` characters, cutting at the last space inside
/// the cap so words are not split. No ellipsis is appended. A prefix with no
/// space at all is returned as the raw cap-length cut.
pub fn truncate_at_whitespace(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let prefix: String = text.chars().take(max_chars).collect();
    match prefix.rfind(' ') {
        Some(cut) => prefix[..cut].to_string(),
        None => prefix,
    }
}
