//! Segmenter for the numbered layout: sections introduced by `N. <title>`
//! headings whose title text carries the topic and the language tag.
//!
//! Each numbered section is monolingual: the first content line picks the
//! buffer (via the heading's language tag, or the diacritic heuristic) and
//! every later line follows it. Bilingual material uses two numbered
//! sections, e.g. `3. Descripción para YouTube (Español)` and
//! `4. Descripción para YouTube (Inglés)`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parsing::format::NUMBERED_HEADING;
use crate::parsing::language::{
    classify_by_diacritics, derive_top_tags, truncate_at_whitespace, Language, MAX_TAGS,
    TWITTER_POST_MAX_CHARS,
};
use crate::types::record::ContentRecord;

static HEADING_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s+(.*)$").expect("numbered title pattern"));

struct NumberedSection {
    /// Free heading text after the number, not restricted to the topic table.
    title: String,
    es: String,
    en: String,
}

pub fn parse_numbered_format(text: &str, mut record: ContentRecord) -> ContentRecord {
    let mut open: Option<NumberedSection> = None;

    for raw_line in text.trim().lines() {
        let line = raw_line.trim();

        if NUMBERED_HEADING.is_match(line) {
            if let Some(section) = open.take() {
                store_section(&mut record, &section);
            }
            let title = HEADING_TITLE
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default();
            open = Some(NumberedSection {
                title,
                es: String::new(),
                en: String::new(),
            });
            continue;
        }

        let Some(section) = open.as_mut() else {
            continue;
        };

        if section.es.is_empty() && section.en.is_empty() {
            if line.is_empty() {
                continue;
            }
            let title_lower = section.title.to_lowercase();
            if title_lower.contains("(español)") || title_lower.contains("(spanish)") {
                section.es = line.to_string();
            } else if title_lower.contains("(inglés)") || title_lower.contains("(english)") {
                section.en = line.to_string();
            } else {
                match classify_by_diacritics(line) {
                    Language::Spanish => section.es = line.to_string(),
                    Language::English => section.en = line.to_string(),
                }
            }
        } else if !section.es.is_empty() {
            section.es.push('\n');
            section.es.push_str(line);
        } else {
            section.en.push('\n');
            section.en.push_str(line);
        }
    }

    if let Some(section) = open.take() {
        store_section(&mut record, &section);
    }

    if !record.tags_list_es.is_empty() {
        record.tags = derive_top_tags(&record.tags_list_es, MAX_TAGS);
    }
    record
}

/// Classifies a finished section by its heading text (case-insensitive
/// substring tests) and stores the accumulated content on the record.
/// Headings matching no topic are dropped silently.
fn store_section(record: &mut ContentRecord, section: &NumberedSection) {
    let title = section.title.to_lowercase();
    let is_es = title.contains("(español)") || title.contains("spanish");
    let is_en = title.contains("(inglés)") || title.contains("(english)");

    if title.contains("script de teleprompter") || title.contains("teleprompter script") {
        if is_en {
            record.teleprompter_en = section.en.trim().to_string();
        } else {
            record.teleprompter_es = section.es.trim().to_string();
        }
    } else if title.contains("título") || title.contains("title") {
        // The title is global, taken from the Spanish-labeled body line.
        // An Inglés:-labeled line is recognized but the English title is
        // not retained.
        for line in section.es.lines().chain(section.en.lines()) {
            if let Some(rest) = line.trim().strip_prefix("Español:") {
                record.title = rest.trim().to_string();
            }
        }
    } else if title.contains("descripción para youtube") || title.contains("youtube description") {
        if is_es {
            record.video_description_es = section.es.trim().to_string();
        } else if is_en {
            record.video_description_en = section.en.trim().to_string();
        }
    } else if title.contains("lista de tags")
        || title.contains("tags list")
        || title.contains("tags para youtube")
        || title.contains("youtube tags")
    {
        if is_es {
            record.tags_list_es = section.es.trim().to_string();
        } else if is_en {
            record.tags_list_en = section.en.trim().to_string();
        }
    } else if title.contains("comentario para pinear")
        || title.contains("comentario pineado")
        || title.contains("pinned comment")
    {
        if is_es {
            record.pinned_comment_es = section.es.trim().to_string();
        } else if is_en {
            record.pinned_comment_en = section.en.trim().to_string();
        }
    } else if title.contains("descripción para tiktok") || title.contains("tiktok description") {
        if is_es {
            record.tiktok_description_es = section.es.trim().to_string();
        } else if is_en {
            record.tiktok_description_en = section.en.trim().to_string();
        }
    } else if title.contains("descripción para x")
        || title.contains("x description")
        || title.contains("post para x")
        || title.contains("x post")
    {
        if is_es {
            record.twitter_post_es =
                truncate_at_whitespace(section.es.trim(), TWITTER_POST_MAX_CHARS);
        } else if is_en {
            record.twitter_post_en =
                truncate_at_whitespace(section.en.trim(), TWITTER_POST_MAX_CHARS);
        }
    } else if title.contains("descripción para facebook")
        || title.contains("facebook description")
        || title.contains("descripción para un post en facebook")
    {
        if is_es {
            record.facebook_description_es = section.es.trim().to_string();
        } else if is_en {
            record.facebook_description_en = section.en.trim().to_string();
        }
    }
}
