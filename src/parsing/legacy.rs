//! Segmenter for the legacy layout: free-standing header phrases with
//! bilingual sub-blocks introduced by `Español:` / `Inglés:` markers.

use crate::parsing::language::{
    classify_by_diacritics, derive_top_tags, language_marker, truncate_at_whitespace, Language,
    MAX_TAGS, TWITTER_POST_MAX_CHARS,
};
use crate::parsing::section_table::{match_section_header, SectionKey};
use crate::types::record::ContentRecord;

/// Section currently being accumulated. The explicit language, once set by a
/// marker line, overrides the diacritic heuristic for every following line
/// until the next marker.
struct OpenSection {
    key: SectionKey,
    language: Option<Language>,
    es_lines: Vec<String>,
    en_lines: Vec<String>,
}

impl OpenSection {
    fn new(key: SectionKey) -> Self {
        Self {
            key,
            language: None,
            es_lines: Vec::new(),
            en_lines: Vec::new(),
        }
    }

    fn push_line(&mut self, line: &str) {
        let language = self
            .language
            .unwrap_or_else(|| classify_by_diacritics(line));
        match language {
            Language::Spanish => self.es_lines.push(line.to_string()),
            Language::English => self.en_lines.push(line.to_string()),
        }
    }

    /// The Spanish and English buffers flattened into one comma list,
    /// Spanish entries first.
    fn combined_comma_text(&self) -> String {
        format!("{}, {}", self.es_lines.join(", "), self.en_lines.join(", "))
    }
}

/// Walks the document once: the first non-empty line becomes the title, a
/// header-phrase match flushes the open section and starts the next one, and
/// everything in between accumulates into the per-language buffers. Lines
/// outside any recognized section fall through untouched.
pub fn parse_legacy_format(text: &str, mut record: ContentRecord) -> ContentRecord {
    let lines: Vec<&str> = text.trim().lines().collect();

    let mut body_start = lines.len();
    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            record.title = trimmed.to_string();
            body_start = i + 1;
            break;
        }
    }

    let mut open: Option<OpenSection> = None;
    for line in &lines[body_start..] {
        let trimmed = line.trim();
        let lower = trimmed.to_lowercase();

        if let Some(key) = match_section_header(&lower) {
            if let Some(section) = open.take() {
                flush_section(&mut record, section);
            }
            open = Some(OpenSection::new(key));
            continue;
        }

        let Some(section) = open.as_mut() else {
            continue;
        };
        if trimmed.is_empty() {
            continue;
        }

        if let Some((language, inline)) = language_marker(trimmed) {
            section.language = Some(language);
            if !inline.is_empty() {
                section.push_line(&inline);
            }
            continue;
        }

        section.push_line(trimmed);
    }

    if let Some(section) = open.take() {
        flush_section(&mut record, section);
    }
    record
}

fn flush_section(record: &mut ContentRecord, section: OpenSection) {
    match section.key {
        SectionKey::Tags => {
            record.tags = derive_top_tags(&section.combined_comma_text(), MAX_TAGS);
        }
        SectionKey::TagsList => {
            if !section.es_lines.is_empty() {
                record.tags_list_es = section.es_lines.join(", ").trim().to_string();
            }
            if !section.en_lines.is_empty() {
                record.tags_list_en = section.en_lines.join(", ").trim().to_string();
            }
            // The tags-list section also refreshes the derived tag array;
            // whichever tag section is flushed last wins.
            record.tags = derive_top_tags(&section.combined_comma_text(), MAX_TAGS);
        }
        SectionKey::TwitterPost => {
            if !section.es_lines.is_empty() {
                record.twitter_post_es =
                    truncate_at_whitespace(&section.es_lines.join("\n"), TWITTER_POST_MAX_CHARS);
            }
            if !section.en_lines.is_empty() {
                record.twitter_post_en =
                    truncate_at_whitespace(&section.en_lines.join("\n"), TWITTER_POST_MAX_CHARS);
            }
        }
        SectionKey::Teleprompter
        | SectionKey::VideoDescription
        | SectionKey::PinnedComment
        | SectionKey::TiktokDescription
        | SectionKey::FacebookDescription => {
            let (slot_es, slot_en) = match section.key {
                SectionKey::Teleprompter => {
                    (&mut record.teleprompter_es, &mut record.teleprompter_en)
                }
                SectionKey::VideoDescription => (
                    &mut record.video_description_es,
                    &mut record.video_description_en,
                ),
                SectionKey::PinnedComment => (
                    &mut record.pinned_comment_es,
                    &mut record.pinned_comment_en,
                ),
                SectionKey::TiktokDescription => (
                    &mut record.tiktok_description_es,
                    &mut record.tiktok_description_en,
                ),
                _ => (
                    &mut record.facebook_description_es,
                    &mut record.facebook_description_en,
                ),
            };
            if !section.es_lines.is_empty() {
                *slot_es = section.es_lines.join("\n");
            }
            if !section.en_lines.is_empty() {
                *slot_en = section.en_lines.join("\n");
            }
        }
    }
}
