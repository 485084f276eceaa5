//! Static table of legacy section header phrases.
//!
//! Matching is a lower-cased prefix test against each phrase, first match in
//! declaration order wins. The order below is part of the observable
//! contract: `descripción para x` must be tried before the bare `tags`
//! catch-all, and `lista de tags` before `tags`.

/// Canonical section identifier for the legacy layout. Each key maps to one
/// bilingual slot pair on the record, except `Tags` which feeds the derived
/// tag array directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKey {
    VideoDescription,
    PinnedComment,
    TiktokDescription,
    TwitterPost,
    FacebookDescription,
    TagsList,
    Teleprompter,
    Tags,
}

pub const LEGACY_SECTION_TABLE: &[(&str, SectionKey)] = &[
    ("descripción optimizada", SectionKey::VideoDescription),
    ("description optimized", SectionKey::VideoDescription),
    ("comentario para pinear", SectionKey::PinnedComment),
    ("pinned comment", SectionKey::PinnedComment),
    ("descripción simplificada", SectionKey::TiktokDescription),
    ("simplified description", SectionKey::TiktokDescription),
    ("descripción para x", SectionKey::TwitterPost),
    ("description for x", SectionKey::TwitterPost),
    ("descripción para facebook", SectionKey::FacebookDescription),
    ("description for facebook", SectionKey::FacebookDescription),
    ("lista de tags", SectionKey::TagsList),
    ("tags list", SectionKey::TagsList),
    ("teleprompter", SectionKey::Teleprompter),
    ("tags", SectionKey::Tags),
    ("etiquetas", SectionKey::Tags),
];

/// Returns the section opened by `line_lower` (an already lower-cased,
/// trimmed line), or `None` when the line is body content.
pub fn match_section_header(line_lower: &str) -> Option<SectionKey> {
    LEGACY_SECTION_TABLE
        .iter()
        .find(|(phrase, _)| line_lower.starts_with(phrase))
        .map(|&(_, key)| key)
}
