//! Entry point of the segmentation core.

use crate::parsing::format::{detect_input_format, InputFormat};
use crate::parsing::{legacy, numbered};
use crate::types::record::ContentRecord;

/// Parses one pasted document into a content record.
///
/// Total function: any input, including empty text, yields a record with
/// every field present (unmatched fields keep their defaults). A fresh
/// record is built per call and threaded through the chosen segmenter, so
/// concurrent calls share no state.
pub fn parse_content_text(text: &str) -> ContentRecord {
    let record = ContentRecord::default();
    match detect_input_format(text) {
        InputFormat::Numbered => numbered::parse_numbered_format(text, record),
        InputFormat::Legacy => legacy::parse_legacy_format(text, record),
    }
}
