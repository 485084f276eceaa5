// Declare all modules that are part of this library
pub mod config;
pub mod types {
    pub mod record;
}
pub mod parsing {
    pub mod format;
    pub mod language;
    pub mod legacy;
    pub mod numbered;
    pub mod section_table;
    pub mod segmenter;
}
pub mod payload;

// Re-export the pieces the CLI and downstream callers reach for.
pub use parsing::segmenter::parse_content_text;
pub use payload::{generate_curl_command, generate_update_curl_command};
pub use types::record::ContentRecord;
