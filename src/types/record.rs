use serde::{Deserialize, Serialize};

/// Normalized content record produced from one pasted document.
///
/// Every bilingual slot is always present and defaults to the empty string,
/// so serialization downstream is total. `tags` holds at most three entries.
/// The wire names (`teleprompterEs`, `tagsListEs`, ...) are the content API's
/// field names.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub title: String,
    pub teleprompter_es: String,
    pub teleprompter_en: String,
    pub video_description_es: String,
    pub video_description_en: String,
    pub tags_list_es: String,
    pub tags_list_en: String,
    pub pinned_comment_es: String,
    pub pinned_comment_en: String,
    pub tiktok_description_es: String,
    pub tiktok_description_en: String,
    pub twitter_post_es: String,
    pub twitter_post_en: String,
    pub facebook_description_es: String,
    pub facebook_description_en: String,
    pub tags: Vec<String>,
}
