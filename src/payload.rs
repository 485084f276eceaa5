//! Builds the API request payloads and the curl command strings.
//!
//! Field declaration order below is the JSON key order of the generated
//! payloads; serde serializes struct fields in order, which keeps the
//! emitted body stable for diffing saved commands.

use serde::Serialize;

use crate::types::record::ContentRecord;

/// Payload for creating a new record (POST). Carries the publish-state
/// defaults ahead of the bilingual fields.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayload {
    pub title: String,
    pub published_es: bool,
    pub published_en: bool,
    pub published_date_es: Option<String>,
    pub published_date_en: Option<String>,
    pub published_url_es: String,
    pub published_url_en: String,
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

impl From<&ContentRecord> for CreatePayload {
    fn from(record: &ContentRecord) -> Self {
        Self {
            title: record.title.clone(),
            published_es: false,
            published_en: false,
            published_date_es: None,
            published_date_en: None,
            published_url_es: String::new(),
            published_url_en: String::new(),
            teleprompter_es: record.teleprompter_es.clone(),
            teleprompter_en: record.teleprompter_en.clone(),
            video_description_es: record.video_description_es.clone(),
            video_description_en: record.video_description_en.clone(),
            tags_list_es: record.tags_list_es.clone(),
            tags_list_en: record.tags_list_en.clone(),
            pinned_comment_es: record.pinned_comment_es.clone(),
            pinned_comment_en: record.pinned_comment_en.clone(),
            tiktok_description_es: record.tiktok_description_es.clone(),
            tiktok_description_en: record.tiktok_description_en.clone(),
            twitter_post_es: record.twitter_post_es.clone(),
            twitter_post_en: record.twitter_post_en.clone(),
            facebook_description_es: record.facebook_description_es.clone(),
            facebook_description_en: record.facebook_description_en.clone(),
            tags: record.tags.clone(),
        }
    }
}

/// Payload for updating an existing record (PUT). Publish state is owned by
/// the backend once a record exists, so those fields are omitted.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePayload {
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

impl From<&ContentRecord> for UpdatePayload {
    fn from(record: &ContentRecord) -> Self {
        Self {
            title: record.title.clone(),
            teleprompter_es: record.teleprompter_es.clone(),
            teleprompter_en: record.teleprompter_en.clone(),
            video_description_es: record.video_description_es.clone(),
            video_description_en: record.video_description_en.clone(),
            tags_list_es: record.tags_list_es.clone(),
            tags_list_en: record.tags_list_en.clone(),
            pinned_comment_es: record.pinned_comment_es.clone(),
            pinned_comment_en: record.pinned_comment_en.clone(),
            tiktok_description_es: record.tiktok_description_es.clone(),
            tiktok_description_en: record.tiktok_description_en.clone(),
            twitter_post_es: record.twitter_post_es.clone(),
            twitter_post_en: record.twitter_post_en.clone(),
            facebook_description_es: record.facebook_description_es.clone(),
            facebook_description_en: record.facebook_description_en.clone(),
            tags: record.tags.clone(),
        }
    }
}

/// Escapes a string for embedding inside a single-quoted shell argument:
/// each literal `'` becomes `'\''`.
pub fn escape_single_quotes(text: &str) -> String {
    text.replace('\'', "'\\''")
}

fn render_curl(method: &str, url: &str, json: &str) -> String {
    format!(
        "curl -X {} {} \\\n  -H \"Content-Type: application/json\" \\\n  -d '{}'",
        method,
        url,
        escape_single_quotes(json)
    )
}

/// Generates the curl command that creates a new record via POST.
pub fn generate_curl_command(record: &ContentRecord, api_url: &str) -> Result<String, String> {
    let json = serde_json::to_string_pretty(&CreatePayload::from(record))
        .map_err(|e| format!("Failed to serialize create payload: {}", e))?;
    Ok(render_curl("POST", api_url, &json))
}

/// Generates the curl command that updates the record with `content_id` via
/// PUT on `{api_url}/{content_id}`.
pub fn generate_update_curl_command(
    record: &ContentRecord,
    api_url: &str,
    content_id: &str,
) -> Result<String, String> {
    let json = serde_json::to_string_pretty(&UpdatePayload::from(record))
        .map_err(|e| format!("Failed to serialize update payload: {}", e))?;
    Ok(render_curl("PUT", &format!("{}/{}", api_url, content_id), &json))
}
