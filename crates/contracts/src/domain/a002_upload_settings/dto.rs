use crate::shared::lenient::{opt_lenient_int, opt_string_or_number};
use serde::{Deserialize, Serialize};

/// Settings as returned by the retrieval endpoint. Every field is optional:
/// a user who never saved gets `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSettingsPatch {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub selected_llm: Option<String>,
    #[serde(default)]
    pub prompt_text: Option<String>,
    #[serde(default, deserialize_with = "opt_lenient_int")]
    pub chunk_size: Option<i64>,
    #[serde(default, deserialize_with = "opt_lenient_int")]
    pub chunk_overlap: Option<i64>,
}

impl UploadSettingsPatch {
    pub fn is_empty(&self) -> bool {
        self.selected_llm.is_none()
            && self.prompt_text.is_none()
            && self.chunk_size.is_none()
            && self.chunk_overlap.is_none()
    }
}

/// `GET /api/get-upload-settings/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUploadSettingsResponse {
    pub success: bool,
    #[serde(default)]
    pub settings: Option<UploadSettingsPatch>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /api/save-upload-settings/`; the request body is
/// [`super::aggregate::UploadSettings`] itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveUploadSettingsResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}
