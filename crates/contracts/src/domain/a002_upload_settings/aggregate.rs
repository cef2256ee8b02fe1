use serde::{Deserialize, Serialize};

pub const CHUNK_SIZE_MIN: i64 = 100;
pub const CHUNK_SIZE_MAX: i64 = 5000;
pub const CHUNK_OVERLAP_MIN: i64 = 0;
pub const CHUNK_OVERLAP_MAX: i64 = 1000;

pub const DEFAULT_CHUNK_SIZE: i64 = 1000;
pub const DEFAULT_CHUNK_OVERLAP: i64 = 200;

/// Editable fields of the upload settings form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsField {
    Model,
    PromptText,
    ChunkSize,
    ChunkOverlap,
}

impl SettingsField {
    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsField::Model => "selected_llm",
            SettingsField::PromptText => "prompt_text",
            SettingsField::ChunkSize => "chunk_size",
            SettingsField::ChunkOverlap => "chunk_overlap",
        }
    }
}

/// Validation failure. Checks run in declaration order and the first one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Please select an LLM model.")]
    ModelNotSelected,
    #[error("Chunk size must be between {min} and {max}.", min = CHUNK_SIZE_MIN, max = CHUNK_SIZE_MAX)]
    ChunkSizeOutOfRange,
    #[error("Chunk overlap must be between {min} and {max}.", min = CHUNK_OVERLAP_MIN, max = CHUNK_OVERLAP_MAX)]
    ChunkOverlapOutOfRange,
    #[error("Chunk overlap must be smaller than the chunk size.")]
    OverlapNotSmallerThanSize,
}

impl SettingsError {
    /// Field that should receive focus
    pub fn field(&self) -> SettingsField {
        match self {
            SettingsError::ModelNotSelected => SettingsField::Model,
            SettingsError::ChunkSizeOutOfRange => SettingsField::ChunkSize,
            SettingsError::ChunkOverlapOutOfRange | SettingsError::OverlapNotSmallerThanSize => {
                SettingsField::ChunkOverlap
            }
        }
    }
}

/// Document upload settings as stored per user on the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSettings {
    pub selected_llm: String,
    pub prompt_text: String,
    pub chunk_size: i64,
    pub chunk_overlap: i64,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            selected_llm: String::new(),
            prompt_text: String::new(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

impl UploadSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.selected_llm.trim().is_empty() {
            return Err(SettingsError::ModelNotSelected);
        }
        if !(CHUNK_SIZE_MIN..=CHUNK_SIZE_MAX).contains(&self.chunk_size) {
            return Err(SettingsError::ChunkSizeOutOfRange);
        }
        if !(CHUNK_OVERLAP_MIN..=CHUNK_OVERLAP_MAX).contains(&self.chunk_overlap) {
            return Err(SettingsError::ChunkOverlapOutOfRange);
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(SettingsError::OverlapNotSmallerThanSize);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(model: &str, size: i64, overlap: i64) -> UploadSettings {
        UploadSettings {
            selected_llm: model.to_string(),
            prompt_text: String::new(),
            chunk_size: size,
            chunk_overlap: overlap,
        }
    }

    #[test]
    fn test_accepts_valid_settings() {
        assert_eq!(settings("gpt", 1000, 999).validate(), Ok(()));
        assert_eq!(settings("gpt", 100, 0).validate(), Ok(()));
        assert_eq!(settings("gpt", 5000, 1000).validate(), Ok(()));
    }

    #[test]
    fn test_chunk_size_bounds() {
        assert_eq!(
            settings("gpt", 50, 0).validate(),
            Err(SettingsError::ChunkSizeOutOfRange)
        );
        assert_eq!(
            settings("gpt", 5001, 0).validate(),
            Err(SettingsError::ChunkSizeOutOfRange)
        );
    }

    #[test]
    fn test_overlap_rules() {
        assert_eq!(
            settings("gpt", 1000, -1).validate(),
            Err(SettingsError::ChunkOverlapOutOfRange)
        );
        // 5000/5000 trips the range check before the ordering check
        assert_eq!(
            settings("gpt", 5000, 5000).validate(),
            Err(SettingsError::ChunkOverlapOutOfRange)
        );
        assert_eq!(
            settings("gpt", 500, 500).validate(),
            Err(SettingsError::OverlapNotSmallerThanSize)
        );
    }

    #[test]
    fn test_first_failure_wins() {
        let err = settings("  ", 50, 5000).validate().unwrap_err();
        assert_eq!(err, SettingsError::ModelNotSelected);
        assert_eq!(err.field(), SettingsField::Model);
        assert_eq!(err.to_string(), "Please select an LLM model.");
    }

    #[test]
    fn test_error_messages_carry_bounds() {
        assert_eq!(
            SettingsError::ChunkSizeOutOfRange.to_string(),
            "Chunk size must be between 100 and 5000."
        );
        assert_eq!(
            SettingsError::ChunkOverlapOutOfRange.field(),
            SettingsField::ChunkOverlap
        );
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(settings("3", 1200, 100)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "selected_llm": "3",
                "prompt_text": "",
                "chunk_size": 1200,
                "chunk_overlap": 100
            })
        );
    }
}
