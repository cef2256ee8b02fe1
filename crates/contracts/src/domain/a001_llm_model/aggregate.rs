use crate::shared::lenient::string_or_number;
use serde::{Deserialize, Serialize};

/// Where the model runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmModelType {
    Local,
    #[default]
    External,
}

impl LlmModelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmModelType::Local => "local",
            LlmModelType::External => "external",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LlmModelType::Local => "Local",
            LlmModelType::External => "External",
        }
    }
}

/// A model the user can pick for document processing.
///
/// The id is whatever the host application uses as primary key; it is kept
/// as a string because that is how the settings store echoes it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmModel {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub model_type: LlmModelType,
    #[serde(default)]
    pub model_provider: Option<String>,
}

impl LlmModel {
    /// Select option label, e.g. `gpt-4o (External)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.model_type.display_name())
    }
}
