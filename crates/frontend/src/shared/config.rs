//! Runtime configuration.
//!
//! The host page embeds a JSON object in
//! `<script id="app-config" type="application/json">`. Every field has a
//! default, so a missing or partial block still yields a working client.

use crate::shared::api_utils::api_url;
use contracts::domain::a001_llm_model::aggregate::LlmModel;
use leptos::prelude::*;
use serde::Deserialize;

const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for every API path; empty means same origin
    pub api_base: String,
    pub settings_get_path: String,
    pub settings_save_path: String,
    /// Completion endpoint. When unset the chat answers with canned replies.
    pub chat_endpoint: Option<String>,
    /// Multipart upload endpoint. When unset uploads are simulated.
    pub upload_endpoint: Option<String>,
    /// Past exchanges to preload into the chat
    pub chat_history_endpoint: Option<String>,
    /// Model shown in the header
    pub current_llm_endpoint: Option<String>,
    pub reply_delay_ms: u32,
    pub upload_delay_ms: u32,
    pub notification_ms: u32,
    pub mobile_breakpoint: f64,
    pub llm_models: Vec<LlmModel>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            settings_get_path: "/api/get-upload-settings/".to_string(),
            settings_save_path: "/api/save-upload-settings/".to_string(),
            chat_endpoint: None,
            upload_endpoint: None,
            chat_history_endpoint: None,
            current_llm_endpoint: None,
            reply_delay_ms: 1000,
            upload_delay_ms: 2000,
            notification_ms: 3000,
            mobile_breakpoint: 768.0,
            llm_models: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Invalid app config: {}", e))
    }

    /// Read the embedded config block, falling back to defaults
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(text) if !text.trim().is_empty() => match Self::from_json(&text) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("{}; using defaults", e);
                    Self::default()
                }
            },
            _ => {
                log::debug!("No #{} block, using default config", CONFIG_ELEMENT_ID);
                Self::default()
            }
        }
    }

    pub fn url(&self, path: &str) -> String {
        api_url(&self.api_base, path)
    }

    pub fn settings_get_url(&self) -> String {
        self.url(&self.settings_get_path)
    }

    pub fn settings_save_url(&self) -> String {
        self.url(&self.settings_save_path)
    }

    pub fn chat_url(&self) -> Option<String> {
        self.chat_endpoint.as_deref().map(|p| self.url(p))
    }

    pub fn upload_url(&self) -> Option<String> {
        self.upload_endpoint.as_deref().map(|p| self.url(p))
    }

    pub fn chat_history_url(&self) -> Option<String> {
        self.chat_history_endpoint.as_deref().map(|p| self.url(p))
    }

    pub fn current_llm_url(&self) -> Option<String> {
        self.current_llm_endpoint.as_deref().map(|p| self.url(p))
    }
}

/// Config provided by `App`
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_json(
            r#"{"api_base": "http://localhost:8000", "reply_delay_ms": 10}"#,
        )
        .unwrap();
        assert_eq!(config.reply_delay_ms, 10);
        assert_eq!(config.upload_delay_ms, 2000);
        assert_eq!(config.notification_ms, 3000);
        assert_eq!(config.mobile_breakpoint, 768.0);
        assert_eq!(
            config.settings_get_url(),
            "http://localhost:8000/api/get-upload-settings/"
        );
        assert!(config.chat_url().is_none());
    }

    #[test]
    fn test_models_and_endpoints() {
        let config = AppConfig::from_json(
            r#"{
                "chat_endpoint": "/api/send-chat-message/",
                "llm_models": [{"id": 1, "name": "gpt-4o", "model_type": "external"}]
            }"#,
        )
        .unwrap();
        assert_eq!(config.chat_url().as_deref(), Some("/api/send-chat-message/"));
        assert_eq!(config.llm_models.len(), 1);
        assert_eq!(config.llm_models[0].id, "1");
    }

    #[test]
    fn test_optional_endpoints() {
        let config = AppConfig::from_json(
            r#"{
                "api_base": "https://docs.example.com/",
                "chat_history_endpoint": "/api/get-chat-history/",
                "current_llm_endpoint": "/api/get-current-llm/"
            }"#,
        )
        .unwrap();
        assert_eq!(
            config.chat_history_url().as_deref(),
            Some("https://docs.example.com/api/get-chat-history/")
        );
        assert_eq!(
            config.current_llm_url().as_deref(),
            Some("https://docs.example.com/api/get-current-llm/")
        );
        assert!(AppConfig::default().chat_history_url().is_none());
        assert!(AppConfig::default().current_llm_url().is_none());
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(AppConfig::from_json("{not json").is_err());
    }
}
