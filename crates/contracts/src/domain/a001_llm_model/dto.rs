use super::aggregate::LlmModel;
use serde::{Deserialize, Serialize};

/// Model the signed-in user currently processes documents with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCurrentLlmResponse {
    pub success: bool,
    #[serde(default)]
    pub llm: Option<LlmModel>,
    #[serde(default)]
    pub message: Option<String>,
}

impl GetCurrentLlmResponse {
    /// `Ok(None)` when the user has not picked a model yet
    pub fn into_current(self) -> Result<Option<LlmModel>, String> {
        if self.success {
            Ok(self.llm)
        } else {
            Err(self
                .message
                .unwrap_or_else(|| "Server reported an error".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_current() {
        let picked: GetCurrentLlmResponse = serde_json::from_str(
            r#"{"success": true, "llm": {"id": 3, "name": "gpt-4o", "model_type": "external"}}"#,
        )
        .unwrap();
        let model = picked.into_current().unwrap().unwrap();
        assert_eq!(model.id, "3");
        assert_eq!(model.label(), "gpt-4o (External)");

        let none: GetCurrentLlmResponse =
            serde_json::from_str(r#"{"success": true, "llm": null}"#).unwrap();
        assert_eq!(none.into_current(), Ok(None));

        let denied: GetCurrentLlmResponse =
            serde_json::from_str(r#"{"success": false, "message": "Login required"}"#).unwrap();
        assert_eq!(denied.into_current(), Err("Login required".to_string()));
    }
}
