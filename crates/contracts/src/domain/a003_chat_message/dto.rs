use super::aggregate::{ChatMessage, ChatRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of a completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendChatMessageRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendChatMessageResponse {
    pub success: bool,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl SendChatMessageResponse {
    /// Assistant text, or the server's error message
    pub fn into_reply(self) -> Result<String, String> {
        match (self.success, self.response) {
            (true, Some(text)) => Ok(text),
            (true, None) => Err("Empty response from server".to_string()),
            (false, _) => Err(self
                .message
                .unwrap_or_else(|| "Server reported an error".to_string())),
        }
    }
}

/// One stored exchange: the user's request and the answer it got
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistoryEntry {
    pub req_content: String,
    pub res_content: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetChatHistoryResponse {
    pub success: bool,
    #[serde(default)]
    pub messages: Vec<ChatHistoryEntry>,
    #[serde(default)]
    pub message: Option<String>,
}

impl GetChatHistoryResponse {
    /// Flatten the exchanges into a chat log, oldest first.
    ///
    /// Entries are ordered by `created_at` when every entry has one;
    /// otherwise the server's newest-first order is reversed.
    pub fn into_messages(self) -> Result<Vec<ChatMessage>, String> {
        if !self.success {
            return Err(self
                .message
                .unwrap_or_else(|| "Server reported an error".to_string()));
        }

        let mut entries = self.messages;
        if entries.iter().all(|e| e.created_at.is_some()) {
            entries.sort_by_key(|e| e.created_at);
        } else {
            entries.reverse();
        }

        let now = Utc::now();
        Ok(entries
            .into_iter()
            .flat_map(|e| {
                let at = e.created_at.unwrap_or(now);
                [
                    ChatMessage::at(ChatRole::User, e.req_content, at),
                    ChatMessage::at(ChatRole::Assistant, e.res_content, at),
                ]
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_reply() {
        let ok: SendChatMessageResponse =
            serde_json::from_str(r#"{"success": true, "response": "Hi"}"#).unwrap();
        assert_eq!(ok.into_reply(), Ok("Hi".to_string()));

        let failed: SendChatMessageResponse =
            serde_json::from_str(r#"{"success": false, "message": "quota exceeded"}"#).unwrap();
        assert_eq!(failed.into_reply(), Err("quota exceeded".to_string()));

        let empty: SendChatMessageResponse =
            serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(empty.into_reply().is_err());
    }

    #[test]
    fn test_history_pairs_become_user_then_assistant() {
        let resp: GetChatHistoryResponse = serde_json::from_str(
            r#"{"success": true, "messages": [
                {"req_content": "second?", "res_content": "B", "created_at": "2024-05-02T10:00:00Z"},
                {"req_content": "first?", "res_content": "A", "created_at": "2024-05-01T10:00:00Z"}
            ]}"#,
        )
        .unwrap();
        let log = resp.into_messages().unwrap();

        let flat: Vec<(ChatRole, &str)> =
            log.iter().map(|m| (m.role, m.content.as_str())).collect();
        assert_eq!(
            flat,
            vec![
                (ChatRole::User, "first?"),
                (ChatRole::Assistant, "A"),
                (ChatRole::User, "second?"),
                (ChatRole::Assistant, "B"),
            ]
        );
    }

    #[test]
    fn test_history_without_timestamps_is_reversed() {
        let resp: GetChatHistoryResponse = serde_json::from_str(
            r#"{"success": true, "messages": [
                {"req_content": "newer", "res_content": "2"},
                {"req_content": "older", "res_content": "1"}
            ]}"#,
        )
        .unwrap();
        let log = resp.into_messages().unwrap();
        assert_eq!(log[0].content, "older");
        assert_eq!(log[3].content, "2");
    }

    #[test]
    fn test_history_failure_and_empty() {
        let denied: GetChatHistoryResponse =
            serde_json::from_str(r#"{"success": false, "message": "Login required"}"#).unwrap();
        assert_eq!(denied.into_messages(), Err("Login required".to_string()));

        let empty: GetChatHistoryResponse =
            serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(empty.into_messages(), Ok(Vec::new()));
    }
}
