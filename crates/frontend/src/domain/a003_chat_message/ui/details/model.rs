//! Chat - Model (reply sources)
//!
//! The assistant side of the chat is a [`ReplySource`]. Without a configured
//! completion endpoint the chat acknowledges with canned replies after a
//! fixed delay; with one, every message is posted to it.

use crate::shared::config::AppConfig;
use contracts::domain::a003_chat_message::aggregate::ChatMessage;
use contracts::domain::a003_chat_message::dto::{
    GetChatHistoryResponse, SendChatMessageRequest, SendChatMessageResponse,
};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub type ReplyFuture = Pin<Box<dyn Future<Output = Result<String, String>>>>;

/// Produces the assistant's answer to one user message
pub trait ReplySource {
    fn reply(&self, prompt: String) -> ReplyFuture;
}

pub const CANNED_REPLIES: [&str; 5] = [
    "Thanks for your question. Let me look through the documents.",
    "I'm checking the uploaded documents for the relevant passages.",
    "Good question. I'll search the related sections for you.",
    "Understood. I'm gathering the supporting evidence now.",
    "Let me review the documents and get back to you with an answer.",
];

/// Stand-in assistant: one of [`CANNED_REPLIES`], uniformly at random
#[derive(Clone, Debug)]
pub struct CannedReplies {
    pub delay_ms: u32,
}

impl CannedReplies {
    /// Map a roll in `[0, 1)` onto a reply
    pub fn pick(roll: f64) -> &'static str {
        let len = CANNED_REPLIES.len();
        let index = (roll.clamp(0.0, 1.0) * len as f64) as usize;
        CANNED_REPLIES[index.min(len - 1)]
    }
}

impl ReplySource for CannedReplies {
    fn reply(&self, _prompt: String) -> ReplyFuture {
        let delay_ms = self.delay_ms;
        Box::pin(async move {
            TimeoutFuture::new(delay_ms).await;
            Ok(Self::pick(js_sys::Math::random()).to_string())
        })
    }
}

/// Completion service over HTTP
#[derive(Clone, Debug)]
pub struct RemoteReplies {
    pub url: String,
}

impl ReplySource for RemoteReplies {
    fn reply(&self, prompt: String) -> ReplyFuture {
        let url = self.url.clone();
        Box::pin(async move { send_message(&url, prompt).await })
    }
}

/// POST one message to the completion endpoint
pub async fn send_message(url: &str, message: String) -> Result<String, String> {
    let body = SendChatMessageRequest { message };
    let response = Request::post(url)
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let status = response.status();
    let data: SendChatMessageResponse = response
        .json()
        .await
        .map_err(|_| format!("HTTP {}", status))?;

    data.into_reply()
}

/// Earlier exchanges of the signed-in user, oldest first
pub async fn fetch_history(url: &str) -> Result<Vec<ChatMessage>, String> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let status = response.status();
    let data: GetChatHistoryResponse = response
        .json()
        .await
        .map_err(|_| format!("HTTP {}", status))?;

    data.into_messages()
}

pub fn reply_source(config: &AppConfig) -> Arc<dyn ReplySource + Send + Sync> {
    match config.chat_url() {
        Some(url) => {
            log::info!("chat replies from {}", url);
            Arc::new(RemoteReplies { url })
        }
        None => Arc::new(CannedReplies {
            delay_ms: config.reply_delay_ms,
        }),
    }
}
