//! Chat - View Model

use contracts::domain::a003_chat_message::aggregate::ChatMessage;
use leptos::prelude::*;

/// Append-only message log
#[derive(Clone, Debug, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    /// Append the trimmed input as a user message.
    /// Returns the text to answer, or `None` for blank input.
    pub fn push_user(&mut self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(text));
        Some(text.to_string())
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(text));
    }

    /// Append the answer to one prompt; a failed reply appends nothing
    pub fn record_reply(&mut self, reply: Result<String, String>) -> Result<(), String> {
        let text = reply?;
        self.push_assistant(text);
        Ok(())
    }

    /// Put restored history ahead of anything typed while it loaded
    pub fn preload(&mut self, history: Vec<ChatMessage>) {
        self.messages.splice(0..0, history);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[derive(Clone, Copy)]
pub struct ChatVm {
    pub log: RwSignal<ChatLog>,
    pub new_message: RwSignal<String>,
    /// Replies still on their way
    pub pending: RwSignal<usize>,
}

impl ChatVm {
    pub fn new() -> Self {
        Self {
            log: RwSignal::new(ChatLog::default()),
            new_message: RwSignal::new(String::new()),
            pending: RwSignal::new(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::model::{ReplyFuture, ReplySource};
    use super::*;
    use contracts::domain::a003_chat_message::aggregate::ChatRole;

    /// Answers every prompt with a fixed prefix, immediately
    struct EchoReplies;

    impl ReplySource for EchoReplies {
        fn reply(&self, prompt: String) -> ReplyFuture {
            Box::pin(std::future::ready(Ok(format!("re: {}", prompt))))
        }
    }

    struct FailingReplies;

    impl ReplySource for FailingReplies {
        fn reply(&self, _prompt: String) -> ReplyFuture {
            Box::pin(std::future::ready(Err("HTTP 503".to_string())))
        }
    }

    fn exchange(log: &mut ChatLog, source: &dyn ReplySource, input: &str) -> Result<(), String> {
        let Some(prompt) = log.push_user(input) else {
            return Ok(());
        };
        let reply = futures::executor::block_on(source.reply(prompt));
        log.record_reply(reply)
    }

    fn roles(log: &ChatLog) -> Vec<ChatRole> {
        log.messages().iter().map(|m| m.role).collect()
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut log = ChatLog::default();
        assert_eq!(log.push_user("   \n"), None);
        assert!(log.is_empty());
    }

    #[test]
    fn test_user_then_assistant() {
        let mut log = ChatLog::default();
        assert_eq!(log.push_user("  hello "), Some("hello".to_string()));
        assert_eq!(log.len(), 1);
        assert_eq!(log.messages()[0].content, "hello");
        assert_eq!(log.messages()[0].role, ChatRole::User);

        log.push_assistant("hi there");
        let roles: Vec<ChatRole> = log.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![ChatRole::User, ChatRole::Assistant]);
    }

    #[test]
    fn test_each_send_gets_exactly_one_reply() {
        let mut log = ChatLog::default();
        exchange(&mut log, &EchoReplies, " first ").unwrap();
        exchange(&mut log, &EchoReplies, "   ").unwrap();
        exchange(&mut log, &EchoReplies, "second").unwrap();

        assert_eq!(
            roles(&log),
            vec![ChatRole::User, ChatRole::Assistant, ChatRole::User, ChatRole::Assistant]
        );
        assert_eq!(log.messages()[1].content, "re: first");
        assert_eq!(log.messages()[3].content, "re: second");
    }

    #[test]
    fn test_failed_reply_appends_nothing() {
        let mut log = ChatLog::default();
        assert_eq!(
            exchange(&mut log, &FailingReplies, "hello"),
            Err("HTTP 503".to_string())
        );
        assert_eq!(roles(&log), vec![ChatRole::User]);
    }

    #[test]
    fn test_preload_goes_before_live_messages() {
        let mut log = ChatLog::default();
        log.push_user("typed while loading");
        log.preload(vec![
            ChatMessage::user("old question"),
            ChatMessage::assistant("old answer"),
        ]);

        let contents: Vec<&str> = log.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["old question", "old answer", "typed while loading"]);
        assert_eq!(log.len(), 3);
    }
}
