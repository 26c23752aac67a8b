//! Chat prompt construction for summary requests

use serde::{Deserialize, Serialize};
use textgist_domain::SummaryLength;

/// Persona placed in front of every length directive
pub const SYSTEM_PERSONA: &str = "You are a helpful text summarization assistant.";

/// Instruction placed in front of the text in the user message
pub const USER_INSTRUCTION: &str = "Summarize the following text:";

/// One message of a chat-completion request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// `system` or `user`
    pub role: String,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    fn new(role: &str, content: String) -> Self {
        Self {
            role: role.to_string(),
            content,
        }
    }
}

/// The complete request body sent to the chat-completion endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryPrompt {
    /// Model identifier
    pub model: String,
    /// System message followed by user message
    pub messages: Vec<ChatMessage>,
    /// Always `false`: the summary is read in one piece
    pub stream: bool,
}

impl SummaryPrompt {
    /// Content of the system message
    pub fn system(&self) -> &str {
        self.message("system")
    }

    /// Content of the user message
    pub fn user(&self) -> &str {
        self.message("user")
    }

    fn message(&self, role: &str) -> &str {
        self.messages
            .iter()
            .find(|m| m.role == role)
            .map(|m| m.content.as_str())
            .unwrap_or_default()
    }
}

/// Builds the two-message summary prompt
pub struct PromptBuilder<'a> {
    text: &'a str,
    length: SummaryLength,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder for already truncated text
    pub fn new(text: &'a str, length: SummaryLength) -> Self {
        Self { text, length }
    }

    /// Build the request body for `model`
    pub fn build(&self, model: &str) -> SummaryPrompt {
        let system = format!("{} {}", SYSTEM_PERSONA, self.length.directive());
        let user = format!("{}\n\n{}", USER_INSTRUCTION, self.text);

        SummaryPrompt {
            model: model.to_string(),
            messages: vec![
                ChatMessage::new("system", system),
                ChatMessage::new("user", user),
            ],
            stream: false,
        }
    }
}
