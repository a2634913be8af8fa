//! The core models for managing a stateful chat with an LLM.
use serde::Serialize;

use crate::openai::Message;

/// Ordered history of the user and assistant messages in a
/// session. The system prompt is never stored here since it can
/// change between turns.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Transcript(Vec<Message>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn new_with_messages(messages: Vec<Message>) -> Self {
        Self(messages)
    }

    /// The current messages in the order they were added.
    pub fn messages(&self) -> &[Message] {
        &self.0
    }

    pub fn push(&mut self, msg: Message) {
        self.0.push(msg)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.0.iter()
    }
}
